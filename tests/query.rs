use advisory_crm::domain::client::{ClientStatus, SubscriptionType};
use advisory_crm::query::{
    AuaBracket, AuaRange, ClientQuery, LastContactWindow, SortOrder, days_since_contact,
    sort_by_aua,
};
use advisory_crm::repository::ClientReader;

mod common;

use common::{at, client, ids, scenario_clients, scenario_repo};

#[test]
fn aua_lower_bound_without_upper() {
    let clients = scenario_clients();
    let query = ClientQuery::new().aua_range(AuaRange::at_least(50_000.0));

    assert_eq!(ids(&query.apply(&clients, at(2026, 2, 4))), vec!["b"]);
}

#[test]
fn aua_bounds_are_inclusive() {
    let clients = scenario_clients();
    let query = ClientQuery::new().aua_range(AuaRange::new(8_500.0, Some(35_000.0)));

    assert_eq!(ids(&query.apply(&clients, at(2026, 2, 4))), vec!["a", "c"]);
}

#[test]
fn descending_aua_sort() {
    let mut clients = scenario_clients();
    sort_by_aua(&mut clients, SortOrder::Desc);
    assert_eq!(ids(&clients), vec!["b", "a", "c"]);
}

#[test]
fn equal_aua_keeps_input_order() {
    let mut clients = vec![
        client("x", "Ann Lee", "UK", 10_000.0, at(2026, 1, 1)),
        client("y", "Bob Lee", "UK", 10_000.0, at(2026, 1, 2)),
        client("z", "Cat Lee", "UK", 5_000.0, at(2026, 1, 3)),
    ];
    sort_by_aua(&mut clients, SortOrder::Desc);
    assert_eq!(ids(&clients), vec!["x", "y", "z"]);

    sort_by_aua(&mut clients, SortOrder::Asc);
    assert_eq!(ids(&clients), vec!["z", "x", "y"]);
}

#[test]
fn empty_selection_does_not_filter() {
    let clients = scenario_clients();
    let query = ClientQuery::new()
        .countries(Vec::<String>::new())
        .statuses(Vec::new());

    assert_eq!(query.apply(&clients, at(2026, 2, 4)).len(), 3);
    assert!(!query.is_filtered());
}

#[test]
fn country_selection_is_a_union() {
    let clients = scenario_clients();
    let query = ClientQuery::new().countries(["Ghana", "UK"]);

    assert_eq!(ids(&query.apply(&clients, at(2026, 2, 4))), vec!["a", "c"]);
}

#[test]
fn recency_window_counts_whole_days() {
    let clients = scenario_clients();
    let now = at(2026, 2, 9);

    assert_eq!(days_since_contact(&clients[0], now), 8);
    let week = ClientQuery::new().last_contact_within(LastContactWindow::Last7Days);
    assert!(week.apply(&clients, now).is_empty());

    // exactly 30 days is still inside the window
    assert_eq!(days_since_contact(&clients[1], now), 30);
    let month = ClientQuery::new().last_contact_within(LastContactWindow::Last30Days);
    assert_eq!(ids(&month.apply(&clients, now)), vec!["a", "b"]);

    let quarter = ClientQuery::new().last_contact_within(LastContactWindow::Last90Days);
    assert_eq!(ids(&quarter.apply(&clients, now)), vec!["a", "b", "c"]);
}

#[test]
fn search_matches_name_country_and_labels() {
    let clients = scenario_clients();
    let now = at(2026, 2, 4);

    let by_name = ClientQuery::new().search("DUBOIS");
    assert_eq!(ids(&by_name.apply(&clients, now)), vec!["b"]);

    let by_country = ClientQuery::new().search("ghana");
    assert_eq!(ids(&by_country.apply(&clients, now)), vec!["a"]);

    let by_tier = ClientQuery::new().search("core");
    assert_eq!(by_tier.apply(&clients, now).len(), 3);
}

#[test]
fn aua_sort_outranks_last_contact_sort() {
    let clients = vec![
        client("old", "Ann Lee", "UK", 10_000.0, at(2025, 1, 1)),
        client("new", "Bob Lee", "UK", 10_000.0, at(2026, 1, 1)),
        client("big", "Cat Lee", "UK", 90_000.0, at(2024, 1, 1)),
    ];
    let query = ClientQuery::new()
        .sort_by_last_contact(SortOrder::Desc)
        .sort_by_aua(SortOrder::Desc);

    assert_eq!(
        ids(&query.apply(&clients, at(2026, 2, 1))),
        vec!["big", "new", "old"]
    );
}

#[test]
fn pipeline_over_sample_book() {
    let repo = advisory_crm::repository::InMemoryRepository::with_default_fixture().unwrap();
    let clients = repo.list_clients().unwrap();

    let query = ClientQuery::new()
        .statuses([ClientStatus::Active])
        .subscriptions([SubscriptionType::Concierge])
        .aua_bracket(AuaBracket::Over500k)
        .sort_by_aua(SortOrder::Asc);

    assert_eq!(
        ids(&query.apply(&clients, at(2026, 2, 4))),
        vec!["cl_005", "cl_007"]
    );
}

#[test]
fn applying_a_query_leaves_the_store_untouched() {
    let repo = scenario_repo();
    let before = repo.list_clients().unwrap();

    let query = ClientQuery::new().sort_by_aua(SortOrder::Desc);
    let _ = query.apply(&before, at(2026, 2, 4));

    assert_eq!(ids(&repo.list_clients().unwrap()), vec!["a", "b", "c"]);
}
