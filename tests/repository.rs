use advisory_crm::domain::client::{ClientStatus, NewClient, RiskProfile, SubscriptionType};
use advisory_crm::domain::communication::{
    CommunicationDirection, CommunicationType, NewCommunication,
};
use advisory_crm::domain::financial::FinancialData;
use advisory_crm::domain::types::{ClientEmail, ClientId, NoteId};
use advisory_crm::repository::errors::RepositoryError;
use advisory_crm::repository::{ClientReader, ClientWriter, InMemoryRepository};

mod common;

use common::{at, client, ids, scenario_clients, scenario_repo};

#[test]
fn sample_book_lookups() {
    let repo = InMemoryRepository::with_default_fixture().unwrap();

    assert_eq!(repo.len().unwrap(), 10);

    let ama = repo
        .get_client_by_id(&ClientId::new("cl_001").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(ama.full_name(), "Ama Mensah");

    assert_eq!(
        repo.list_clients_by_status(ClientStatus::Active)
            .unwrap()
            .len(),
        5
    );
    assert_eq!(repo.list_clients_by_country("ghana").unwrap().len(), 2);
    assert_eq!(
        ids(&repo.list_clients_by_advisor("Claire Fontaine").unwrap()),
        vec!["cl_004", "cl_005", "cl_007"]
    );
    assert!(repo.list_clients_by_advisor("Nobody").unwrap().is_empty());
}

#[test]
fn unknown_id_is_absent_not_an_error() {
    let repo = scenario_repo();
    let missing = repo
        .get_client_by_id(&ClientId::new("zz").unwrap())
        .unwrap();
    assert!(missing.is_none());
}

#[test]
fn financial_fields_are_derived_on_load() {
    let mut with_finances = client("f", "Ana Reyes", "Spain", 10_000.0, at(2026, 1, 1));
    with_finances.financial_data = Some(FinancialData {
        monthly_income: Some(6_000.0),
        monthly_expenses: Some(4_500.0),
        cash_savings: Some(20_000.0),
        real_estate_value: Some(180_000.0),
        mortgage_debt: Some(90_000.0),
        // stale value that must be recomputed
        net_worth: 1.0,
        ..FinancialData::default()
    });

    let repo = InMemoryRepository::new(vec![with_finances]).unwrap();
    let loaded = repo
        .get_client_by_id(&ClientId::new("f").unwrap())
        .unwrap()
        .unwrap();
    let data = loaded.financial_data.unwrap();

    assert_eq!(data.total_assets, 200_000.0);
    assert_eq!(data.total_liabilities, 90_000.0);
    assert_eq!(data.net_worth, 110_000.0);
    assert_eq!(data.debt_to_asset_ratio, Some(0.45));
    assert_eq!(data.monthly_savings, Some(1_500.0));
}

#[test]
fn rejects_duplicate_ids_and_negative_aua() {
    let mut clients = scenario_clients();
    clients.push(clients[0].clone());
    assert!(matches!(
        InMemoryRepository::new(clients),
        Err(RepositoryError::ConstraintViolation(_))
    ));

    let negative = client("n", "Neg Ative", "UK", -1.0, at(2026, 1, 1));
    assert!(matches!(
        InMemoryRepository::new(vec![negative]),
        Err(RepositoryError::ValidationError(_))
    ));
}

#[test]
fn saved_snapshots_do_not_change_held_values() {
    let repo = scenario_repo();
    let id = ClientId::new("a").unwrap();
    let held = repo.get_client_by_id(&id).unwrap().unwrap();

    let updated = held.add_note("Prefers calls after 5pm", "Daniel Boateng");
    repo.save_client(&updated).unwrap();

    assert!(held.notes.is_empty());
    let stored = repo.get_client_by_id(&id).unwrap().unwrap();
    assert_eq!(stored.notes.len(), 1);

    let note_id: NoteId = stored.notes[0].id.clone();
    let removed = stored.delete_note(&note_id);
    repo.save_client(&removed).unwrap();
    assert!(repo.get_client_by_id(&id).unwrap().unwrap().notes.is_empty());
}

#[test]
fn communication_moves_last_contact_forward() {
    let repo = scenario_repo();
    let id = ClientId::new("c").unwrap();
    let before = repo.get_client_by_id(&id).unwrap().unwrap();

    let payload =
        NewCommunication::new(CommunicationType::Call, "Annual review", CommunicationDirection::Outbound);
    let updated = before.add_communication_at(payload, at(2026, 2, 10));
    repo.save_client(&updated).unwrap();

    let stored = repo.get_client_by_id(&id).unwrap().unwrap();
    assert_eq!(stored.communications.len(), 1);
    assert_eq!(stored.last_contacted_at, at(2026, 2, 10));
    assert_eq!(before.last_contacted_at, at(2025, 11, 20));
}

#[test]
fn saving_unknown_client_is_not_found() {
    let repo = scenario_repo();
    let stranger = client("x", "Not Stored", "Peru", 0.0, at(2026, 1, 1));
    assert!(matches!(
        repo.save_client(&stranger),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn created_clients_get_fresh_ids() {
    let repo = scenario_repo();
    let new_client = NewClient::new(
        "Lucas".into(),
        "Silva".into(),
        ClientEmail::new("lucas@example.com").unwrap(),
        Some("Recife".into()),
        "Brazil".into(),
        ClientStatus::Prospect,
        RiskProfile::Growth,
        SubscriptionType::Essentials,
        15_000.0,
    );

    let created = repo.create_client(&new_client).unwrap();
    assert!(created.id.as_str().starts_with("cl_"));
    assert_eq!(repo.len().unwrap(), 4);
    assert_eq!(
        repo.get_client_by_id(&created.id).unwrap().unwrap().location(),
        "Recife, Brazil"
    );
}
