#![allow(dead_code)]

use advisory_crm::domain::client::{
    Client, ClientStatus, NewClient, RiskProfile, SubscriptionType,
};
use advisory_crm::domain::types::{ClientEmail, ClientId};
use advisory_crm::repository::InMemoryRepository;
use chrono::{NaiveDate, NaiveDateTime};

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Minimal client; the last-contacted date doubles as the creation date.
pub fn client(
    id: &str,
    name: &str,
    country: &str,
    aua: f64,
    last_contacted_at: NaiveDateTime,
) -> Client {
    let (first_name, last_name) = name.split_once(' ').unwrap_or((name, ""));
    NewClient::new(
        first_name.into(),
        last_name.into(),
        ClientEmail::new(format!("{id}@example.com")).unwrap(),
        None,
        country.into(),
        ClientStatus::Active,
        RiskProfile::Balanced,
        SubscriptionType::Core,
        aua,
    )
    .into_client(ClientId::new(id).unwrap(), last_contacted_at)
}

/// The three-client book used across the query scenarios.
pub fn scenario_clients() -> Vec<Client> {
    vec![
        client("a", "Kojo Owusu", "Ghana", 35_000.0, at(2026, 2, 1)),
        client("b", "Marie Dubois", "France", 520_000.0, at(2026, 1, 10)),
        client("c", "Efua Asare", "UK", 8_500.0, at(2025, 11, 20)),
    ]
}

pub fn scenario_repo() -> InMemoryRepository {
    InMemoryRepository::new(scenario_clients()).unwrap()
}

pub fn ids(clients: &[Client]) -> Vec<String> {
    clients.iter().map(|c| c.id.to_string()).collect()
}
