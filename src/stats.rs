//! Book-level aggregates shown above the client list.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::client::{Client, ClientStatus};

pub fn total_aua(clients: &[Client]) -> f64 {
    clients.iter().map(|c| c.aua).sum()
}

/// Mean AUA, zero for an empty book.
pub fn average_aua(clients: &[Client]) -> f64 {
    if clients.is_empty() {
        return 0.0;
    }
    total_aua(clients) / clients.len() as f64
}

pub fn distribution_by_country(clients: &[Client]) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for client in clients {
        *distribution.entry(client.country.clone()).or_insert(0) += 1;
    }
    distribution
}

pub fn distribution_by_status(clients: &[Client]) -> BTreeMap<ClientStatus, usize> {
    let mut distribution = BTreeMap::new();
    for client in clients {
        *distribution.entry(client.status).or_insert(0) += 1;
    }
    distribution
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PortfolioSummary {
    pub client_count: usize,
    pub total_aua: f64,
    pub average_aua: f64,
    pub by_country: BTreeMap<String, usize>,
    pub by_status: BTreeMap<ClientStatus, usize>,
}

impl PortfolioSummary {
    pub fn from_clients(clients: &[Client]) -> Self {
        Self {
            client_count: clients.len(),
            total_aua: total_aua(clients),
            average_aua: average_aua(clients),
            by_country: distribution_by_country(clients),
            by_status: distribution_by_status(clients),
        }
    }
}
