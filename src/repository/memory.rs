//! In-memory client book.
//!
//! The store is built once from fixture records and shared by handle. Reads
//! hand out cloned snapshots; writes swap a whole client record, so a value a
//! caller already holds never changes underneath it.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::domain::client::{Client, ClientStatus, ClientUpdate, NewClient};
use crate::domain::types::{ClientId, non_negative_amount};
use crate::fixtures;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, ClientWriter};

#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    clients: Arc<RwLock<Vec<Client>>>,
}

impl InMemoryRepository {
    /// Builds the store, deriving financial fields for every record.
    ///
    /// Fails on duplicate ids or a negative AUA.
    pub fn new(clients: Vec<Client>) -> RepositoryResult<Self> {
        let mut seen = HashSet::new();
        let mut derived = Vec::with_capacity(clients.len());

        for client in clients {
            if !seen.insert(client.id.clone()) {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "Duplicate client id: {}",
                    client.id
                )));
            }
            non_negative_amount(client.aua).map_err(|err| {
                RepositoryError::ValidationError(format!("Client {}: {err}", client.id))
            })?;
            derived.push(client.with_calculations());
        }

        Ok(Self {
            clients: Arc::new(RwLock::new(derived)),
        })
    }

    /// Store seeded with the bundled sample book.
    pub fn with_default_fixture() -> RepositoryResult<Self> {
        Self::new(fixtures::default_clients()?)
    }

    pub fn len(&self) -> RepositoryResult<usize> {
        Ok(self.clients.read()?.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.len()? == 0)
    }

    fn filtered<F>(&self, predicate: F) -> RepositoryResult<Vec<Client>>
    where
        F: Fn(&Client) -> bool,
    {
        let clients = self.clients.read()?;
        Ok(clients.iter().filter(|c| predicate(c)).cloned().collect())
    }
}

impl ClientReader for InMemoryRepository {
    fn get_client_by_id(&self, id: &ClientId) -> RepositoryResult<Option<Client>> {
        let clients = self.clients.read()?;
        Ok(clients.iter().find(|c| &c.id == id).cloned())
    }

    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        Ok(self.clients.read()?.clone())
    }

    fn list_clients_by_status(&self, status: ClientStatus) -> RepositoryResult<Vec<Client>> {
        self.filtered(|c| c.status == status)
    }

    fn list_clients_by_country(&self, country: &str) -> RepositoryResult<Vec<Client>> {
        let country = country.trim();
        self.filtered(|c| c.country.eq_ignore_ascii_case(country))
    }

    fn list_clients_by_advisor(&self, advisor: &str) -> RepositoryResult<Vec<Client>> {
        let advisor = advisor.trim();
        self.filtered(|c| c.advisor().is_some_and(|a| a.trim() == advisor))
    }
}

impl ClientWriter for InMemoryRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        non_negative_amount(new_client.aua)
            .map_err(|err| RepositoryError::ValidationError(err.to_string()))?;

        let client = new_client
            .clone()
            .into_client(ClientId::generate(), Utc::now().naive_utc());

        let mut clients = self.clients.write()?;
        clients.push(client.clone());
        Ok(client)
    }

    fn save_client(&self, client: &Client) -> RepositoryResult<Client> {
        let snapshot = client.with_calculations();

        let mut clients = self.clients.write()?;
        let slot = clients
            .iter_mut()
            .find(|c| c.id == snapshot.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = snapshot.clone();
        Ok(snapshot)
    }

    fn update_client(&self, id: &ClientId, update: &ClientUpdate) -> RepositoryResult<Client> {
        let mut clients = self.clients.write()?;
        let slot = clients
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or(RepositoryError::NotFound)?;

        let snapshot = update.apply(slot).with_calculations();
        if snapshot != *slot {
            *slot = snapshot.clone();
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::client::{ClientMetadata, RiskProfile, SubscriptionType};
    use crate::domain::financial::FinancialData;
    use crate::domain::types::{ClientEmail, NoteId};

    fn client(id: &str, country: &str, advisor: Option<&str>) -> Client {
        let now = NaiveDate::from_ymd_opt(2026, 1, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut client = NewClient::new(
            "Test".into(),
            id.into(),
            ClientEmail::new(format!("{id}@example.com")).unwrap(),
            None,
            country.into(),
            ClientStatus::Active,
            RiskProfile::Growth,
            SubscriptionType::Core,
            1_000.0,
        )
        .into_client(ClientId::new(id).unwrap(), now);
        client.metadata = advisor.map(|a| ClientMetadata {
            advisor: Some(a.into()),
            ..ClientMetadata::default()
        });
        client
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = InMemoryRepository::new(vec![
            client("cl_1", "Ghana", None),
            client("cl_1", "France", None),
        ]);
        assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
    }

    #[test]
    fn rejects_negative_aua() {
        let mut bad = client("cl_1", "Ghana", None);
        bad.aua = -5.0;
        assert!(matches!(
            InMemoryRepository::new(vec![bad]),
            Err(RepositoryError::ValidationError(_))
        ));
    }

    #[test]
    fn records_are_derived_on_load() {
        let mut raw = client("cl_1", "Ghana", None);
        raw.financial_data = Some(FinancialData {
            cash_savings: Some(10.0),
            net_worth: 12345.0,
            ..FinancialData::default()
        });

        let repo = InMemoryRepository::new(vec![raw]).unwrap();
        let stored = repo
            .get_client_by_id(&ClientId::new("cl_1").unwrap())
            .unwrap()
            .unwrap();

        let data = stored.financial_data.unwrap();
        assert_eq!(data.net_worth, 10.0);
        assert!(data.is_consistent());
    }

    #[test]
    fn advisor_lookup_skips_clients_without_metadata() {
        let repo = InMemoryRepository::new(vec![
            client("cl_1", "Ghana", Some("Daniel Boateng")),
            client("cl_2", "Ghana", None),
            client("cl_3", "France", Some("Daniel Boateng")),
        ])
        .unwrap();

        let ids: Vec<_> = repo
            .list_clients_by_advisor("Daniel Boateng")
            .unwrap()
            .into_iter()
            .map(|c| c.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["cl_1", "cl_3"]);
    }

    #[test]
    fn save_unknown_client_is_not_found() {
        let repo = InMemoryRepository::new(vec![client("cl_1", "Ghana", None)]).unwrap();
        let stranger = client("cl_9", "Ghana", None);
        assert!(matches!(
            repo.save_client(&stranger),
            Err(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn update_unknown_client_is_not_found() {
        let repo = InMemoryRepository::new(vec![client("cl_1", "Ghana", None)]).unwrap();
        let update = ClientUpdate::DeleteNote(NoteId::new("note_1").unwrap());
        assert!(matches!(
            repo.update_client(&ClientId::new("cl_9").unwrap(), &update),
            Err(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn concurrent_updates_are_all_kept() {
        let repo = InMemoryRepository::new(vec![client("cl_1", "Ghana", None)]).unwrap();
        let id = ClientId::new("cl_1").unwrap();

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let (repo, id) = (&repo, &id);
                scope.spawn(move || {
                    for n in 0..25 {
                        let update = ClientUpdate::AddNote {
                            content: format!("note {worker}-{n}"),
                            author: "Advisor".into(),
                        };
                        repo.update_client(id, &update).unwrap();
                    }
                });
            }
        });

        let stored = repo.get_client_by_id(&id).unwrap().unwrap();
        assert_eq!(stored.notes.len(), 200);
    }

    #[test]
    fn clones_share_the_same_store() {
        let repo = InMemoryRepository::new(vec![client("cl_1", "Ghana", None)]).unwrap();
        let handle = repo.clone();

        let held = repo.get_client_by_id(&ClientId::new("cl_1").unwrap()).unwrap().unwrap();
        let updated = held.add_note("Reviewed allocation", "Advisor");
        handle.save_client(&updated).unwrap();

        assert!(held.notes.is_empty());
        let reread = repo.get_client_by_id(&held.id).unwrap().unwrap();
        assert_eq!(reread.notes.len(), 1);
    }
}
