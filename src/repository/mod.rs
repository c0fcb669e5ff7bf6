use crate::{
    domain::{
        client::{Client, ClientStatus, ClientUpdate, NewClient},
        types::ClientId,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use memory::InMemoryRepository;

/// Read access to the client book. Every returned client already carries
/// freshly derived financial fields.
pub trait ClientReader {
    fn get_client_by_id(&self, id: &ClientId) -> RepositoryResult<Option<Client>>;
    /// All clients in their original order.
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    fn list_clients_by_status(&self, status: ClientStatus) -> RepositoryResult<Vec<Client>>;
    fn list_clients_by_country(&self, country: &str) -> RepositoryResult<Vec<Client>>;
    /// Clients whose `metadata.advisor` equals `advisor`.
    fn list_clients_by_advisor(&self, advisor: &str) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    /// Replaces the stored snapshot that has the same id as `client`.
    fn save_client(&self, client: &Client) -> RepositoryResult<Client>;
    /// Applies `update` to the current stored record and stores the result
    /// as one step, so concurrent updates to a client never overwrite each
    /// other.
    fn update_client(&self, id: &ClientId, update: &ClientUpdate) -> RepositoryResult<Client>;
}
