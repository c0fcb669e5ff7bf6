//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, ClientStatus, ClientUpdate, NewClient};
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: &ClientId) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
        fn list_clients_by_status(&self, status: ClientStatus) -> RepositoryResult<Vec<Client>>;
        fn list_clients_by_country(&self, country: &str) -> RepositoryResult<Vec<Client>>;
        fn list_clients_by_advisor(&self, advisor: &str) -> RepositoryResult<Vec<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn save_client(&self, client: &Client) -> RepositoryResult<Client>;
        fn update_client(&self, id: &ClientId, update: &ClientUpdate) -> RepositoryResult<Client>;
    }
}
