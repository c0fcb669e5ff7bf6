//! DTOs exposed by the client API endpoints.

use serde::Serialize;

use crate::domain::client::Client;

/// Result payload returned by [`crate::services::api::list_clients`].
#[derive(Debug, Serialize)]
pub struct ClientsResponse {
    /// Total number of clients matching the filter.
    pub total: usize,
    pub page: usize,
    pub pages: Vec<Option<usize>>,
    /// Page of clients requested by the caller.
    pub clients: Vec<Client>,
}
