//! DTOs shaped for the client detail view.

use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::communication::Communication;
use crate::domain::note::ClientNote;

/// Aggregated data required to render the client details page.
#[derive(Debug, Serialize)]
pub struct ClientPageData {
    pub client: Client,
    /// Notes, newest first.
    pub notes: Vec<ClientNote>,
    /// The five most recent communications, newest first.
    pub recent_communications: Vec<Communication>,
    pub profile_completion: u8,
    pub last_contact: String,
    /// Debt-to-asset ratio as text; "N/A" when undefined or unknown.
    pub debt_to_asset_ratio: String,
}
