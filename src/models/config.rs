//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// JSON or legacy CSV client book. The bundled sample book is used when unset.
    #[serde(default)]
    pub fixtures_path: Option<String>,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}
