use chrono::NaiveDateTime;

use crate::domain::client::Client;
use crate::dto::main::IndexPageData;
pub use crate::dto::main::IndexQuery;
use crate::pagination::Paginated;
use crate::query::{ClientQuery, available_countries};
use crate::repository::ClientReader;
use crate::services::{ServiceError, ServiceResult};
use crate::stats::PortfolioSummary;

/// Result of running the list pipeline over the whole book.
pub(crate) struct FilteredClients {
    pub query: ClientQuery,
    /// Every client in the book, in stored order.
    pub all: Vec<Client>,
    /// Clients that passed the filters, sorted.
    pub selected: Vec<Client>,
}

/// Parses the raw list parameters and runs them against the repository.
pub(crate) fn filter_clients<R>(
    repo: &R,
    params: &IndexQuery,
    now: NaiveDateTime,
) -> ServiceResult<FilteredClients>
where
    R: ClientReader + ?Sized,
{
    let query = ClientQuery::try_from(params).map_err(|err| {
        log::error!("Failed to parse client list query: {err}");
        ServiceError::from(err)
    })?;

    let all = repo.list_clients().map_err(|err| {
        log::error!("Failed to list clients: {err}");
        ServiceError::from(err)
    })?;

    let selected = query.apply(&all, now);
    log::debug!(
        "Client query selected {} of {} clients",
        selected.len(),
        all.len()
    );

    Ok(FilteredClients {
        query,
        all,
        selected,
    })
}

/// Loads the clients list for the main index page.
pub fn load_index_page<R>(
    repo: &R,
    params: IndexQuery,
    per_page: usize,
    now: NaiveDateTime,
) -> ServiceResult<IndexPageData>
where
    R: ClientReader + ?Sized,
{
    let FilteredClients {
        query,
        all,
        selected,
    } = filter_clients(repo, &params, now)?;

    let search_query = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let summary = PortfolioSummary::from_clients(&selected);
    let page = params.page.unwrap_or(1);

    Ok(IndexPageData {
        clients: Paginated::from_items(selected, page, per_page),
        search_query,
        countries: available_countries(&all),
        has_active_filters: query.is_filtered(),
        summary,
    })
}
