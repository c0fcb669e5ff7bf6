use chrono::NaiveDateTime;

use crate::dto::api::ClientsResponse;
use crate::dto::main::IndexQuery;
use crate::pagination::Paginated;
use crate::repository::ClientReader;
use crate::services::ServiceResult;
use crate::services::main::filter_clients;

/// Returns one page of the filtered, sorted client list.
pub fn list_clients<R>(
    repo: &R,
    params: &IndexQuery,
    per_page: usize,
    now: NaiveDateTime,
) -> ServiceResult<ClientsResponse>
where
    R: ClientReader + ?Sized,
{
    let filtered = filter_clients(repo, params, now)?;
    let page = Paginated::from_items(filtered.selected, params.page.unwrap_or(1), per_page);

    Ok(ClientsResponse {
        total: page.total,
        page: page.page,
        pages: page.pages,
        clients: page.items,
    })
}
