use std::collections::BTreeSet;

use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Page numbers to render in a pager, with `None` marking elided runs.
///
/// Keeps `edge` pages at each end and the current page with `before` pages
/// before it and `after` pages after it.
fn page_links(
    total_pages: usize,
    current_page: usize,
    edge: usize,
    before: usize,
    after: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }

    let mut shown = BTreeSet::new();
    shown.extend(1..=edge.min(total_pages));
    shown.extend(total_pages.saturating_sub(edge) + 1..=total_pages);

    let window_start = current_page.saturating_sub(before).max(1);
    let window_end = current_page.saturating_add(after).min(total_pages);
    shown.extend(window_start..=window_end);

    let mut links = Vec::with_capacity(shown.len() + 2);
    let mut previous = 0;
    for page in shown {
        if page > previous + 1 {
            links.push(None);
        }
        links.push(Some(page));
        previous = page;
    }
    links
}

/// One page of an already filtered and sorted result set.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total: usize,
}

impl<T> Paginated<T> {
    /// Cuts page `page` (1-based, `0` read as `1`) out of `items`.
    pub fn from_items(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total = items.len();
        let total_pages = total.div_ceil(per_page);

        let items = items
            .into_iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .collect();

        Self {
            items,
            pages: page_links(total_pages, page, 2, 2, 4),
            page,
            total,
        }
    }
}
