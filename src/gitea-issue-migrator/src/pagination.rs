//! Page-number pagination.
//!
//! The source API pages with a 1-based `page` query parameter and signals the
//! end of a listing with an empty page.

use std::future::Future;
use tracing::debug;

/// Fetches every page until an empty one is returned.
///
/// Calls `fetch_page(1)`, `fetch_page(2)`, ... and concatenates the results in
/// page order. The first error aborts the listing.
///
/// # Errors
///
/// Returns the first error produced by `fetch_page`.
pub async fn fetch_all_pages<T, E, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let page_items = fetch_page(page).await?;
        debug!(page, count = page_items.len(), "Fetched page");

        if page_items.is_empty() {
            return Ok(items);
        }

        items.extend(page_items);
        page += 1;
    }
}
