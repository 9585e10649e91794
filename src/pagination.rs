// src/pagination.rs

//! Concurrent resolution of paginated web API resources.

use futures::stream::{self, StreamExt};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::client::send_json;
use crate::config::PageErrorPolicy;
use crate::error::Result;

/// Fetch every page of a paginated resource and flatten the items in page
/// order.
///
/// Page 1 is fetched first; its paging metadata determines the last page
/// index. The remaining pages are fetched concurrently, at most
/// `max_concurrent` in flight when a cap is given. The stream is polled in
/// spawn order, so items are reassembled page by page even when responses
/// complete out of order.
///
/// Only the first page's failure is fatal. A later page that fails is
/// handled per `policy`: with [`PageErrorPolicy::Skip`] it contributes zero
/// items and the failure is only logged.
pub async fn fetch_all_pages<P, F>(
    build_request: F,
    policy: PageErrorPolicy,
    max_concurrent: Option<usize>,
) -> Result<Vec<P::Item>>
where
    P: crate::models::Paginated + DeserializeOwned,
    F: Fn(u32) -> RequestBuilder,
{
    let first: P = send_json(build_request(1)).await?;
    let last_page = first.paging().last_page();
    let mut items = first.into_items();

    if last_page <= 1 {
        return Ok(items);
    }

    let remaining = (last_page - 1) as usize;
    let width = max_concurrent.unwrap_or(remaining).max(1);
    let build_request = &build_request;

    let mut pages = stream::iter(2..=last_page)
        .map(|page| async move {
            let result: Result<P> = send_json(build_request(page)).await;
            (page, result)
        })
        .buffered(width);

    while let Some((page, result)) = pages.next().await {
        match result {
            Ok(decoded) => items.extend(decoded.into_items()),
            Err(error) => match policy {
                PageErrorPolicy::Skip => {
                    log::warn!("Skipping page {page}: {error}");
                }
                PageErrorPolicy::Abort => return Err(error),
            },
        }
    }

    Ok(items)
}
