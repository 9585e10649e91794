//! Pagination metadata shared by all paginated endpoints.

use serde::{Deserialize, Serialize};

/// Paging block embedded in every paginated response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PagingInfo {
    /// 1-based index of the page this response carries
    pub page_index: u32,

    /// Number of items per page
    pub page_size: u32,

    /// Total number of items across all pages
    pub total: u32,
}

impl PagingInfo {
    /// Index of the last page implied by this metadata.
    ///
    /// A reported page size of zero means no further pages can be derived,
    /// so the current page is also the last one.
    pub fn last_page(&self) -> u32 {
        if self.page_size == 0 {
            self.page_index
        } else {
            self.total.div_ceil(self.page_size)
        }
    }
}

/// A decoded response body carrying paging metadata plus an ordered batch
/// of items.
pub trait Paginated {
    type Item;

    fn paging(&self) -> &PagingInfo;

    fn into_items(self) -> Vec<Self::Item>;
}
