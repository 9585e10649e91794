//! Security hotspot data structures.

use serde::{Deserialize, Serialize};

use super::{Paginated, PagingInfo};

/// A security hotspot as returned by `/api/hotspots/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    /// Unique hotspot key
    pub key: String,

    /// Component (file) the hotspot was raised on
    pub component: String,

    /// Key of the owning project
    pub project: String,

    /// Security category (e.g. `weak-cryptography`)
    pub security_category: String,

    /// Review priority: `HIGH`, `MEDIUM` or `LOW`
    pub vulnerability_probability: String,

    /// Review status
    pub status: String,

    /// Line the hotspot was raised on, absent for file-level hotspots
    #[serde(default)]
    pub line: Option<u32>,

    /// Message shown to the reviewer
    pub message: String,

    pub author: String,

    pub creation_date: String,

    pub update_date: String,
}

/// One page of the hotspot search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotPage {
    pub paging: PagingInfo,
    pub hotspots: Vec<Hotspot>,
}

impl Paginated for HotspotPage {
    type Item = Hotspot;

    fn paging(&self) -> &PagingInfo {
        &self.paging
    }

    fn into_items(self) -> Vec<Hotspot> {
        self.hotspots
    }
}

/// The rule a hotspot was raised by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rule {
    pub key: String,
}

/// Project block of the detail view (a reduced shape compared to search).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowProject {
    pub key: String,
    pub name: String,
    pub qualifier: String,
}

/// Detail view returned by `/api/hotspots/show`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotspotShow {
    pub rule: Rule,
    pub project: ShowProject,
}

/// A hotspot joined with its detail view.
///
/// Held only for the duration of filtering and emission; the pair always
/// refers to the same hotspot key because the detail fetch carries its
/// source hotspot along rather than re-matching keys afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotspotDetail {
    pub hotspot: Hotspot,
    pub show: HotspotShow,
}
