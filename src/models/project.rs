//! Project data structures.

use serde::{Deserialize, Serialize};

use super::{Paginated, PagingInfo};

/// A project as returned by `/api/projects/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique, stable project key
    pub key: String,

    /// Display name
    pub name: String,

    /// Component qualifier (projects report `TRK`)
    pub qualifier: String,

    /// `public` or `private`
    pub visibility: String,

    /// SCM revision of the last analysis
    #[serde(default)]
    pub revision: Option<String>,

    /// Timestamp of the last analysis
    #[serde(default)]
    pub last_analysis_date: Option<String>,
}

/// One page of the project search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPage {
    pub paging: PagingInfo,
    pub components: Vec<Project>,
}

impl Paginated for ProjectPage {
    type Item = Project;

    fn paging(&self) -> &PagingInfo {
        &self.paging
    }

    fn into_items(self) -> Vec<Project> {
        self.components
    }
}
