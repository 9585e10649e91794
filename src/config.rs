// src/config.rs

//! Run configuration assembled by the CLI before any network activity.

use url::Url;

use crate::error::{AppError, Result};

/// What to do when a non-first page of a paginated fetch fails.
///
/// The first page is always fatal: without it there is no paging metadata
/// to resolve the remaining pages from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageErrorPolicy {
    /// Drop the failed page's items and keep going.
    #[default]
    Skip,
    /// Fail the whole paginated call.
    Abort,
}

/// What to do when a single hotspot detail fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailErrorPolicy {
    /// Fail the whole run.
    #[default]
    Abort,
    /// Drop the hotspot and keep going.
    Skip,
}

/// Settings shared by every request and fan-out stage of one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Base URL of the SonarQube/SonarCloud instance, without trailing slash.
    pub base_url: String,

    /// SonarCloud organization, appended to every request when present.
    pub organization: Option<String>,

    /// Authentication token; unset or blank means unauthenticated requests.
    pub token: Option<String>,

    /// Page size (`ps`) for paginated endpoints.
    pub page_size: u32,

    /// Uniform per-request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Cap on simultaneous requests per fan-out stage; unbounded when unset.
    pub max_concurrent: Option<usize>,

    /// Behavior for failed non-first pages.
    pub page_errors: PageErrorPolicy,

    /// Behavior for failed detail fetches.
    pub detail_errors: DetailErrorPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_url: "https://sonarcloud.io".to_string(),
            organization: None,
            token: None,
            page_size: 500,
            timeout_secs: None,
            max_concurrent: None,
            page_errors: PageErrorPolicy::default(),
            detail_errors: DetailErrorPolicy::default(),
        }
    }
}

impl RunConfig {
    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)?;
        if self.page_size == 0 {
            return Err(AppError::config("page_size must be > 0"));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::config("timeout must be > 0"));
        }
        if self.max_concurrent == Some(0) {
            return Err(AppError::config("max_concurrent must be > 0"));
        }
        Ok(())
    }

    /// Number of tasks a fan-out stage may keep in flight for `jobs` jobs.
    pub fn fanout_width(&self, jobs: usize) -> usize {
        self.max_concurrent.unwrap_or(jobs).max(1)
    }
}
