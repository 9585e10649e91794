// src/models/mod.rs

//! Domain models for the downloader application.
//!
//! Pages mirror the SonarQube web API response bodies; only the fields this
//! tool needs are declared, unknown fields are ignored on decode.

mod hotspot;
mod paging;
mod project;

// Re-export all public types
pub use hotspot::{Hotspot, HotspotDetail, HotspotPage, HotspotShow, Rule, ShowProject};
pub use paging::{Paginated, PagingInfo};
pub use project::{Project, ProjectPage};
