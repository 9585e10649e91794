// src/lib.rs

//! Sonar Hotspot Downloader Library

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod report;
pub mod services;
