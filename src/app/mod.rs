//! Application helpers.
//!
//! This module provides URL normalization and validation plus the statistics
//! logging used by the command-line binary.

pub mod statistics;
pub mod url;

// Re-export public API
pub use statistics::{log_run_summary, log_service_statistics};
pub use url::{normalize_url, validate_url, UrlDefect, MAX_URL_LENGTH};
