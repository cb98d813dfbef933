//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, cache sizing, AI endpoint defaults)
//! - Security header name constants
//! - Library configuration and CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{AiConfig, Config, LogFormat, LogLevel, Opt};
