//! HTTP client initialization.
//!
//! This module provides functions to initialize the HTTP clients used by the
//! availability prober and the AI report generator.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{AiConfig, Config};

/// Initializes the client used for availability probes.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - The probe timeout as the overall request timeout
/// - Redirect following limited to 5 hops (a redirect already proves reachability)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_probe_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(config.probe_timeout)
        .connect_timeout(config.probe_timeout)
        .redirect(reqwest::redirect::Policy::limited(5))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the client used for chat-completion requests.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_ai_client(
    ai: &AiConfig,
    user_agent: &str,
) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(ai.timeout)
        .connect_timeout(Duration::from_secs(10).min(ai.timeout))
        .user_agent(user_agent.to_string())
        .build()?;
    Ok(Arc::new(client))
}
