//! Configuration constants.
//!
//! This module defines the constants used throughout the application, including
//! timeouts, cache sizing and the defaults of the optional AI endpoint.

use std::time::Duration;

/// Upper bound for the availability probe (HEAD request).
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(8);

/// Cosmetic pause before generating a fresh report, so clients can show progress.
/// Not a retry. Served-from-cache reports skip it.
pub const DEFAULT_PACING_DELAY: Duration = Duration::from_millis(1200);

/// Default maximum number of cached reports (one per URL and plan).
pub const DEFAULT_CACHE_CAPACITY: u64 = 1024;

/// Separator between the normalized URL and the plan key in cache keys.
pub const CACHE_KEY_SEPARATOR: &str = "__";

/// Reports kept in the analysis history regardless of plan.
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// User-Agent sent by the prober and the AI client.
pub const DEFAULT_USER_AGENT: &str = concat!("site_audit/", env!("CARGO_PKG_VERSION"));

// AI endpoint defaults
/// Chat-completion endpoint used when none is configured
pub const DEFAULT_AI_API_URL: &str = "https://router.huggingface.co/v1/chat/completions";
/// Model requested when none is configured
pub const DEFAULT_AI_MODEL: &str = "Qwen/Qwen2.5-7B-Instruct:together";
/// Sampling temperature; low to keep answers close to the requested shape
pub const DEFAULT_AI_TEMPERATURE: f32 = 0.2;
/// Completion budget; a full report fits comfortably
pub const DEFAULT_AI_MAX_TOKENS: u32 = 900;
/// Upper bound for one AI request
pub const AI_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum length of an error response body kept in `AiGenerationError::Status`
pub const MAX_ERROR_BODY_LENGTH: usize = 500;

// Environment variables
/// Bearer credential for the AI endpoint
pub const ENV_AI_API_KEY: &str = "SITE_AUDIT_AI_API_KEY";
/// Overrides `DEFAULT_AI_API_URL`
pub const ENV_AI_API_URL: &str = "SITE_AUDIT_AI_API_URL";
/// Overrides `DEFAULT_AI_MODEL`
pub const ENV_AI_MODEL: &str = "SITE_AUDIT_AI_MODEL";
