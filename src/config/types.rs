//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    AI_REQUEST_TIMEOUT, DEFAULT_AI_API_URL, DEFAULT_AI_MAX_TOKENS, DEFAULT_AI_MODEL,
    DEFAULT_AI_TEMPERATURE, DEFAULT_CACHE_CAPACITY, DEFAULT_PACING_DELAY, DEFAULT_USER_AGENT,
    ENV_AI_API_KEY, ENV_AI_API_URL, ENV_AI_MODEL, PROBE_TIMEOUT,
};
use crate::error_handling::ConfigValidationError;
use crate::export::ExportFormat;
use crate::plan::Plan;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Settings of the optional chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Bearer credential
    pub api_key: String,
    /// Full chat-completion URL
    pub api_url: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature (0.0-2.0)
    pub temperature: f32,
    /// Completion token budget
    pub max_tokens: u32,
    /// Per-request timeout
    pub timeout: Duration,
}

impl AiConfig {
    /// Endpoint settings with defaults for everything except the key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_AI_API_URL.to_string(),
            model: DEFAULT_AI_MODEL.to_string(),
            temperature: DEFAULT_AI_TEMPERATURE,
            max_tokens: DEFAULT_AI_MAX_TOKENS,
            timeout: AI_REQUEST_TIMEOUT,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use site_audit::{Config, Plan};
/// use std::time::Duration;
///
/// let config = Config {
///     plan: Plan::Pro,
///     pacing_delay: Duration::ZERO,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Plan used when the caller does not specify one
    pub plan: Plan,

    /// Availability probe timeout
    pub probe_timeout: Duration,

    /// Cosmetic delay before generating an uncached report
    pub pacing_delay: Duration,

    /// Maximum cached reports; `None` keeps every report for the process lifetime
    pub cache_capacity: Option<u64>,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// AI generation settings; `None` disables the AI path
    pub ai: Option<AiConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            plan: Plan::Free,
            probe_timeout: PROBE_TIMEOUT,
            pacing_delay: DEFAULT_PACING_DELAY,
            cache_capacity: Some(DEFAULT_CACHE_CAPACITY),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            ai: None,
        }
    }
}

impl Config {
    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first offending field with a message naming the accepted range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.probe_timeout.is_zero() {
            return Err(ConfigValidationError {
                field: "probe_timeout",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.cache_capacity == Some(0) {
            return Err(ConfigValidationError {
                field: "cache_capacity",
                message: "must be greater than 0 (omit it for an unbounded cache)".to_string(),
            });
        }
        if let Some(ai) = &self.ai {
            if ai.api_key.trim().is_empty() {
                return Err(ConfigValidationError {
                    field: "ai.api_key",
                    message: "must not be empty".to_string(),
                });
            }
            if !(0.0..=2.0).contains(&ai.temperature) {
                return Err(ConfigValidationError {
                    field: "ai.temperature",
                    message: format!("must be between 0.0 and 2.0 (got {})", ai.temperature),
                });
            }
            if ai.max_tokens == 0 {
                return Err(ConfigValidationError {
                    field: "ai.max_tokens",
                    message: "must be greater than 0".to_string(),
                });
            }
            match url::Url::parse(&ai.api_url) {
                Ok(u) if matches!(u.scheme(), "http" | "https") => {}
                _ => {
                    return Err(ConfigValidationError {
                        field: "ai.api_url",
                        message: format!("must be an http:// or https:// URL (got '{}')", ai.api_url),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Free-plan report printed as JSON
/// site_audit example.com
///
/// # Business-plan report exported to CSV in ./reports
/// site_audit example.com --plan business --export csv --output-dir reports
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "site_audit",
    about = "Generates a plan-gated audit report for a website."
)]
pub struct Opt {
    /// Website address to analyze
    #[arg(value_parser)]
    pub url: String,

    /// Subscription plan: free|pro|business
    #[arg(long, value_enum, default_value_t = Plan::Free)]
    pub plan: Plan,

    /// Analyses already performed today (for the daily quota)
    #[arg(long, default_value_t = 0)]
    pub analyses_today: u32,

    /// Export the report to a file: json|csv
    #[arg(long, value_enum)]
    pub export: Option<ExportFormat>,

    /// Directory for exported files
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Availability probe timeout in seconds
    #[arg(long, default_value_t = PROBE_TIMEOUT.as_secs())]
    pub probe_timeout_secs: u64,

    /// Cosmetic delay before generating a report, in milliseconds
    #[arg(long, default_value_t = 1200)]
    pub pacing_delay_ms: u64,

    /// Maximum number of cached reports
    #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_capacity: u64,

    /// Bearer credential for the AI endpoint (enables AI generation)
    #[arg(long, env = ENV_AI_API_KEY, hide_env_values = true)]
    pub ai_api_key: Option<String>,

    /// Chat-completion endpoint URL
    #[arg(long, env = ENV_AI_API_URL, default_value = DEFAULT_AI_API_URL)]
    pub ai_api_url: String,

    /// Model requested from the AI endpoint
    #[arg(long, env = ENV_AI_MODEL, default_value = DEFAULT_AI_MODEL)]
    pub ai_model: String,

    /// Never call the AI endpoint, even if a key is configured
    #[arg(long)]
    pub no_ai: bool,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        let ai = match (&opt.ai_api_key, opt.no_ai) {
            (Some(key), false) if !key.trim().is_empty() => Some(AiConfig {
                api_url: opt.ai_api_url.clone(),
                model: opt.ai_model.clone(),
                ..AiConfig::with_api_key(key.clone())
            }),
            _ => None,
        };

        Config {
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            plan: opt.plan,
            probe_timeout: Duration::from_secs(opt.probe_timeout_secs),
            pacing_delay: Duration::from_millis(opt.pacing_delay_ms),
            cache_capacity: Some(opt.cache_capacity),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            ai,
        }
    }
}
