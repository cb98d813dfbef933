//! Error type definitions.
//!
//! This module defines all error types used throughout the application, plus the
//! event categories counted by `ServiceStats`.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::app::UrlDefect;
use crate::plan::Plan;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing an HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid configuration for '{field}': {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

/// Failures surfaced by `ReportService::get_report`.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The URL is malformed, uses an unsupported scheme, or has no host.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The normalized URL that was rejected
        url: String,
        /// Which check failed
        reason: UrlDefect,
    },

    /// The availability prober reported the site as definitely unreachable.
    #[error("site unreachable: {cause}")]
    SiteUnavailable {
        /// The normalized URL
        url: String,
        /// The prober's message
        cause: String,
    },

    /// The caller cancelled the analysis.
    #[error("analysis cancelled")]
    Cancelled,

    /// Anything else that went wrong in the pipeline.
    #[error("analysis failed: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl AnalysisError {
    /// Message suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InvalidUrl { reason, .. } => reason.message().to_string(),
            AnalysisError::SiteUnavailable { cause, .. } => cause.clone(),
            AnalysisError::Cancelled => "The analysis was cancelled.".to_string(),
            AnalysisError::Unexpected(_) => {
                "Something went wrong while analyzing the site. Please try again.".to_string()
            }
        }
    }
}

/// Failures of the optional AI report generator.
///
/// These never reach the user: the service logs them and falls back to the
/// deterministic builder.
#[derive(Error, Debug)]
pub enum AiGenerationError {
    /// No API key or endpoint is configured.
    #[error("AI generation is not configured")]
    NotConfigured,

    /// The request could not be sent or the body could not be read.
    #[error("AI request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The endpoint answered with a non-2xx status.
    #[error("AI request failed with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body (truncated)
        body: String,
    },

    /// The response had no `choices[0].message.content`.
    #[error("empty response from AI endpoint")]
    EmptyContent,

    /// The message content was not valid JSON.
    #[error("invalid JSON from AI endpoint: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The JSON did not have the report shape.
    #[error("AI response does not match the report shape: {0}")]
    Shape(String),

    /// The call was cancelled or timed out.
    #[error("AI request cancelled")]
    Cancelled,
}

/// Failures while exporting a report.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The plan does not include exports.
    #[error("export is not available on the {plan} plan")]
    NotAvailable {
        /// The plan that was checked
        plan: Plan,
    },

    /// CSV serialization failed.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output failed.
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Notable events in the report pipeline, counted by `ServiceStats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum EventType {
    /// Report served from the cache
    CacheHit,
    /// Cache lookup missed
    CacheMiss,
    /// Availability prober invoked
    ProbeCall,
    /// Probe failed for network reasons and was treated as available
    ProbeInconclusive,
    /// URL rejected by validation
    InvalidUrl,
    /// Prober reported the site unavailable
    SiteUnavailable,
    /// AI generator invoked
    AiAttempt,
    /// AI generator produced the report
    AiSuccess,
    /// AI generator failed and the deterministic builder was used
    AiFallback,
    /// Deterministic builder invoked
    DeterministicBuild,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::CacheHit => "Cache hit",
            EventType::CacheMiss => "Cache miss",
            EventType::ProbeCall => "Availability probe",
            EventType::ProbeInconclusive => "Inconclusive probe (treated as available)",
            EventType::InvalidUrl => "Invalid URL",
            EventType::SiteUnavailable => "Site unavailable",
            EventType::AiAttempt => "AI generation attempt",
            EventType::AiSuccess => "AI generation success",
            EventType::AiFallback => "AI fallback to deterministic report",
            EventType::DeterministicBuild => "Deterministic report build",
        }
    }
}
