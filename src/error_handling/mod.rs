//! Error handling and pipeline statistics.
//!
//! This module provides:
//! - Error type definitions for every seam of the report pipeline
//! - Pipeline statistics tracking (cache, probe, AI, builder events)
//!
//! Propagation policy: failures of best-effort subsystems (the network phase of the
//! availability probe, AI generation) are downgraded to a fallback and only counted
//! and logged. URL defects and definite unavailability reach the caller.

mod stats;
mod types;

// Re-export public API
pub use stats::ServiceStats;
pub use types::{
    AiGenerationError, AnalysisError, ConfigValidationError, EventType, ExportError,
    InitializationError,
};
