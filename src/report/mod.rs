//! Audit report model and the deterministic report builder.
//!
//! This module provides:
//! - The `Report` value type and its sections
//! - The per-plan generation profile (`tiers`)
//! - `build_report`, the pure `(normalized URL, plan) -> Report` function

mod builder;
pub mod tiers;
mod types;

pub use builder::{build_report, security_headers};
pub use types::{
    ContentSection, MonitoringSection, PerformanceMetrics, PerformanceSection, Report,
    SecuritySection, SeoSection, TechSeoSection, UxSection,
};
