//! site_audit library: plan-gated, reproducible website audit reports
//!
//! Given a URL and a subscription plan, the library produces a multi-section audit
//! report (performance, SEO, security headers, content, UX). Reports are seeded from
//! the URL and plan, so the same pair always yields the same report, and richer plans
//! unlock more of it. An optional chat-completion endpoint can generate the report
//! instead; any failure there falls back to the deterministic builder.
//!
//! # Example
//!
//! ```no_run
//! use site_audit::{Config, Plan, ReportService};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ReportService::from_config(&Config::default())?;
//! let report = service.get_report("example.com", Plan::Pro).await?;
//! println!("{} scored {}", report.url, report.performance.score);
//! # Ok(())
//! # }
//! ```
//!
//! The builder alone needs no runtime:
//!
//! ```
//! use site_audit::app::normalize_url;
//! use site_audit::{build_report, Plan};
//!
//! let url = normalize_url("Example.com/");
//! let report = build_report(&url, Plan::Free);
//! assert_eq!(report.url, "https://example.com");
//! assert_eq!(report, build_report(&url, Plan::Free));
//! ```
//!
//! # Requirements
//!
//! `ReportService` requires a Tokio runtime.

pub mod ai;
pub mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod history;
pub mod initialization;
pub mod plan;
pub mod probe;
pub mod report;
pub mod seed;
pub mod service;

// Re-export public API
pub use app::normalize_url;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AiGenerationError, AnalysisError, ExportError};
pub use plan::{get_plan_limits, Plan, PlanPolicy};
pub use report::{build_report, Report};
pub use service::{ReportService, ReportSource};
