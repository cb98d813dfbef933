//! Optional AI report generation.
//!
//! A generator produces a report in the same shape as the deterministic builder.
//! Its failures never reach the user: the service logs them and falls back.

mod chat;
mod prompt;
mod shape;
mod types;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error_handling::AiGenerationError;
use crate::plan::Plan;
use crate::report::Report;

pub use chat::ChatCompletionGenerator;
pub use shape::shape_report;

/// Produces a report for an already normalized and validated URL.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Generates a report. The returned `url` must equal `url` and its timestamp
    /// is ignored by the service.
    async fn generate(
        &self,
        url: &str,
        plan: Plan,
        cancel: &CancellationToken,
    ) -> Result<Report, AiGenerationError>;
}
