//! End-of-run statistics.

use log::info;

use crate::error_handling::ServiceStats;
use crate::service::ReportSource;

/// Logs a one-line summary for a finished analysis.
pub fn log_run_summary(url: &str, source: ReportSource, elapsed_seconds: f64) {
    info!(
        "✅ Analyzed {} in {:.1}s (report source: {})",
        url, elapsed_seconds, source
    );
}

/// Logs every non-zero pipeline counter.
pub fn log_service_statistics(stats: &ServiceStats) {
    let counters = stats.non_zero();
    if counters.is_empty() {
        return;
    }

    info!("Pipeline Counts ({} requests):", stats.total_requests());
    for (event, count) in counters {
        info!("   {}: {}", event.as_str(), count);
    }
}
