//! Shared test doubles for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use site_audit::ai::ReportGenerator;
use site_audit::probe::{Availability, AvailabilityProbe};
use site_audit::{AiGenerationError, Plan, Report, ReportService};
use tokio_util::sync::CancellationToken;

/// Probe that returns a fixed answer and counts calls.
pub struct CountingProbe {
    answer: Availability,
    delay: Duration,
    pub calls: AtomicUsize,
}

impl CountingProbe {
    pub fn up() -> Arc<Self> {
        Self::with(Availability::reachable(), Duration::ZERO)
    }

    pub fn down(message: &str) -> Arc<Self> {
        Self::with(Availability::unavailable(message), Duration::ZERO)
    }

    /// Waits `delay` before answering unless cancelled, like a slow network probe.
    pub fn slow(delay: Duration) -> Arc<Self> {
        Self::with(Availability::reachable(), delay)
    }

    fn with(answer: Availability, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            answer,
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AvailabilityProbe for CountingProbe {
    async fn check_availability(&self, _url: &str, cancel: &CancellationToken) -> Availability {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::select! {
                _ = cancel.cancelled() => return Availability::inconclusive(),
                _ = tokio::time::sleep(self.delay) => {}
            }
        }
        self.answer.clone()
    }
}

/// Generator that always fails with a status error and counts calls.
#[derive(Default)]
pub struct FailingGenerator {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ReportGenerator for FailingGenerator {
    async fn generate(
        &self,
        _url: &str,
        _plan: Plan,
        _cancel: &CancellationToken,
    ) -> Result<Report, AiGenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AiGenerationError::Status {
            status: 503,
            body: "overloaded".to_string(),
        })
    }
}

/// Service over `probe` with no pacing delay.
pub fn fast_service(probe: Arc<CountingProbe>) -> ReportService {
    ReportService::new(probe).with_pacing_delay(Duration::ZERO)
}
