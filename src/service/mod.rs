//! Report service: the pipeline from a raw URL to a stamped report.
//!
//! normalize → cache → validate → probe → pacing delay → AI (optional) → deterministic
//! builder → cache insert. The AI branch is an explicit `Result` match: any failure is
//! logged and replaced by the deterministic report.

mod cache;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{debug, info, warn};
use strum_macros::{AsRefStr, Display};
use tokio_util::sync::CancellationToken;

use crate::ai::{ChatCompletionGenerator, ReportGenerator};
use crate::app::{normalize_url, validate_url};
use crate::config::{Config, DEFAULT_CACHE_CAPACITY, DEFAULT_PACING_DELAY};
use crate::error_handling::{AnalysisError, EventType, InitializationError, ServiceStats};
use crate::initialization::init_probe_client;
use crate::plan::Plan;
use crate::probe::{AvailabilityProbe, HttpProbe};
use crate::report::{build_report, Report};

pub use cache::ReportCache;

/// Where a returned report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ReportSource {
    /// Served from the cache without any I/O
    Cache,
    /// Produced by the AI generator
    Ai,
    /// Built deterministically because no generator is configured
    Deterministic,
    /// Built deterministically after the AI generator failed
    Fallback,
}

/// Orchestrates availability probing, generation and caching.
///
/// `Send + Sync`; share it behind an `Arc` across tasks. Concurrent calls for the same
/// uncached key are not deduplicated and the last write wins.
pub struct ReportService {
    cache: ReportCache,
    probe: Arc<dyn AvailabilityProbe>,
    generator: Option<Arc<dyn ReportGenerator>>,
    pacing_delay: Duration,
    stats: Arc<ServiceStats>,
}

impl ReportService {
    /// Service with the given prober, no AI generator, the default pacing delay and
    /// a cache bounded to the default capacity.
    pub fn new(probe: Arc<dyn AvailabilityProbe>) -> Self {
        Self {
            cache: ReportCache::new(Some(DEFAULT_CACHE_CAPACITY)),
            probe,
            generator: None,
            pacing_delay: DEFAULT_PACING_DELAY,
            stats: Arc::new(ServiceStats::new()),
        }
    }

    /// Builds the service from library configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if an HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let probe_client = init_probe_client(config)?;
        let probe = Arc::new(HttpProbe::new(probe_client, config.probe_timeout));

        let mut service = Self::new(probe)
            .with_cache(ReportCache::new(config.cache_capacity))
            .with_pacing_delay(config.pacing_delay);

        if let Some(ai) = &config.ai {
            info!("AI report generation enabled (model {})", ai.model);
            let generator = ChatCompletionGenerator::from_config(ai.clone(), &config.user_agent)?;
            service = service.with_generator(Arc::new(generator));
        }
        Ok(service)
    }

    pub fn with_generator(mut self, generator: Arc<dyn ReportGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_pacing_delay(mut self, delay: Duration) -> Self {
        self.pacing_delay = delay;
        self
    }

    pub fn with_cache(mut self, cache: ReportCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_stats(mut self, stats: Arc<ServiceStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn cache(&self) -> &ReportCache {
        &self.cache
    }

    pub fn stats(&self) -> &Arc<ServiceStats> {
        &self.stats
    }

    /// Returns the report for `raw_url` under `plan`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidUrl` for a malformed URL and
    /// `AnalysisError::SiteUnavailable` when the prober rejects the site.
    pub async fn get_report(&self, raw_url: &str, plan: Plan) -> Result<Report, AnalysisError> {
        self.get_report_with_cancel(raw_url, plan, &CancellationToken::new())
            .await
    }

    /// Like [`get_report`](Self::get_report), with a cancellation token for the
    /// network phases.
    ///
    /// # Errors
    ///
    /// As `get_report`, plus `AnalysisError::Cancelled` if `cancel` was already
    /// cancelled when a report had to be produced.
    pub async fn get_report_with_cancel(
        &self,
        raw_url: &str,
        plan: Plan,
        cancel: &CancellationToken,
    ) -> Result<Report, AnalysisError> {
        let (report, _) = self.get_report_with_source(raw_url, plan, cancel).await?;
        Ok(report)
    }

    /// Returns the report together with its provenance.
    ///
    /// A cached report is returned even if `cancel` is already cancelled. Once the
    /// pipeline has started, cancellation only shortens it: the probe resolves as
    /// inconclusive, the pacing delay is skipped and the AI call falls back.
    ///
    /// # Errors
    ///
    /// See [`get_report_with_cancel`](Self::get_report_with_cancel).
    pub async fn get_report_with_source(
        &self,
        raw_url: &str,
        plan: Plan,
        cancel: &CancellationToken,
    ) -> Result<(Report, ReportSource), AnalysisError> {
        let url = normalize_url(raw_url);

        if let Some(cached) = self.cache.get(&url, plan) {
            debug!("Cache hit for {url} ({plan})");
            self.stats.increment(EventType::CacheHit);
            return Ok((cached.stamped(Utc::now()), ReportSource::Cache));
        }
        debug!("Cache miss for {url} ({plan})");
        self.stats.increment(EventType::CacheMiss);

        if cancel.is_cancelled() {
            return Err(AnalysisError::Cancelled);
        }

        if let Err(reason) = validate_url(&url) {
            self.stats.increment(EventType::InvalidUrl);
            return Err(AnalysisError::InvalidUrl { url, reason });
        }

        self.stats.increment(EventType::ProbeCall);
        let availability = self.probe.check_availability(&url, cancel).await;
        if !availability.available {
            self.stats.increment(EventType::SiteUnavailable);
            let cause = availability
                .error
                .unwrap_or_else(|| "The site is unavailable".to_string());
            warn!("Site {url} reported unavailable: {cause}");
            return Err(AnalysisError::SiteUnavailable { url, cause });
        }
        if availability.inconclusive {
            self.stats.increment(EventType::ProbeInconclusive);
        }

        self.pace(cancel).await;

        let (report, source) = self.generate(&url, plan, cancel).await;
        self.cache.insert(&url, plan, &report);
        Ok((report.stamped(Utc::now()), source))
    }

    async fn pace(&self, cancel: &CancellationToken) {
        if self.pacing_delay.is_zero() {
            return;
        }
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = tokio::time::sleep(self.pacing_delay) => {}
        }
    }

    async fn generate(
        &self,
        url: &str,
        plan: Plan,
        cancel: &CancellationToken,
    ) -> (Report, ReportSource) {
        let Some(generator) = &self.generator else {
            return (self.build(url, plan), ReportSource::Deterministic);
        };

        self.stats.increment(EventType::AiAttempt);
        match generator.generate(url, plan, cancel).await {
            Ok(mut report) => {
                self.stats.increment(EventType::AiSuccess);
                report.url = url.to_string();
                (report, ReportSource::Ai)
            }
            Err(e) => {
                self.stats.increment(EventType::AiFallback);
                warn!("AI generation failed for {url}, using deterministic report: {e}");
                (self.build(url, plan), ReportSource::Fallback)
            }
        }
    }

    fn build(&self, url: &str, plan: Plan) -> Report {
        self.stats.increment(EventType::DeterministicBuild);
        build_report(url, plan)
    }
}

impl std::fmt::Debug for ReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportService")
            .field("cache", &self.cache)
            .field("ai_enabled", &self.generator.is_some())
            .field("pacing_delay", &self.pacing_delay)
            .finish()
    }
}
