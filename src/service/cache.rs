//! Report cache keyed by normalized URL and plan.

use moka::sync::Cache;

use crate::config::CACHE_KEY_SEPARATOR;
use crate::plan::Plan;
use crate::report::Report;

/// Thread-safe report memo.
///
/// Entries are stored without a timestamp. With a capacity the cache evicts the
/// least valuable entries once full; without one it grows for the process lifetime.
#[derive(Clone)]
pub struct ReportCache {
    inner: Cache<String, Report>,
}

impl ReportCache {
    pub fn new(capacity: Option<u64>) -> Self {
        let inner = match capacity {
            Some(max) => Cache::builder().max_capacity(max).build(),
            None => Cache::builder().build(),
        };
        Self { inner }
    }

    /// `normalized_url + "__" + plan`
    pub fn key(normalized_url: &str, plan: Plan) -> String {
        format!("{normalized_url}{CACHE_KEY_SEPARATOR}{}", plan.key())
    }

    /// Cached report for the pair, unstamped.
    pub fn get(&self, normalized_url: &str, plan: Plan) -> Option<Report> {
        self.inner.get(&Self::key(normalized_url, plan))
    }

    /// Stores `report` with its timestamp cleared. Overwrites any previous entry.
    pub fn insert(&self, normalized_url: &str, plan: Plan, report: &Report) {
        self.inner
            .insert(Self::key(normalized_url, plan), report.unstamped());
    }

    pub fn contains(&self, normalized_url: &str, plan: Plan) -> bool {
        self.inner.contains_key(&Self::key(normalized_url, plan))
    }

    /// Approximate number of entries (pending maintenance is run first).
    pub fn len(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.invalidate_all();
    }
}

impl std::fmt::Debug for ReportCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportCache")
            .field("entries", &self.inner.entry_count())
            .field("capacity", &self.inner.policy().max_capacity())
            .finish()
    }
}
