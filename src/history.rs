//! Per-session analysis history.
//!
//! Newest first, one entry per report URL. Re-analyzing a URL replaces its entry in
//! place without moving it. Plans only limit how much of the history is shown.

use std::collections::VecDeque;

use crate::config::MAX_HISTORY_ENTRIES;
use crate::plan::{get_plan_limits, Limit, Plan};
use crate::report::Report;

#[derive(Debug, Clone)]
pub struct AnalysisHistory {
    entries: VecDeque<Report>,
    capacity: usize,
}

impl Default for AnalysisHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Adds `report`, replacing an existing entry for the same URL.
    pub fn record(&mut self, report: Report) {
        if let Some(existing) = self.entries.iter_mut().find(|r| r.url == report.url) {
            *existing = report;
            return;
        }
        self.entries.push_front(report);
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &Report> {
        self.entries.iter()
    }

    /// Entries shown to a user on `plan`.
    pub fn visible(&self, plan: Plan) -> impl Iterator<Item = &Report> {
        self.entries.iter().take(visible_limit(plan))
    }

    /// How many entries `plan` hides (the "showing N of M" gap).
    pub fn hidden_count(&self, plan: Plan) -> usize {
        self.entries.len().saturating_sub(visible_limit(plan))
    }

    /// URLs in the history, for the site quota check.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|r| r.url.as_str())
    }
}

fn visible_limit(plan: Plan) -> usize {
    match get_plan_limits(plan).max_history_items {
        Limit::Unlimited => usize::MAX,
        Limit::Limited(n) => n as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::can_add_site;
    use crate::report::build_report;

    fn history_of(count: usize) -> AnalysisHistory {
        let mut history = AnalysisHistory::new();
        for i in 0..count {
            let url = format!("https://site{i}.com");
            history.record(build_report(&url, Plan::Free));
        }
        history
    }

    #[test]
    fn test_newest_first() {
        let history = history_of(3);
        let urls: Vec<_> = history.urls().collect();
        assert_eq!(
            urls,
            vec!["https://site2.com", "https://site1.com", "https://site0.com"]
        );
    }

    #[test]
    fn test_reanalysis_replaces_in_place() {
        let mut history = history_of(3);
        let updated = build_report("https://site0.com", Plan::Business);
        history.record(updated.clone());

        assert_eq!(history.len(), 3);
        let last = history.entries().last().unwrap();
        assert_eq!(last, &updated);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let history = history_of(MAX_HISTORY_ENTRIES + 5);
        assert_eq!(history.len(), MAX_HISTORY_ENTRIES);
        assert!(!history.urls().any(|u| u == "https://site0.com"));
        assert_eq!(history.urls().next(), Some("https://site104.com"));
    }

    #[test]
    fn test_visible_by_plan() {
        let history = history_of(60);
        assert_eq!(history.visible(Plan::Free).count(), 3);
        assert_eq!(history.hidden_count(Plan::Free), 57);
        assert_eq!(history.visible(Plan::Pro).count(), 50);
        assert_eq!(history.hidden_count(Plan::Pro), 10);
        assert_eq!(history.visible(Plan::Business).count(), 60);
        assert_eq!(history.hidden_count(Plan::Business), 0);
    }

    #[test]
    fn test_urls_feed_site_quota() {
        let history = history_of(1);
        assert!(can_add_site(Plan::Free, history.urls(), "https://www.site0.com"));
        assert!(!can_add_site(Plan::Free, history.urls(), "https://other.com"));
        assert!(can_add_site(Plan::Pro, history.urls(), "https://other.com"));
    }

    #[test]
    fn test_clear() {
        let mut history = history_of(4);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.hidden_count(Plan::Free), 0);
    }
}
