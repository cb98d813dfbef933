//! Report value types.
//!
//! The serialized shape (camelCase keys, `loadTime`/`firstContentfulPaint` metric
//! names) is the contract shared by the deterministic builder, the AI generator
//! prompt, the JSON export and any UI consuming the report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A complete audit report. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// The normalized URL that produced this report
    pub url: String,
    /// Creation instant; `None` while stored in the cache
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub performance: PerformanceSection,
    #[serde(default)]
    pub seo: SeoSection,
    #[serde(default)]
    pub security: SecuritySection,
    #[serde(default)]
    pub content: ContentSection,
    #[serde(default)]
    pub ux: UxSection,
    /// Present only on the top plan
    #[serde(default)]
    pub tech_seo: Option<TechSeoSection>,
    /// Present only on the top plan
    #[serde(default)]
    pub monitoring: Option<MonitoringSection>,
    #[serde(default)]
    pub competitive_analysis: bool,
    #[serde(default)]
    pub white_label: bool,
    #[serde(default)]
    pub team_access: bool,
    #[serde(default)]
    pub auto_audit: bool,
    #[serde(default)]
    pub pdf_export: bool,
}

impl Report {
    /// Returns a copy stamped with `at`.
    pub fn stamped(&self, at: DateTime<Utc>) -> Report {
        Report {
            timestamp: Some(at),
            ..self.clone()
        }
    }

    /// Returns a copy with the timestamp cleared, as stored in the cache.
    pub fn unstamped(&self) -> Report {
        Report {
            timestamp: None,
            ..self.clone()
        }
    }

    /// True if both reports are identical apart from their timestamps.
    pub fn same_content(&self, other: &Report) -> bool {
        self.unstamped() == other.unstamped()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSection {
    /// 0..=100
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub metrics: PerformanceMetrics,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    #[serde(default, rename = "loadTime")]
    pub load_time_ms: u32,
    #[serde(default, rename = "firstContentfulPaint")]
    pub first_contentful_paint_ms: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoSection {
    /// 0..=100
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub issues: u32,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Security headers in fixed check order. Never empty when produced by the
/// deterministic builder: a sentinel entry stands in for "none detected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySection {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub advanced: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    /// 0..=100
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UxSection {
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechSeoSection {
    #[serde(default)]
    pub crawl_limit: u32,
    #[serde(default)]
    pub checks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringSection {
    #[serde(default)]
    pub uptime: bool,
    #[serde(default)]
    pub speed: bool,
    #[serde(default)]
    pub auto_audit_weekly: bool,
}
