//! Per-plan generation profile: value ranges, thresholds and fixed text.
//!
//! Every plan-dependent decision of the builder reads from this table; the builder
//! itself contains no branching on the plan.

use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_HSTS, HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_X_FRAME_OPTIONS,
};
use crate::plan::Plan;

/// Inclusive integer range fed to `deterministic_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl ValueRange {
    const fn new(min: u32, max: u32) -> Self {
        ValueRange { min, max }
    }

    /// True if `value` lies within the range.
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Fixed-text and feature-gating profile for one plan.
#[derive(Debug)]
pub struct TierProfile {
    pub performance_score: ValueRange,
    pub seo_score: ValueRange,
    pub load_time_ms: ValueRange,
    pub first_contentful_paint_ms: ValueRange,
    pub seo_issues: ValueRange,
    pub content_score: ValueRange,
    /// A header is reported when its 0..=100 seed value is strictly above this.
    pub header_threshold: u32,
    pub performance_recommendations: &'static [&'static str],
    pub seo_recommendations: &'static [&'static str],
    pub ux_tips: &'static [&'static str],
    pub content_summary: &'static str,
    /// techSeo, monitoring, competitive analysis, white label, team access, auto audit
    pub premium_features: bool,
    pub pdf_export: bool,
    pub advanced_security: bool,
}

/// Range of the per-header seed value compared against `header_threshold`.
pub const HEADER_CHECK_RANGE: ValueRange = ValueRange::new(0, 100);

/// Security headers in fixed check order, with the seed field name of each.
pub const SECURITY_HEADER_CHECKS: &[(&str, &str)] = &[
    (HEADER_HSTS, "hsts"),
    (HEADER_X_FRAME_OPTIONS, "xframe"),
    (HEADER_X_CONTENT_TYPE_OPTIONS, "xcontent"),
    (HEADER_CONTENT_SECURITY_POLICY, "csp"),
];

/// Substituted for an empty header list.
pub const NO_SECURITY_HEADERS: &str = "No security headers detected";

/// Crawl budget reported in the technical SEO section.
pub const TECH_SEO_CRAWL_LIMIT: u32 = 10_000;

pub const TECH_SEO_CHECKS: &[&str] = &[
    "robots.txt directives",
    "XML sitemap coverage",
    "Canonical URL consistency",
    "Structured data markup",
];

const PERFORMANCE_RECOMMENDATIONS: &[&str] = &[
    "Compress and resize images, and lazy-load media below the fold.",
    "Load heavy scripts with defer/async or move them to the end of the page.",
    "Enable server-side caching for static assets (CSS, JS, images).",
];

const PRO_SEO_RECOMMENDATIONS: &[&str] = &[
    "Give every key page a unique title and meta description.",
    "Use a single H1 per page with a logical H2-H3 structure.",
    "Keep URLs human-readable and check sitemap.xml and robots.txt.",
];

const BUSINESS_SEO_RECOMMENDATIONS: &[&str] = &[
    "Audit titles and meta descriptions across the whole site and fix duplicates.",
    "Add structured data markup to earn rich snippets in search results.",
    "Strengthen internal linking between related pages and monitor crawl errors weekly.",
];

const UX_TIPS: &[&str] = &[
    "Make primary call-to-action buttons visible without scrolling.",
    "Check that text contrast meets accessibility guidelines.",
    "Make sure navigation works comfortably on mobile devices.",
];

const FREE_CONTENT_SUMMARY: &str =
    "Basic content check completed. Upgrade your plan for a detailed content quality breakdown.";

const PAID_CONTENT_SUMMARY: &str =
    "Content is structured, relevant to the audience and readable. Keep it updated and expand key pages.";

static FREE_TIER: TierProfile = TierProfile {
    performance_score: ValueRange::new(40, 85),
    seo_score: ValueRange::new(35, 85),
    load_time_ms: ValueRange::new(800, 3000),
    first_contentful_paint_ms: ValueRange::new(500, 2200),
    seo_issues: ValueRange::new(0, 10),
    content_score: ValueRange::new(50, 80),
    header_threshold: 60,
    performance_recommendations: &[],
    seo_recommendations: &[],
    ux_tips: &[],
    content_summary: FREE_CONTENT_SUMMARY,
    premium_features: false,
    pdf_export: false,
    advanced_security: false,
};

static PRO_TIER: TierProfile = TierProfile {
    performance_score: ValueRange::new(55, 100),
    seo_score: ValueRange::new(50, 98),
    load_time_ms: ValueRange::new(600, 2500),
    first_contentful_paint_ms: ValueRange::new(400, 1800),
    seo_issues: ValueRange::new(0, 8),
    content_score: ValueRange::new(60, 90),
    header_threshold: 45,
    performance_recommendations: PERFORMANCE_RECOMMENDATIONS,
    seo_recommendations: PRO_SEO_RECOMMENDATIONS,
    ux_tips: UX_TIPS,
    content_summary: PAID_CONTENT_SUMMARY,
    premium_features: false,
    pdf_export: true,
    advanced_security: true,
};

static BUSINESS_TIER: TierProfile = TierProfile {
    performance_score: ValueRange::new(60, 100),
    seo_score: ValueRange::new(55, 100),
    load_time_ms: ValueRange::new(500, 2200),
    first_contentful_paint_ms: ValueRange::new(300, 1500),
    seo_issues: ValueRange::new(0, 6),
    content_score: ValueRange::new(70, 95),
    header_threshold: 35,
    performance_recommendations: PERFORMANCE_RECOMMENDATIONS,
    seo_recommendations: BUSINESS_SEO_RECOMMENDATIONS,
    ux_tips: UX_TIPS,
    content_summary: PAID_CONTENT_SUMMARY,
    premium_features: true,
    pdf_export: true,
    advanced_security: true,
};

/// Returns the generation profile for `plan`.
pub fn tier_profile(plan: Plan) -> &'static TierProfile {
    match plan {
        Plan::Free => &FREE_TIER,
        Plan::Pro => &PRO_TIER,
        Plan::Business => &BUSINESS_TIER,
    }
}
