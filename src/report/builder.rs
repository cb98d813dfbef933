//! Deterministic report builder.
//!
//! Maps `(normalized URL, plan)` to a full `Report` without any I/O. Each field is
//! drawn from its own seed string `<url>_<plan>_<field>`, so values do not depend on
//! evaluation order and can be checked one by one against `deterministic_value`.

use crate::plan::Plan;
use crate::seed::{deterministic_value, field_seed};

use super::tiers::{
    tier_profile, ValueRange, HEADER_CHECK_RANGE, NO_SECURITY_HEADERS, SECURITY_HEADER_CHECKS,
    TECH_SEO_CHECKS, TECH_SEO_CRAWL_LIMIT,
};
use super::types::{
    ContentSection, MonitoringSection, PerformanceMetrics, PerformanceSection, Report,
    SecuritySection, SeoSection, TechSeoSection, UxSection,
};

/// Seed field names. Changing any of them changes every generated report.
mod fields {
    pub const PERFORMANCE: &str = "perf";
    pub const SEO: &str = "seo";
    pub const LOAD_TIME: &str = "load";
    pub const FIRST_CONTENTFUL_PAINT: &str = "fcp";
    pub const SEO_ISSUES: &str = "issues";
    pub const CONTENT: &str = "content";
}

struct FieldSampler<'a> {
    url: &'a str,
    plan: &'static str,
}

impl FieldSampler<'_> {
    fn sample(&self, field: &str, range: ValueRange) -> u32 {
        deterministic_value(&field_seed(self.url, self.plan, field), range.min, range.max)
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| (*s).to_string()).collect()
}

/// Security headers that pass their per-header threshold, in fixed check order.
///
/// Returns the single sentinel entry when no header passes.
pub fn security_headers(normalized_url: &str, plan: Plan) -> Vec<String> {
    let sampler = FieldSampler {
        url: normalized_url,
        plan: plan.key(),
    };
    let threshold = tier_profile(plan).header_threshold;

    let headers: Vec<String> = SECURITY_HEADER_CHECKS
        .iter()
        .filter(|(_, field)| sampler.sample(field, HEADER_CHECK_RANGE) > threshold)
        .map(|(name, _)| (*name).to_string())
        .collect();

    if headers.is_empty() {
        vec![NO_SECURITY_HEADERS.to_string()]
    } else {
        headers
    }
}

/// Builds the report for an already-normalized URL.
///
/// Pure and total: identical inputs always produce identical reports. The returned
/// report has no timestamp; callers stamp it.
pub fn build_report(normalized_url: &str, plan: Plan) -> Report {
    let tier = tier_profile(plan);
    let sampler = FieldSampler {
        url: normalized_url,
        plan: plan.key(),
    };

    let performance = PerformanceSection {
        score: sampler.sample(fields::PERFORMANCE, tier.performance_score),
        metrics: PerformanceMetrics {
            load_time_ms: sampler.sample(fields::LOAD_TIME, tier.load_time_ms),
            first_contentful_paint_ms: sampler
                .sample(fields::FIRST_CONTENTFUL_PAINT, tier.first_contentful_paint_ms),
        },
        recommendations: owned(tier.performance_recommendations),
    };

    let seo = SeoSection {
        score: sampler.sample(fields::SEO, tier.seo_score),
        issues: sampler.sample(fields::SEO_ISSUES, tier.seo_issues),
        recommendations: owned(tier.seo_recommendations),
    };

    let security = SecuritySection {
        headers: security_headers(normalized_url, plan),
        advanced: tier.advanced_security,
    };

    let content = ContentSection {
        score: sampler.sample(fields::CONTENT, tier.content_score),
        summary: tier.content_summary.to_string(),
    };

    let (tech_seo, monitoring) = if tier.premium_features {
        (
            Some(TechSeoSection {
                crawl_limit: TECH_SEO_CRAWL_LIMIT,
                checks: owned(TECH_SEO_CHECKS),
            }),
            Some(MonitoringSection {
                uptime: true,
                speed: true,
                auto_audit_weekly: true,
            }),
        )
    } else {
        (None, None)
    };

    Report {
        url: normalized_url.to_string(),
        timestamp: None,
        performance,
        seo,
        security,
        content,
        ux: UxSection {
            tips: owned(tier.ux_tips),
        },
        tech_seo,
        monitoring,
        competitive_analysis: tier.premium_features,
        white_label: tier.premium_features,
        team_access: tier.premium_features,
        auto_audit: tier.premium_features,
        pdf_export: tier.pdf_export,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::deterministic_value;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_build_report_is_deterministic() {
        for plan in Plan::iter() {
            let a = build_report("https://example.com", plan);
            let b = build_report("https://example.com", plan);
            assert_eq!(a, b);
            assert!(a.timestamp.is_none());
        }
    }

    #[test]
    fn test_fields_match_their_seeds() {
        let url = "https://example.com";
        let report = build_report(url, Plan::Pro);
        assert_eq!(
            report.performance.score,
            deterministic_value("https://example.com_pro_perf", 55, 100)
        );
        assert_eq!(
            report.seo.score,
            deterministic_value("https://example.com_pro_seo", 50, 98)
        );
        assert_eq!(
            report.performance.metrics.load_time_ms,
            deterministic_value("https://example.com_pro_load", 600, 2500)
        );
        assert_eq!(
            report.performance.metrics.first_contentful_paint_ms,
            deterministic_value("https://example.com_pro_fcp", 400, 1800)
        );
        assert_eq!(
            report.seo.issues,
            deterministic_value("https://example.com_pro_issues", 0, 8)
        );
        assert_eq!(
            report.content.score,
            deterministic_value("https://example.com_pro_content", 60, 90)
        );
    }

    #[test]
    fn test_known_performance_scores() {
        // Reference values computed with the same hash/PRNG formulas
        assert_eq!(build_report("https://example.com", Plan::Free).performance.score, 81);
        assert_eq!(build_report("https://example.com", Plan::Pro).performance.score, 59);
        assert_eq!(build_report("https://example.com", Plan::Business).performance.score, 69);
    }

    #[test]
    fn test_header_gating_testsite_free() {
        // Seed values: hsts=36, xframe=99, xcontent=80, csp=83; free threshold is 60
        let headers = security_headers("https://testsite.io", Plan::Free);
        assert_eq!(
            headers,
            vec![
                "X-Frame-Options".to_string(),
                "X-Content-Type-Options".to_string(),
                "Content-Security-Policy".to_string(),
            ]
        );
    }

    #[test]
    fn test_header_gating_other_plans() {
        assert_eq!(
            security_headers("https://testsite.io", Plan::Pro),
            vec!["HSTS".to_string(), "X-Content-Type-Options".to_string()]
        );
        assert_eq!(
            security_headers("https://example.com", Plan::Business),
            vec![
                "HSTS".to_string(),
                "X-Frame-Options".to_string(),
                "X-Content-Type-Options".to_string(),
                "Content-Security-Policy".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_headers_use_sentinel() {
        // Seed values: 41, 42, 57, 8, all at or below the free threshold of 60
        let headers = security_headers("https://site6.com", Plan::Free);
        assert_eq!(headers, vec![NO_SECURITY_HEADERS.to_string()]);
    }

    #[test]
    fn test_free_plan_gating() {
        let report = build_report("https://example.com", Plan::Free);
        assert!(report.performance.recommendations.is_empty());
        assert!(report.seo.recommendations.is_empty());
        assert!(report.ux.tips.is_empty());
        assert!(report.tech_seo.is_none());
        assert!(report.monitoring.is_none());
        assert!(!report.competitive_analysis);
        assert!(!report.white_label);
        assert!(!report.team_access);
        assert!(!report.auto_audit);
        assert!(!report.pdf_export);
        assert!(!report.security.advanced);
    }

    #[test]
    fn test_pro_plan_gating() {
        let report = build_report("https://example.com", Plan::Pro);
        assert_eq!(report.performance.recommendations.len(), 3);
        assert_eq!(report.seo.recommendations.len(), 3);
        assert_eq!(report.ux.tips.len(), 3);
        assert!(report.tech_seo.is_none());
        assert!(report.monitoring.is_none());
        assert!(!report.team_access);
        assert!(report.pdf_export);
        assert!(report.security.advanced);
    }

    #[test]
    fn test_business_plan_gating() {
        let report = build_report("https://example.com", Plan::Business);
        let tech = report.tech_seo.expect("business has techSeo");
        assert_eq!(tech.crawl_limit, TECH_SEO_CRAWL_LIMIT);
        assert_eq!(tech.checks.len(), TECH_SEO_CHECKS.len());
        let monitoring = report.monitoring.expect("business has monitoring");
        assert!(monitoring.uptime && monitoring.speed && monitoring.auto_audit_weekly);
        assert!(report.competitive_analysis);
        assert!(report.white_label);
        assert!(report.team_access);
        assert!(report.auto_audit);
        assert!(report.pdf_export);
    }

    #[test]
    fn test_content_summary_depends_only_on_free_vs_paid() {
        let free = build_report("https://a.com", Plan::Free).content.summary;
        let pro = build_report("https://a.com", Plan::Pro).content.summary;
        let business = build_report("https://b.com", Plan::Business).content.summary;
        assert_ne!(free, pro);
        assert_eq!(pro, business);
    }

    #[test]
    fn test_report_json_shape() {
        let report = build_report("https://example.com", Plan::Business);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["performance"]["metrics"]["loadTime"].is_number());
        assert!(value["performance"]["metrics"]["firstContentfulPaint"].is_number());
        assert!(value["techSeo"]["crawlLimit"].is_number());
        assert_eq!(value["monitoring"]["autoAuditWeekly"], true);
        assert_eq!(value["competitiveAnalysis"], true);
        assert!(value["timestamp"].is_null());

        let free = serde_json::to_value(build_report("https://example.com", Plan::Free)).unwrap();
        assert!(free["techSeo"].is_null());
        assert_eq!(free["pdfExport"], false);
    }

    proptest! {
        #[test]
        fn test_scores_within_plan_bounds(host in "[a-z]{3,20}\\.(com|io|org|net)") {
            let url = format!("https://{host}");
            for plan in Plan::iter() {
                let tier = tier_profile(plan);
                let report = build_report(&url, plan);
                prop_assert!(tier.performance_score.contains(report.performance.score));
                prop_assert!(tier.seo_score.contains(report.seo.score));
                prop_assert!(tier.load_time_ms.contains(report.performance.metrics.load_time_ms));
                prop_assert!(tier
                    .first_contentful_paint_ms
                    .contains(report.performance.metrics.first_contentful_paint_ms));
                prop_assert!(tier.seo_issues.contains(report.seo.issues));
                prop_assert!(tier.content_score.contains(report.content.score));
                prop_assert!(!report.security.headers.is_empty());
                prop_assert_eq!(&report.url, &url);
            }
        }
    }
}
