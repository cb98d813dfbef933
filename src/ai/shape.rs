//! Coerces model output into the report shape.

use serde_json::{Map, Number, Value};

use crate::error_handling::AiGenerationError;
use crate::report::Report;

/// Sections every report must carry, even if the model left them out.
const REQUIRED_SECTIONS: [&str; 5] = ["performance", "seo", "security", "content", "ux"];

/// Turns parsed model JSON into a `Report` for `url`.
///
/// The URL is always overwritten with the caller's, the timestamp is dropped (the
/// service stamps on return), and missing or mistyped top-level sections become
/// empty sections. Nulls are removed so serde defaults apply, and numbers are
/// rounded and clamped into the unsigned integer ranges the report uses.
///
/// # Errors
///
/// Returns `AiGenerationError::Shape` if the value is not an object or a field has
/// the wrong type after coercion.
pub fn shape_report(parsed: Value, url: &str) -> Result<Report, AiGenerationError> {
    let Value::Object(mut map) = normalize_value(parsed) else {
        return Err(AiGenerationError::Shape(
            "top-level value is not an object".to_string(),
        ));
    };

    map.insert("url".to_string(), Value::String(url.to_string()));
    map.remove("timestamp");
    for section in REQUIRED_SECTIONS {
        if !map.get(section).is_some_and(Value::is_object) {
            map.insert(section.to_string(), Value::Object(Map::new()));
        }
    }

    serde_json::from_value(Value::Object(map))
        .map_err(|e| AiGenerationError::Shape(e.to_string()))
}

fn normalize_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, normalize_value(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(normalize_value)
                .collect(),
        ),
        Value::Number(n) => Value::Number(clamp_number(&n)),
        other => other,
    }
}

fn clamp_number(n: &Number) -> Number {
    if let Some(u) = n.as_u64() {
        return Number::from(u.min(u64::from(u32::MAX)));
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f > 0.0 => {
            Number::from(f.round().min(f64::from(u32::MAX)) as u64)
        }
        _ => Number::from(0u64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_is_overwritten_and_timestamp_dropped() {
        let report = shape_report(
            json!({"url": "https://other.site", "timestamp": "yesterday"}),
            "https://example.com",
        )
        .unwrap();
        assert_eq!(report.url, "https://example.com");
        assert!(report.timestamp.is_none());
    }

    #[test]
    fn test_missing_sections_are_filled() {
        let report = shape_report(json!({"seo": {"score": 40}}), "https://example.com").unwrap();
        assert_eq!(report.seo.score, 40);
        assert_eq!(report.performance.score, 0);
        assert!(report.performance.recommendations.is_empty());
        assert!(report.security.headers.is_empty());
        assert!(report.ux.tips.is_empty());
        assert!(report.tech_seo.is_none());
    }

    #[test]
    fn test_wrongly_typed_section_is_replaced() {
        let report =
            shape_report(json!({"content": "great", "ux": null}), "https://example.com").unwrap();
        assert_eq!(report.content.score, 0);
        assert!(report.content.summary.is_empty());
        assert!(report.ux.tips.is_empty());
    }

    #[test]
    fn test_numbers_are_rounded_and_clamped() {
        let report = shape_report(
            json!({
                "performance": {"score": 72.6, "metrics": {"loadTime": -5, "firstContentfulPaint": 1200}},
                "seo": {"issues": 1e12}
            }),
            "https://example.com",
        )
        .unwrap();
        assert_eq!(report.performance.score, 73);
        assert_eq!(report.performance.metrics.load_time_ms, 0);
        assert_eq!(report.performance.metrics.first_contentful_paint_ms, 1200);
        assert_eq!(report.seo.issues, u32::MAX);
    }

    #[test]
    fn test_full_business_shape_is_preserved() {
        let report = shape_report(
            json!({
                "security": {"headers": ["HSTS", null], "advanced": true},
                "techSeo": {"crawlLimit": 500, "checks": ["robots.txt"]},
                "monitoring": {"uptime": true, "speed": false, "autoAuditWeekly": true},
                "whiteLabel": true
            }),
            "https://example.com",
        )
        .unwrap();
        assert_eq!(report.security.headers, vec!["HSTS"]);
        assert!(report.security.advanced);
        assert_eq!(report.tech_seo.unwrap().crawl_limit, 500);
        assert!(report.monitoring.unwrap().auto_audit_weekly);
        assert!(report.white_label);
        assert!(!report.team_access);
    }

    #[test]
    fn test_non_object_is_shape_error() {
        let err = shape_report(json!(["not", "a", "report"]), "https://example.com").unwrap_err();
        assert!(matches!(err, AiGenerationError::Shape(_)));
    }

    #[test]
    fn test_mistyped_field_is_shape_error() {
        let err = shape_report(
            json!({"seo": {"recommendations": "fix everything"}}),
            "https://example.com",
        )
        .unwrap_err();
        assert!(matches!(err, AiGenerationError::Shape(_)));
    }
}
