//! CSV export.
//!
//! A fixed two-column summary, one parameter per row. The row set is a user-visible
//! file format and does not change with the plan.

use std::io::Write;

use csv::Writer;

use crate::error_handling::ExportError;
use crate::report::Report;

/// Value of the security row when no header is listed.
const NO_HEADERS: &str = "None";

/// Writes the seven CSV rows for `report`.
///
/// # Errors
///
/// Returns `ExportError::Csv` if writing or flushing fails.
pub fn write_csv<W: Write>(report: &Report, out: W) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(out);

    let analysis_date = report
        .timestamp
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_default();
    let headers = if report.security.headers.is_empty() {
        NO_HEADERS.to_string()
    } else {
        report.security.headers.join(", ")
    };

    let rows = [
        ("Parameter", "Value".to_string()),
        ("URL", report.url.clone()),
        ("Analysis date", analysis_date),
        ("Performance", report.performance.score.to_string()),
        ("SEO", report.seo.score.to_string()),
        ("SEO issues", report.seo.issues.to_string()),
        ("Security headers", headers),
    ];
    for (parameter, value) in &rows {
        writer.write_record([*parameter, value.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Plan;
    use crate::report::build_report;
    use chrono::{TimeZone, Utc};

    fn csv_string(report: &Report) -> String {
        let mut buf = Vec::new();
        write_csv(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_seven_rows_in_order() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let report = build_report("https://example.com", Plan::Business).stamped(at);
        let text = csv_string(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Parameter,Value");
        assert_eq!(lines[1], "URL,https://example.com");
        assert_eq!(lines[2], "Analysis date,2024-03-01 12:30:00 UTC");
        assert_eq!(lines[3], format!("Performance,{}", report.performance.score));
        assert_eq!(lines[4], format!("SEO,{}", report.seo.score));
        assert_eq!(lines[5], format!("SEO issues,{}", report.seo.issues));
        assert_eq!(
            lines[6],
            "Security headers,\"HSTS, X-Frame-Options, X-Content-Type-Options, Content-Security-Policy\""
        );
    }

    #[test]
    fn test_empty_headers_and_missing_timestamp() {
        let mut report = build_report("https://example.com", Plan::Free);
        report.security.headers.clear();
        let text = csv_string(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "Analysis date,");
        assert_eq!(lines[6], "Security headers,None");
    }
}
