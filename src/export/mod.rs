//! Report export.
//!
//! Exports are a plan feature: `ensure_export_allowed` must pass before anything is
//! written. JSON carries the whole report, CSV a fixed seven-row summary.

mod csv;
mod json;
mod types;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error_handling::ExportError;
use crate::plan::{get_plan_limits, Plan};
use crate::report::Report;

pub use self::csv::write_csv;
pub use self::json::write_json;
pub use self::types::ExportFormat;

/// Fails with `ExportError::NotAvailable` unless `plan` includes exports.
pub fn ensure_export_allowed(plan: Plan) -> Result<(), ExportError> {
    if get_plan_limits(plan).export_enabled {
        Ok(())
    } else {
        Err(ExportError::NotAvailable { plan })
    }
}

/// `report-<url with every non-alphanumeric char replaced by '-'>-<millis>.<ext>`
pub fn export_file_name(url: &str, format: ExportFormat, millis: i64) -> String {
    let slug: String = url
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("report-{slug}-{millis}.{}", format.extension())
}

/// Writes `report` in `format` to `out`.
///
/// # Errors
///
/// Returns the serialization or I/O error of the chosen format.
pub fn write_report<W: Write>(
    report: &Report,
    format: ExportFormat,
    out: W,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Json => write_json(report, out),
        ExportFormat::Csv => write_csv(report, out),
    }
}

/// Exports `report` into `dir` and returns the path of the new file.
///
/// # Errors
///
/// Returns `ExportError::NotAvailable` if `plan` has no exports, or the I/O or
/// serialization error that stopped the write.
pub fn export_to_dir(
    report: &Report,
    plan: Plan,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    ensure_export_allowed(plan)?;

    let millis = chrono::Utc::now().timestamp_millis();
    let path = dir.join(export_file_name(&report.url, format, millis));
    let file = File::create(&path)?;
    write_report(report, format, BufWriter::new(file))?;

    info!("Exported {} report to {}", format, path.display());
    Ok(path)
}
