//! JSON export (full report, pretty-printed).

use std::io::Write;

use crate::error_handling::ExportError;
use crate::report::Report;

/// Writes `report` as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns `ExportError::Json` or `ExportError::Io` if writing fails.
pub fn write_json<W: Write>(report: &Report, mut out: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut out, report)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
