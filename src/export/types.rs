//! Export format options.

use clap::ValueEnum;
use strum_macros::Display;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// Full report as pretty-printed JSON
    Json,
    /// Seven-row `Parameter,Value` summary
    Csv,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}
