//! Logger initialization.

use std::io::Write;

use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependencies whose logs are clamped regardless of the requested level.
const QUIET_MODULES: &[(&str, LevelFilter)] = &[
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("rustls", LevelFilter::Warn),
    ("moka", LevelFilter::Warn),
];

fn write_json(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into())
    )
}

fn write_plain(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    let level = record.level();
    let (marker, colored_level) = match level {
        Level::Error => ("❌", level.to_string().red()),
        Level::Warn => ("⚠️", level.to_string().yellow()),
        Level::Info => ("✔️", level.to_string().green()),
        Level::Debug => ("🔍", level.to_string().blue()),
        Level::Trace => ("🔬", level.to_string().purple()),
    };
    writeln!(
        buf,
        "{} {} [{}] {}",
        marker,
        record.target().cyan(),
        colored_level,
        record.args()
    )
}

/// Initializes `env_logger` with the given level and format.
///
/// `RUST_LOG` is read first and `level` overrides it for this crate, so
/// `RUST_LOG=reqwest=debug site_audit example.com` still works for dependencies.
/// Uses `try_init`, so a second call returns an error instead of panicking.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, max) in QUIET_MODULES {
        builder.filter_module(module, (*max).min(level));
    }
    builder.filter_module("site_audit", level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init().map_err(InitializationError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_does_not_panic_when_repeated() {
        // Only the first initialization in a process can succeed
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(first.is_ok() || first.is_err());
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_quiet_modules_are_clamped() {
        for (module, max) in QUIET_MODULES {
            assert!(*max <= LevelFilter::Info, "{module} should be clamped");
        }
    }
}
