//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - The daily quota check and export gating
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use site_audit::app::{log_run_summary, log_service_statistics};
use site_audit::config::Opt;
use site_audit::export::export_to_dir;
use site_audit::initialization::init_logger_with;
use site_audit::plan::{can_perform_analysis, remaining_analyses};
use site_audit::{get_plan_limits, Config, ReportService};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    // Load AI credentials from .env (current dir first, then next to the executable)
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config::from(&opt);
    if let Err(e) = config.validate() {
        eprintln!("site_audit error: {e}");
        process::exit(2);
    }

    let plan = opt.plan;
    let policy = get_plan_limits(plan);
    if !can_perform_analysis(plan, opt.analyses_today) {
        eprintln!(
            "Daily limit reached on the {} plan ({} analyses left today). Upgrade to analyze more sites.",
            policy.display_name,
            remaining_analyses(plan, opt.analyses_today)
        );
        process::exit(1);
    }
    info!(
        "Plan {}: {} analyses left today",
        policy.display_name,
        remaining_analyses(plan, opt.analyses_today)
    );

    let service = ReportService::from_config(&config).context("Failed to initialize report service")?;

    // Ctrl-C cancels the network phases; the report still completes deterministically
    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_token.cancel();
        }
    });

    let start = Instant::now();
    let (report, source) = match service
        .get_report_with_source(&opt.url, plan, &cancel)
        .await
    {
        Ok(result) => result,
        Err(e) => {
            log::debug!("Analysis failed: {e:#}");
            eprintln!("site_audit error: {}", e.user_message());
            process::exit(1);
        }
    };
    log_run_summary(&report.url, source, start.elapsed().as_secs_f64());

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");

    if let Some(format) = opt.export {
        match export_to_dir(&report, plan, format, &opt.output_dir) {
            Ok(path) => eprintln!("Report exported to {}", path.display()),
            Err(e) => {
                eprintln!("site_audit error: {e}");
                process::exit(1);
            }
        }
    }

    log_service_statistics(service.stats());
    Ok(())
}
