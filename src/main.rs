//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_similarity` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_similarity::initialization::init_logger_with;
use domain_similarity::{run_similarity, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env may set RUST_LOG; a missing file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_similarity(config).await {
        Ok(report) => {
            println!(
                "Found {} look-alike domain{} among {} candidate{} ({} metric, threshold {}) in {:.1}s",
                report.matches,
                if report.matches == 1 { "" } else { "s" },
                report.candidates,
                if report.candidates == 1 { "" } else { "s" },
                report.metric,
                report.threshold,
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.report_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_similarity error: {:#}", e);
            process::exit(1);
        }
    }
}
