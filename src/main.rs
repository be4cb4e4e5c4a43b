//! Signal Test Harness (child side)
//!
//! A disposable child process for manually verifying that a parent can
//! signal and terminate it during testing.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌───────────────────────────────────────────────┐
//!                  │                SIGNAL HARNESS                  │
//!                  │                                                │
//!   stdout ◀───────┼── heartbeat ── one timestamp line per second   │
//!                  │                                                │
//!   SIGINT/SIGTERM │  ┌──────────┐    ┌──────────┐    ┌─────────┐  │
//!   SIGHUP/SIGQUIT─┼─▶│ lifecycle│───▶│ shutdown │───▶│ report  │──┼──▶ stdout
//!                  │  │ signals  │    │ broadcast│    │ summary │  │    or file
//!                  │  └──────────┘    └──────────┘    └─────────┘  │
//!                  │                                                │
//!                  │  ┌──────────────────────────────────────────┐ │
//!                  │  │  Cross-Cutting: config · observability   │ │
//!                  │  └──────────────────────────────────────────┘ │
//!                  └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use signal_harness::clock;
use signal_harness::config::{loader, HarnessConfig};
use signal_harness::lifecycle::startup;
use signal_harness::observability::logging;

#[derive(Parser)]
#[command(name = "signal-harness")]
#[command(
    about = "Heartbeat child process for exercising parent-side signal delivery",
    long_about = None
)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append the run summary to this file instead of printing it to stdout.
    #[arg(long)]
    summary_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => loader::load_config(path)?,
        None => HarnessConfig::default(),
    };
    if cli.summary_file.is_some() {
        config.summary.file = cli.summary_file;
    }

    logging::init(&config.observability);

    tracing::info!(
        pid = std::process::id(),
        start_time = %clock::format_wall(clock::now_wall()),
        "signal-harness v0.1.0 starting"
    );

    tracing::info!(
        heartbeat_interval_secs = config.heartbeat.interval_secs,
        summary_file = ?config.summary.file,
        "Configuration loaded"
    );

    startup::run(config, started).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
