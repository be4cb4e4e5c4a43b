//! Startup orchestration.
//!
//! # Responsibilities
//! - Register signal handlers before anything else runs
//! - Spawn the heartbeat task
//! - Wait for the first termination signal
//! - Stop the heartbeat, emit the run summary, and return
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Exactly one summary per run: the first signal wins, later deliveries
//!   are absorbed by the registered streams

use std::io;
use std::time::Instant;

use thiserror::Error;

use crate::config::HarnessConfig;
use crate::heartbeat::Heartbeat;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::TermSignals;
use crate::report::{RunSummary, SummaryError, SummarySink};

/// Error type for the harness run.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to register signal handlers: {0}")]
    Signals(#[source] io::Error),

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

/// Run the harness until a termination signal arrives.
///
/// `started` is the instant the process came up; elapsed time in the summary
/// is measured from it.
pub async fn run(config: HarnessConfig, started: Instant) -> Result<(), StartupError> {
    let mut signals = TermSignals::register().map_err(StartupError::Signals)?;

    let shutdown = Shutdown::new();
    let heartbeat = Heartbeat::new(&config.heartbeat);
    let heartbeat_task = tokio::spawn(heartbeat.run(shutdown.subscribe()));

    let signal = signals.recv().await;

    // Stop the heartbeat before emitting so no timestamp line lands between
    // the summary lines on stdout.
    shutdown.trigger();
    let _ = heartbeat_task.await;

    let summary = RunSummary::capture(started.elapsed(), signal);
    SummarySink::from_config(&config.summary).emit(&summary)?;

    tracing::info!(
        elapsed_secs = summary.elapsed.as_secs_f64(),
        signal = %summary.signal,
        "Run complete"
    );

    Ok(())
}
