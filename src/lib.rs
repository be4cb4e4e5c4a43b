//! Signal Test Harness Library
//!
//! A long-running child process for exercising parent-side signal delivery:
//! it prints a wall-clock timestamp once per second until a termination
//! signal arrives, then reports how long it ran and exits with code 0.
//!
//! # Data Flow
//! ```text
//! heartbeat (ticker.rs):
//!     interval timer → stdout: one timestamp line per second
//!
//! lifecycle (signals.rs):
//!     SIGINT/SIGTERM/SIGHUP/SIGQUIT
//!     → shutdown.rs (stop the heartbeat)
//!     → report (summary.rs → sink.rs): elapsed, end time, signal
//!     → stdout or summary file, then exit 0
//! ```

pub mod clock;
pub mod config;
pub mod heartbeat;
pub mod lifecycle;
pub mod observability;
pub mod report;

pub use config::HarnessConfig;
pub use heartbeat::Heartbeat;
pub use lifecycle::Shutdown;
pub use report::RunSummary;
