//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → Register signal handlers → Spawn heartbeat
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM/SIGHUP/SIGQUIT → TermSignal
//!
//! Shutdown (startup.rs + shutdown.rs):
//!     Signal received → Stop heartbeat → Emit run summary → Exit 0
//! ```
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - All four termination signals share one shutdown path
//! - Signal handlers register before the heartbeat starts, so a parent that
//!   sees a timestamp line can safely signal

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use signals::TermSignal;
