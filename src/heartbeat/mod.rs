//! Heartbeat subsystem.
//!
//! # Data Flow
//! ```text
//! Interval timer (ticker.rs)
//!     → format current wall-clock time
//!     → stdout, flushed per line
//!
//! Shutdown broadcast
//!     → loop exits, task completes
//! ```
//!
//! # Design Decisions
//! - stdout is flushed after every line so a parent reading a pipe sees
//!   lines live, not on process exit
//! - The loop has no failure path of its own; it stops on shutdown or when
//!   stdout closes

pub mod ticker;

pub use ticker::Heartbeat;
