//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stderr, so stdout stays a clean harness surface
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing
//! - Diagnostics never touch stdout; a parent scanning heartbeat lines must
//!   not see log noise mixed in
//! - Level comes from config, `RUST_LOG` overrides

pub mod logging;
