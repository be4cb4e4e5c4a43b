//! OS signal handling.
//!
//! # Responsibilities
//! - Register handlers for the termination signals (SIGINT, SIGTERM, SIGHUP,
//!   SIGQUIT)
//! - Translate whichever arrives first into a [`TermSignal`]
//!
//! # Design Decisions
//! - A termination signal is a normal shutdown trigger, not an error
//! - Registration is separate from waiting: once [`TermSignals::register`]
//!   returns, delivery is guaranteed to be caught
//! - Concurrent deliveries resolve to whichever stream the select polls
//!   first; the rest are absorbed by the registered streams

use std::fmt;
use std::io;

use tokio::signal::unix::{signal, Signal, SignalKind};

/// Termination signals the harness handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSignal {
    Interrupt,
    Terminate,
    Hangup,
    Quit,
}

impl TermSignal {
    pub const ALL: [TermSignal; 4] = [
        TermSignal::Interrupt,
        TermSignal::Terminate,
        TermSignal::Hangup,
        TermSignal::Quit,
    ];

    /// POSIX signal number.
    pub fn number(self) -> i32 {
        match self {
            TermSignal::Hangup => 1,
            TermSignal::Interrupt => 2,
            TermSignal::Quit => 3,
            TermSignal::Terminate => 15,
        }
    }
}

impl fmt::Display for TermSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TermSignal::Interrupt => "SIGINT",
            TermSignal::Terminate => "SIGTERM",
            TermSignal::Hangup => "SIGHUP",
            TermSignal::Quit => "SIGQUIT",
        })
    }
}

/// Registered streams for all handled termination signals.
pub struct TermSignals {
    interrupt: Signal,
    terminate: Signal,
    hangup: Signal,
    quit: Signal,
}

impl TermSignals {
    /// Install handlers for every termination signal.
    pub fn register() -> io::Result<Self> {
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
            hangup: signal(SignalKind::hangup())?,
            quit: signal(SignalKind::quit())?,
        })
    }

    /// Wait for the first termination signal and report which one arrived.
    pub async fn recv(&mut self) -> TermSignal {
        let received = tokio::select! {
            _ = self.interrupt.recv() => TermSignal::Interrupt,
            _ = self.terminate.recv() => TermSignal::Terminate,
            _ = self.hangup.recv() => TermSignal::Hangup,
            _ = self.quit.recv() => TermSignal::Quit,
        };

        tracing::info!(signal = %received, "Termination signal received");
        received
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_conventional_names() {
        assert_eq!(TermSignal::Interrupt.to_string(), "SIGINT");
        assert_eq!(TermSignal::Terminate.to_string(), "SIGTERM");
        assert_eq!(TermSignal::Hangup.to_string(), "SIGHUP");
        assert_eq!(TermSignal::Quit.to_string(), "SIGQUIT");
    }

    #[test]
    fn numbers_are_distinct_posix_values() {
        let mut numbers: Vec<i32> = TermSignal::ALL.iter().map(|s| s.number()).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers, vec![1, 2, 3, 15]);
    }
}
