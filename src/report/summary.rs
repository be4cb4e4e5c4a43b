//! Run summary capture and rendering.

use std::time::Duration;

use time::OffsetDateTime;

use crate::clock;
use crate::lifecycle::signals::TermSignal;

/// What the harness reports when a termination signal ends the run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Wall-clock time the process ran before the signal.
    pub elapsed: Duration,

    /// When the signal was observed.
    pub ended_at: OffsetDateTime,

    /// The signal that ended the run.
    pub signal: TermSignal,
}

impl RunSummary {
    /// Capture the summary at the moment of shutdown.
    pub fn capture(elapsed: Duration, signal: TermSignal) -> Self {
        Self {
            elapsed,
            ended_at: clock::now_wall(),
            signal,
        }
    }

    /// The three summary lines, in emission order.
    pub fn render(&self) -> String {
        format!(
            "Elapsed Time: {:.2}s\nEnd Time: {}\nAbort Signal: {}\n",
            self.elapsed.as_secs_f64(),
            clock::format_wall(self.ended_at),
            self.signal,
        )
    }
}
