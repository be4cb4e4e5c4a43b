//! The once-per-second timestamp loop.

use std::io::{self, Write};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

use crate::clock;
use crate::config::HeartbeatConfig;

/// Periodic timestamp printer.
pub struct Heartbeat {
    interval: Duration,
}

impl Heartbeat {
    /// Create a heartbeat from validated configuration.
    pub fn new(config: &HeartbeatConfig) -> Self {
        Self {
            interval: Duration::from_secs(config.interval_secs),
        }
    }

    /// Print one timestamp line per interval until shutdown fires.
    ///
    /// The first line prints one full interval after start. A closed stdout
    /// also ends the loop, since the parent reading it is gone.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let first_tick = time::Instant::now() + self.interval;
        let mut ticker = time::interval_at(first_tick, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let line = clock::format_wall(clock::now_wall());
                    if write_line(&line).is_err() {
                        tracing::debug!("stdout closed, heartbeat stopping");
                        break;
                    }
                }
                _ = shutdown.recv() => {
                    tracing::debug!("Heartbeat stopping");
                    break;
                }
            }
        }
    }
}

fn write_line(line: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()
}
