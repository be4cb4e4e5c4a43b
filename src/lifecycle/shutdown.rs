//! Shutdown coordination for the harness.

use tokio::sync::broadcast;

/// Coordinator that stops the heartbeat once a termination signal arrives.
///
/// Provides a broadcast channel the heartbeat task subscribes to. Triggering
/// it before the summary is emitted guarantees no timestamp line can
/// interleave into a stdout summary.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
