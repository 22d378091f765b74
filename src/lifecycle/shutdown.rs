//! Shutdown coordination.
//!
//! `main` owns one `Shutdown` and triggers it from the signal task; the HTTP
//! server holds a receiver and starts draining in-flight item requests as
//! soon as it fires. Integration tests trigger it directly to stop a server
//! between cases.

use tokio::sync::broadcast;

/// Fan-out of a single "stop serving" event.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A receiver for `HttpServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every running server to stop. Safe to call when none is running.
    pub fn trigger(&self) {
        let listeners = self.tx.send(()).unwrap_or(0);
        tracing::debug!(listeners, "Shutdown triggered");
    }

    /// Servers that have not yet observed the trigger.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
