// src/server/reload.rs

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

/// Signal pushed to connected clients after a rebuild.
///
/// `Inject` means the change is hot-swappable (a new CSS bundle); `Reload`
/// asks for a full page reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReloadSignal {
    Inject,
    Reload,
}

/// Fan-out hub for reload signals.
///
/// Cheap to clone; every clone feeds the same set of subscribers. Sending
/// with no connected clients is a no-op, which is what the one-shot
/// pipelines rely on: units can always notify and nothing listens outside a
/// watch session.
#[derive(Debug, Clone)]
pub struct ReloadHub {
    tx: broadcast::Sender<ReloadSignal>,
}

impl ReloadHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    /// Push a signal to all connected clients. Non-blocking, no delivery
    /// guarantee; slow clients may observe a lagged receiver and skip ahead.
    pub fn notify(&self, signal: ReloadSignal) {
        match self.tx.send(signal) {
            Ok(receivers) => {
                debug!(?signal, receivers, "reload signal sent");
            }
            Err(_) => {
                debug!(?signal, "no connected clients, reload signal dropped");
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReloadSignal> {
        self.tx.subscribe()
    }
}

impl Default for ReloadHub {
    fn default() -> Self {
        Self::new()
    }
}
