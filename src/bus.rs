use tokio::sync::broadcast;

use crate::events::OracleEvent;

/// Fan-out of window and counsel changes to presentation subscribers.
///
/// The feed keeps running whether or not anyone listens, so a notification
/// with no subscribers is simply delivered to nobody.
#[derive(Clone)]
pub struct EventBus {
    changes: broadcast::Sender<OracleEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (changes, _) = broadcast::channel(capacity.max(1));
        Self { changes }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OracleEvent> {
        self.changes.subscribe()
    }

    /// Returns how many subscribers the change was delivered to.
    pub fn notify(&self, change: OracleEvent) -> usize {
        self.changes.send(change).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.changes.receiver_count()
    }
}
