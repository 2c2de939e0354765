//! The "clear session" signal, fired by whatever ends a session (logout).

use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Cleared,
}

#[derive(Debug, Clone)]
pub struct SessionSignal {
    tx: broadcast::Sender<SessionEvent>,
}

impl Default for SessionSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionSignal {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(16);
        Self { tx }
    }

    /// Notify every subscriber. Firing with no subscribers is not an error.
    pub fn clear(&self) {
        let _ = self.tx.send(SessionEvent::Cleared);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }
}
