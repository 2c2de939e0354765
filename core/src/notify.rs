//! Process-wide notification slot: current app status and latest error.
//!
//! A single `AppState` lives in a `watch` channel. Writers overwrite it,
//! subscribers only ever see the latest value. There is no error queue.

use std::sync::Arc;

use tokio::sync::watch;

use crate::types::RequestStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub status: RequestStatus,
    pub error: Option<String>,
}

/// Cloneable handle to the notification slot. Clones share the slot.
#[derive(Debug, Clone)]
pub struct AppNotifier {
    tx: Arc<watch::Sender<AppState>>,
}

impl Default for AppNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AppNotifier {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(AppState::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn set_status(&self, status: RequestStatus) {
        self.tx.send_modify(|state| state.status = status);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.tx.send_modify(|state| state.error = error);
    }

    pub fn snapshot(&self) -> AppState {
        self.tx.borrow().clone()
    }

    pub fn status(&self) -> RequestStatus {
        self.tx.borrow().status
    }

    pub fn error(&self) -> Option<String> {
        self.tx.borrow().error.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.tx.subscribe()
    }
}
