//! Shared handle to the todolists state.
//!
//! # Design
//! The state lives in a `watch` channel so UI code can subscribe to changes.
//! Each transition runs inside `send_modify`, which makes it atomic with
//! respect to every other transition; nothing holds the state across an
//! `.await`.

use std::sync::Arc;

use tokio::sync::{broadcast, watch};
use tracing::debug;

use crate::session::SessionEvent;
use crate::state::TodolistsState;
use crate::types::{FilterValue, RequestStatus, Todolist, TodolistDomain};

#[derive(Debug, Clone)]
pub struct TodolistStore {
    tx: Arc<watch::Sender<TodolistsState>>,
}

impl Default for TodolistStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodolistStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(TodolistsState::new());
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> TodolistsState {
        self.tx.borrow().clone()
    }

    pub fn get(&self, id: &str) -> Option<TodolistDomain> {
        self.tx.borrow().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<TodolistsState> {
        self.tx.subscribe()
    }

    pub fn replace_all(&self, todolists: Vec<Todolist>) {
        self.tx.send_modify(|state| state.replace_all(todolists));
    }

    pub fn add(&self, todolist: Todolist) {
        self.tx.send_modify(|state| state.add(todolist));
    }

    pub fn remove(&self, id: &str) -> bool {
        self.apply(|state| state.remove(id))
    }

    pub fn rename(&self, id: &str, title: &str) -> bool {
        self.apply(|state| state.rename(id, title))
    }

    pub fn set_filter(&self, id: &str, filter: FilterValue) -> bool {
        self.apply(|state| state.set_filter(id, filter))
    }

    pub fn set_entity_status(&self, id: &str, status: RequestStatus) -> bool {
        self.apply(|state| state.set_entity_status(id, status))
    }

    pub fn clear_all(&self) {
        self.tx.send_modify(TodolistsState::clear);
    }

    /// Empty the store every time the session is cleared. Returns once the
    /// signal's sender side is gone.
    pub async fn follow_session(&self, mut events: broadcast::Receiver<SessionEvent>) {
        loop {
            match events.recv().await {
                Ok(SessionEvent::Cleared) => {
                    debug!("TodolistStore::follow_session: session cleared");
                    self.clear_all();
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    // Every event is a clear, so a missed one still means clear.
                    debug!(skipped, "TodolistStore::follow_session: lagged");
                    self.clear_all();
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    fn apply(&self, f: impl FnOnce(&mut TodolistsState) -> bool) -> bool {
        let mut changed = false;
        self.tx.send_if_modified(|state| {
            changed = f(state);
            changed
        });
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionSignal;

    fn todolist(id: &str) -> Todolist {
        Todolist {
            id: id.to_string(),
            title: format!("list {id}"),
            added_date: String::new(),
            order: 0,
        }
    }

    #[test]
    fn clones_share_state() {
        let store = TodolistStore::new();
        let other = store.clone();
        store.add(todolist("a"));
        assert_eq!(other.len(), 1);
        assert_eq!(other.get("a").unwrap().title(), "list a");
    }

    #[tokio::test]
    async fn missing_id_does_not_notify_subscribers() {
        let store = TodolistStore::new();
        store.add(todolist("a"));
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        assert!(!store.rename("missing", "x"));
        assert!(!rx.has_changed().unwrap());

        assert!(store.rename("a", "x"));
        assert!(rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn follow_session_clears_on_signal() {
        let store = TodolistStore::new();
        store.replace_all(vec![todolist("a"), todolist("b")]);
        let signal = SessionSignal::new();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        let follower = store.clone();
        let events = signal.subscribe();
        let handle = tokio::spawn(async move { follower.follow_session(events).await });

        signal.clear();
        rx.changed().await.unwrap();
        assert!(store.is_empty());

        drop(signal);
        handle.await.unwrap();
    }

    #[test]
    fn clear_all_on_empty_store() {
        let store = TodolistStore::new();
        store.clear_all();
        assert!(store.is_empty());
    }
}
