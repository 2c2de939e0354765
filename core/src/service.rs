//! Asynchronous todolist operations.
//!
//! # Design
//! `TodolistService` is the command object the UI calls into. Each operation
//! builds a request with `TodolistClient`, runs it through the `Transport`,
//! and reconciles the result into the `TodolistStore`. Progress and failures
//! go to the shared `AppNotifier`; the error itself never reaches the caller,
//! who only learns that the operation was `Rejected`.
//!
//! Failures of every remote operation, `add` and `rename` included, are
//! classified and reported. `rename` does not toggle the global status on
//! its way through.

use thiserror::Error;
use tracing::debug;

use crate::classify::report_failure;
use crate::client::TodolistClient;
use crate::error::ApiError;
use crate::notify::AppNotifier;
use crate::store::TodolistStore;
use crate::transport::Transport;
use crate::types::{CreateTodolist, FilterValue, RequestStatus, Todolist, UpdateTodolist};

/// The operation failed and the failure has been published to the
/// notification slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation rejected")]
pub struct Rejected;

pub struct TodolistService<T> {
    client: TodolistClient,
    transport: T,
    store: TodolistStore,
    app: AppNotifier,
}

impl<T: Transport> TodolistService<T> {
    pub fn new(client: TodolistClient, transport: T, store: TodolistStore, app: AppNotifier) -> Self {
        Self {
            client,
            transport,
            store,
            app,
        }
    }

    pub fn store(&self) -> &TodolistStore {
        &self.store
    }

    pub fn app(&self) -> &AppNotifier {
        &self.app
    }

    /// Replace the whole collection with the server's list. One attempt.
    pub async fn load(&self) -> Result<(), Rejected> {
        debug!("TodolistService::load: called");
        self.app.set_status(RequestStatus::Loading);
        let todolists = self.fetch_todolists().await.map_err(|e| self.reject(&e))?;
        debug!(count = todolists.len(), "TodolistService::load: received");
        self.store.replace_all(todolists);
        self.app.set_status(RequestStatus::Succeeded);
        Ok(())
    }

    /// Create on the server, then prepend the returned record.
    pub async fn add(&self, title: &str) -> Result<(), Rejected> {
        debug!(%title, "TodolistService::add: called");
        self.app.set_status(RequestStatus::Loading);
        let todolist = self.create_todolist(title).await.map_err(|e| self.reject(&e))?;
        self.store.add(todolist);
        self.app.set_status(RequestStatus::Succeeded);
        Ok(())
    }

    pub async fn rename(&self, id: &str, title: &str) -> Result<(), Rejected> {
        debug!(%id, %title, "TodolistService::rename: called");
        self.update_todolist(id, title).await.map_err(|e| self.reject(&e))?;
        self.store.rename(id, title);
        Ok(())
    }

    /// Marks the record `loading` while the delete is in flight. On failure
    /// the record stays and is marked `failed`.
    pub async fn remove(&self, id: &str) -> Result<(), Rejected> {
        debug!(%id, "TodolistService::remove: called");
        self.app.set_status(RequestStatus::Loading);
        self.store.set_entity_status(id, RequestStatus::Loading);
        if let Err(e) = self.delete_todolist(id).await {
            self.store.set_entity_status(id, RequestStatus::Failed);
            return Err(self.reject(&e));
        }
        self.store.remove(id);
        self.app.set_status(RequestStatus::Succeeded);
        Ok(())
    }

    pub fn set_filter(&self, id: &str, filter: FilterValue) {
        self.store.set_filter(id, filter);
    }

    pub fn set_entity_status(&self, id: &str, status: RequestStatus) {
        self.store.set_entity_status(id, status);
    }

    pub fn clear_all(&self) {
        self.store.clear_all();
    }

    async fn fetch_todolists(&self) -> Result<Vec<Todolist>, ApiError> {
        let response = self.transport.execute(self.client.build_list_todolists()).await?;
        self.client.parse_list_todolists(response)
    }

    async fn create_todolist(&self, title: &str) -> Result<Todolist, ApiError> {
        let input = CreateTodolist {
            title: title.to_string(),
        };
        let request = self.client.build_create_todolist(&input)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create_todolist(response)
    }

    async fn update_todolist(&self, id: &str, title: &str) -> Result<(), ApiError> {
        let input = UpdateTodolist {
            title: title.to_string(),
        };
        let request = self.client.build_update_todolist(id, &input)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_update_todolist(response)
    }

    async fn delete_todolist(&self, id: &str) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete_todolist(id)).await?;
        self.client.parse_delete_todolist(response)
    }

    fn reject(&self, error: &ApiError) -> Rejected {
        report_failure(error, &self.app);
        Rejected
    }
}
