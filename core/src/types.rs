//! Domain DTOs for the todolists API and the client-side domain record.
//!
//! # Design
//! `Todolist` mirrors the server schema and is defined independently from the
//! mock-server crate; integration tests catch schema drift. `addedDate` and
//! `order` are owned by the server and passed through untouched.
//!
//! `TodolistDomain` wraps a `Todolist` with the two UI-only fields. It
//! serializes flat so a UI layer sees one object per row.

use serde::{Deserialize, Serialize};

/// A todolist as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todolist {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub added_date: String,
    #[serde(default)]
    pub order: i64,
}

/// Request payload for creating a todolist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodolist {
    pub title: String,
}

/// Request payload for renaming a todolist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodolist {
    pub title: String,
}

/// Which tasks of a todolist the UI shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterValue {
    #[default]
    All,
    Active,
    Completed,
}

/// Progress of a request, used both per record and for the whole app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// A todolist augmented with client-owned UI state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodolistDomain {
    #[serde(flatten)]
    pub todolist: Todolist,
    pub filter: FilterValue,
    pub entity_status: RequestStatus,
}

impl TodolistDomain {
    pub fn id(&self) -> &str {
        &self.todolist.id
    }

    pub fn title(&self) -> &str {
        &self.todolist.title
    }
}

impl From<Todolist> for TodolistDomain {
    /// New domain records always start with `filter = all` and `entityStatus = idle`.
    fn from(todolist: Todolist) -> Self {
        Self {
            todolist,
            filter: FilterValue::default(),
            entity_status: RequestStatus::default(),
        }
    }
}

/// Envelope returned by the mutating endpoints. `result_code == 0` is success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<D> {
    pub result_code: i32,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub fields_errors: Vec<FieldError>,
    pub data: D,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub error: String,
}

/// `data` payload of a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemData<T> {
    pub item: T,
}
