//! Client-side state core for the todolists service.
//!
//! # Overview
//! Keeps an ordered collection of todolists with UI-only fields, runs the
//! remote list/create/rename/delete calls, and reports progress and failures
//! to a process-wide notification slot.
//!
//! # Design
//! - `TodolistClient` stays I/O-free: `build_*` produces requests, `parse_*`
//!   consumes responses. A `Transport` executes them.
//! - `TodolistsState` holds the pure transitions; `TodolistStore` shares it
//!   behind a `watch` channel.
//! - `TodolistService` is the command object that ties client, transport,
//!   store and `AppNotifier` together.
//! - `classify` maps any `ApiError` to a single message.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod notify;
pub mod service;
pub mod session;
pub mod state;
pub mod store;
pub mod transport;
pub mod types;

pub use classify::{classify, report_failure, DEFAULT_ERROR_MESSAGE};
pub use client::TodolistClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notify::{AppNotifier, AppState};
pub use service::{Rejected, TodolistService};
pub use session::{SessionEvent, SessionSignal};
pub use state::TodolistsState;
pub use store::TodolistStore;
pub use transport::{ReqwestTransport, Transport};
pub use types::{CreateTodolist, FilterValue, RequestStatus, Todolist, TodolistDomain, UpdateTodolist};
