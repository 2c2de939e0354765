//! Stateless HTTP request builder and response parser for the todolists API.
//!
//! # Design
//! `TodolistClient` holds only the base URL and an optional API key. Each
//! remote operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Execution lives behind `Transport`, so this module stays free of I/O.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, TransportError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ApiResponse, CreateTodolist, ItemData, Todolist, UpdateTodolist};

pub const API_KEY_HEADER: &str = "API-KEY";

#[derive(Debug, Clone)]
pub struct TodolistClient {
    base_url: String,
    api_key: Option<String>,
}

impl TodolistClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            ..Self::new(&config.base_url)
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todolists(&self) -> HttpRequest {
        self.request(HttpMethod::Get, format!("{}/todo-lists", self.base_url), None)
    }

    pub fn build_create_todolist(&self, input: &CreateTodolist) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::Encode)?;
        Ok(self.request(HttpMethod::Post, format!("{}/todo-lists", self.base_url), Some(body)))
    }

    pub fn build_update_todolist(&self, id: &str, input: &UpdateTodolist) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::Encode)?;
        Ok(self.request(HttpMethod::Put, format!("{}/todo-lists/{id}", self.base_url), Some(body)))
    }

    pub fn build_delete_todolist(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("{}/todo-lists/{id}", self.base_url), None)
    }

    pub fn parse_list_todolists(&self, response: HttpResponse) -> Result<Vec<Todolist>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(ApiError::Decode)
    }

    pub fn parse_create_todolist(&self, response: HttpResponse) -> Result<Todolist, ApiError> {
        let envelope: ApiResponse<ItemData<Todolist>> = parse_envelope(response)?;
        Ok(envelope.data.item)
    }

    pub fn parse_update_todolist(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_envelope::<serde_json::Value>(response)?;
        Ok(())
    }

    pub fn parse_delete_todolist(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_envelope::<serde_json::Value>(response)?;
        Ok(())
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        if let Some(key) = &self.api_key {
            headers.push((API_KEY_HEADER.to_string(), key.clone()));
        }
        HttpRequest {
            method,
            path,
            headers,
            body,
        }
    }
}

/// Non-2xx responses are transport failures.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(TransportError::from_status(response.status, &response.body).into())
}

/// Decode a `{resultCode, messages, data}` envelope, turning a non-zero
/// `resultCode` into `ApiError::Server`.
fn parse_envelope<D: DeserializeOwned>(response: HttpResponse) -> Result<ApiResponse<D>, ApiError> {
    check_status(&response)?;
    // Check the code before decoding `data`: rejected calls may carry an empty or partial payload.
    let head: ApiResponse<serde_json::Value> = serde_json::from_str(&response.body).map_err(ApiError::Decode)?;
    if head.result_code != 0 {
        return Err(ApiError::Server {
            result_code: head.result_code,
            messages: head.messages,
        });
    }
    serde_json::from_str(&response.body).map_err(ApiError::Decode)
}
