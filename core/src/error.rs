//! Error types for the todolists client.
//!
//! # Design
//! The variants follow the three failure families the classifier tells apart:
//! a server that accepted the call but reported failure (`Server`), a call
//! that failed at the HTTP level (`Transport`), and everything else raised
//! while running an operation (`Native`, `Decode`, `Encode`, `Unknown`).

use thiserror::Error;

/// Errors produced while building, executing or parsing a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-zero `resultCode`.
    #[error("server rejected request (code {result_code}): {}", messages.join("; "))]
    Server { result_code: i32, messages: Vec<String> },

    /// The request never completed or came back with a non-2xx status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A runtime fault that did not originate from the server.
    #[error("{0}")]
    Native(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// A failure value of unknown shape.
    #[error("unknown failure: {0}")]
    Unknown(serde_json::Value),
}

impl ApiError {
    pub fn native(message: impl Into<String>) -> Self {
        ApiError::Native(message.into())
    }

    /// Status code of the failed HTTP exchange, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(e) => e.status,
            _ => None,
        }
    }
}

/// HTTP-level failure: network error, timeout, or non-2xx status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub status: Option<u16>,
    /// Top-level description of the failure.
    pub message: String,
    /// `message` field of the JSON error body, if the server sent one.
    pub response_message: Option<String>,
}

impl TransportError {
    /// Build from a non-2xx response, picking `message` out of a JSON body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let response_message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));
        Self {
            status: Some(status),
            message: format!("Request failed with status code {status}"),
            response_message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_extracts_body_message() {
        let err = TransportError::from_status(404, r#"{"message":"Todolist not found"}"#);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.response_message.as_deref(), Some("Todolist not found"));
        assert!(err.is_not_found());
    }

    #[test]
    fn from_status_ignores_non_json_body() {
        let err = TransportError::from_status(500, "internal error");
        assert_eq!(err.message, "Request failed with status code 500");
        assert!(err.response_message.is_none());
    }

    #[test]
    fn server_error_display_joins_messages() {
        let err = ApiError::Server {
            result_code: 1,
            messages: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(err.to_string(), "server rejected request (code 1): a; b");
    }

    #[test]
    fn status_only_for_transport() {
        let err = ApiError::from(TransportError::from_status(401, ""));
        assert_eq!(err.status(), Some(401));
        assert_eq!(ApiError::native("x").status(), None);
    }
}
