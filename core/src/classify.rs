//! Turns a failed operation into one user-facing message.
//!
//! The rules form a strict decision list; the first that matches wins:
//! 1. server-reported error: its first message,
//! 2. transport failure: the error body's `message`, then the top-level message,
//! 3. runtime fault: `Native error: <message>`,
//! 4. anything else: the value serialized as JSON.
//!
//! Both "nothing usable" outcomes of rules 1 and 2 fall back to
//! [`DEFAULT_ERROR_MESSAGE`].

use tracing::warn;

use crate::error::ApiError;
use crate::notify::AppNotifier;
use crate::types::RequestStatus;

pub const DEFAULT_ERROR_MESSAGE: &str = "Some error occurred";

pub fn classify(error: &ApiError) -> String {
    match error {
        ApiError::Server { messages, .. } => messages
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        ApiError::Transport(e) => e
            .response_message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| Some(e.message.as_str()).filter(|m| !m.is_empty()))
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
            .to_string(),
        ApiError::Native(message) => format!("Native error: {message}"),
        ApiError::Decode(e) | ApiError::Encode(e) => format!("Native error: {e}"),
        ApiError::Unknown(value) => value.to_string(),
    }
}

/// Classify `error` and publish it: error message first, then `failed`.
pub fn report_failure(error: &ApiError, app: &AppNotifier) -> String {
    let message = classify(error);
    warn!(%message, ?error, "operation failed");
    app.set_error(Some(message.clone()));
    app.set_status(RequestStatus::Failed);
    message
}
