//! Login failure taxonomy and user-facing messages.
//!
//! ERROR HANDLING
//! ==============
//! `Display` on `LoginError` is diagnostic text for the developer log.
//! `user_message()` is the single line shown under the form. Every variant
//! is terminal for the attempt; nothing here retries.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use super::transport::TransportError;
use super::types::scalar_text;

pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from server";
pub const REJECTED_FALLBACK_MESSAGE: &str = "Invalid email or password";
pub const NO_RESPONSE_MESSAGE: &str = "No response from server. Please check if the server is running.";
pub const SETUP_FAILED_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    /// 2xx response without a usable token.
    #[error("login response did not contain a token: {body:?}")]
    MalformedResponse { body: Option<Value> },
    /// Non-2xx response.
    #[error("login rejected with HTTP {status}: {body:?}")]
    Rejected { status: u16, body: Option<Value> },
    #[error("no response from server: {0}")]
    NoResponse(String),
    #[error("login request could not be sent: {0}")]
    Setup(String),
}

impl LoginError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedResponse { .. } => INVALID_RESPONSE_MESSAGE.to_owned(),
            Self::Rejected { body, .. } => extract_error_message(body.as_ref()),
            Self::NoResponse(_) => NO_RESPONSE_MESSAGE.to_owned(),
            Self::Setup(_) => SETUP_FAILED_MESSAGE.to_owned(),
        }
    }
}

impl From<TransportError> for LoginError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Setup(detail) => Self::Setup(detail),
            TransportError::NoResponse(detail) => Self::NoResponse(detail),
        }
    }
}

pub type Extractor = fn(&Value) -> Option<String>;

/// Tried in order against a rejection body; first non-empty result wins.
pub const ERROR_MESSAGE_EXTRACTORS: &[Extractor] = &[message_field, error_field, raw_text];

fn message_field(body: &Value) -> Option<String> {
    body.get("message").and_then(scalar_text)
}

fn error_field(body: &Value) -> Option<String> {
    body.get("error").and_then(scalar_text)
}

/// A body that is itself a scalar (plain-text error pages, bare JSON strings).
fn raw_text(body: &Value) -> Option<String> {
    scalar_text(body)
}

/// Pick the message for a rejected login, falling back to
/// [`REJECTED_FALLBACK_MESSAGE`].
pub fn extract_error_message(body: Option<&Value>) -> String {
    body.and_then(|body| ERROR_MESSAGE_EXTRACTORS.iter().find_map(|extract| extract(body)))
        .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_owned())
}
