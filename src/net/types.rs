//! Wire DTOs for the authentication endpoint.
//!
//! DESIGN
//! ======
//! Response fields are optional and the user record stays a raw
//! `serde_json::Value`. Shape checks happen in `net::login`; error bodies are
//! read by `net::error`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Build the request from raw form input. Only the email is trimmed.
    pub fn from_input(email: &str, password: &str) -> Self {
        Self { email: email.trim().to_owned(), password: password.to_owned() }
    }
}

// Requests end up in developer logs; never print the password.
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a 2xx login response. Any field may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Usually a string; any scalar is accepted, see [`scalar_text`].
    #[serde(default)]
    pub token: Value,
    #[serde(default)]
    pub user: Value,
}

/// Text form of a truthy JSON scalar: non-empty strings, non-zero numbers,
/// and `true`. `null`, `false`, `0`, `""`, arrays and objects yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}
