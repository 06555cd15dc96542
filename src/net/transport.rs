//! HTTP transport seam.
//!
//! Browser builds: `GlooTransport` sends requests with `gloo-net`.
//! Native callers (the CLI, tests) supply their own `AuthTransport`.
//!
//! ERROR HANDLING
//! ==============
//! Transports only report whether a response arrived. Any status code,
//! including 4xx/5xx, comes back as `Ok(RawResponse)`; classification is
//! left to `net::login`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully prepared request. Built by `ApiClient`, executed by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Send cookies along with the request (`credentials: include`).
    pub include_credentials: bool,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status plus decoded body of whatever the server sent back.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl RawResponse {
    /// Decode a response body. Empty bodies become `None`; bodies that are
    /// not JSON are kept as a JSON string.
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned())))
        };
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never left the client.
    #[error("request setup failed: {0}")]
    Setup(String),
    /// The request was sent but nothing came back.
    #[error("no response received: {0}")]
    NoResponse(String),
}

#[async_trait(?Send)]
pub trait AuthTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}

/// Browser transport backed by `fetch` through `gloo-net`.
#[cfg(feature = "browser")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "browser")]
#[async_trait(?Send)]
impl AuthTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if request.include_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Setup(e.to_string()))?;

        let resp = prepared
            .send()
            .await
            .map_err(|e| TransportError::NoResponse(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        Ok(RawResponse::from_text(status, &text))
    }
}
