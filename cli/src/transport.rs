//! `reqwest` implementation of the login transport.
//!
//! The client keeps a cookie store so `include_credentials` requests carry
//! whatever cookies the backend set earlier in the same run.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use async_trait::async_trait;
use connekta_login::net::transport::{AuthTransport, HttpRequest, Method, RawResponse, TransportError};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

/// Errors raised before the request left the process are setup failures;
/// everything else (connect, timeout, reset) means no response arrived.
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        TransportError::Setup(err.to_string())
    } else {
        TransportError::NoResponse(err.to_string())
    }
}

#[async_trait(?Send)]
impl AuthTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(classify)?;
        let status = resp.status().as_u16();
        let text = resp.text().await.unwrap_or_default();
        Ok(RawResponse::from_text(status, &text))
    }
}
