//! Explicit HTTP client configuration.
//!
//! DESIGN
//! ======
//! There is no process-wide default header. An `ApiClient` value carries the
//! base URL and, after login, the bearer token; every request built from it
//! gets the same headers. The app constructs one at start-up, stores it in a
//! context signal, and swaps it for the authorized copy on login.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use super::transport::{HttpRequest, Method, TransportError};
use super::types::LoginRequest;
use crate::config::{ApiConfig, LOGIN_PATH};

const JSON: &str = "application/json";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
    bearer: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config, bearer: None }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn bearer(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    /// Copy of this client that authorizes every request with `token`.
    #[must_use]
    pub fn with_bearer(&self, token: &str) -> Self {
        Self { config: self.config.clone(), bearer: Some(token.to_owned()) }
    }

    /// Copy of this client with no credentials attached.
    #[must_use]
    pub fn without_bearer(&self) -> Self {
        Self { config: self.config.clone(), bearer: None }
    }

    /// Headers applied to every request built by this client.
    pub fn default_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("Accept".to_owned(), JSON.to_owned())];
        if let Some(token) = &self.bearer {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        headers
    }

    /// `POST` with a JSON body and cookies included.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Setup` if the body cannot be serialized.
    pub fn post_json<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<HttpRequest, TransportError> {
        let body = serde_json::to_string(body).map_err(|e| TransportError::Setup(e.to_string()))?;
        let mut headers = self.default_headers();
        headers.push(("Content-Type".to_owned(), JSON.to_owned()));
        Ok(HttpRequest {
            method: Method::Post,
            url: self.config.url(path),
            headers,
            body: Some(body),
            include_credentials: true,
        })
    }

    /// Authorized `GET` for any API path.
    pub fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: Method::Get,
            url: self.config.url(path),
            headers: self.default_headers(),
            body: None,
            include_credentials: true,
        }
    }

    /// The request for `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Setup` if the credentials cannot be serialized.
    pub fn login_request(&self, credentials: &LoginRequest) -> Result<HttpRequest, TransportError> {
        self.post_json(LOGIN_PATH, credentials)
    }
}
