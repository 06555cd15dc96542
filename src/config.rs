//! API endpoint and storage-key configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build resolves its base URL at compile time; the CLI resolves
//! it from flags/environment and builds the same `ApiConfig` by hand.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// Route the user lands on after a successful login.
pub const HOME_ROUTE: &str = "/";
pub const SIGNUP_ROUTE: &str = "/signup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from a base URL, dropping any trailing slash.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Config baked in at build time via `CONNEKTA_API_BASE_URL`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CONNEKTA_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Absolute URL for an API path such as `/api/auth/login`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    pub fn login_url(&self) -> String {
        self.url(LOGIN_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
