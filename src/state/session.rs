//! Signed-in session and its persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `Session` is created by a successful login, written to storage under the
//! `token`/`user` keys, and read back on page load. `AuthState` wraps it for
//! the Leptos context so pages can render identity-dependent UI.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::net::client::ApiClient;
use crate::util::storage::{SessionStore, StorageError};

/// Token and user record returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    /// Opaque user record; stored as-is.
    pub user: Value,
}

impl Session {
    /// Persist the session and return `client` authorized with its token,
    /// together with the outcome of the write.
    ///
    /// There is no rollback: the returned client is authorized even when the
    /// write failed. Callers decide whether that failure matters.
    pub fn bootstrap<S: SessionStore + ?Sized>(
        &self,
        store: &S,
        client: &ApiClient,
    ) -> (ApiClient, Result<(), StorageError>) {
        let persisted = self.persist(store).inspect_err(|e| {
            log::error!("failed to persist session: {e}");
        });
        (client.with_bearer(&self.token), persisted)
    }

    /// Write `token` as a raw string and `user` as JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the user record cannot be serialized or a write fails.
    pub fn persist<S: SessionStore + ?Sized>(&self, store: &S) -> Result<(), StorageError> {
        let user = serde_json::to_string(&self.user)?;
        store.set_item(TOKEN_KEY, &self.token)?;
        store.set_item(USER_KEY, &user)
    }

    /// Read a previously persisted session. Missing or empty token, or an
    /// unparseable user record, yields `None`.
    pub fn restore<S: SessionStore + ?Sized>(store: &S) -> Option<Self> {
        let token = store.get_item(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let user = match store.get_item(USER_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(user) => user,
                Err(e) => {
                    log::warn!("discarding stored session with unreadable user record: {e}");
                    return None;
                }
            },
            None => Value::Null,
        };
        Some(Self { token, user })
    }

    /// Remove both session keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects a removal.
    pub fn clear<S: SessionStore + ?Sized>(store: &S) -> Result<(), StorageError> {
        store.remove_item(TOKEN_KEY)?;
        store.remove_item(USER_KEY)
    }

    /// Best human-readable label for the user record.
    pub fn display_name(&self) -> Option<&str> {
        ["fullname", "name", "email"]
            .iter()
            .filter_map(|key| self.user.get(*key).and_then(Value::as_str))
            .find(|name| !name.is_empty())
    }
}

/// Authentication state provided via context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        Self { session: Some(session) }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.session.as_ref().and_then(Session::display_name)
    }
}
