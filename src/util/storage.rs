//! Key-value session storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session bootstrap writes through `SessionStore` so the same code persists
//! to browser `localStorage` (browser builds), to memory (SSR, tests), or to a file
//! (the CLI provides its own impl).

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage write failed for `{key}`: {detail}")]
    Write { key: String, detail: String },
    #[error("could not serialize value: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store. Used during SSR and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser `window.localStorage`.
#[cfg(feature = "browser")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "browser")]
impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "browser")]
impl SessionStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_owned(),
            detail: format!("{e:?}"),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_owned(),
            detail: format!("{e:?}"),
        })
    }
}
