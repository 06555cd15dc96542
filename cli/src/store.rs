//! File-backed `SessionStore` for the command line.
//!
//! The file holds one JSON object of string values keyed like browser
//! `localStorage` (`token`, `user`), so a session written here has the same
//! shape as one written by the web client.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use connekta_login::util::storage::{SessionStore, StorageError};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> io::Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e),
        }
    }

    fn save(&self, items: &BTreeMap<String, String>) -> io::Result<()> {
        if items.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            };
        }
        let raw = serde_json::to_string_pretty(items).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, raw)
    }

    fn update(&self, key: &str, apply: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<(), StorageError> {
        let write_err = |e: io::Error| StorageError::Write { key: key.to_owned(), detail: e.to_string() };
        let mut items = self.load().map_err(write_err)?;
        apply(&mut items);
        self.save(&items).map_err(write_err)
    }
}

impl SessionStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(mut items) => items.remove(key),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable session file");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(key, |items| {
            items.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.update(key, |items| {
            items.remove(key);
        })
    }
}
