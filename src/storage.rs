// ABOUTME: Persistent key/value store holding session, CSRF and theme state
// ABOUTME: Pluggable backends: DashMap in-memory store and a JSON file store for the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Client Store
//!
//! All state the client must remember between calls (bearer token, cached profile, CSRF
//! token, theme) goes through one injected [`KeyValueStore`]. Nothing is kept in globals, so
//! several clients with separate stores can coexist in one process (tests rely on this).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use habitbite_core::errors::{AppError, AppResult};
use tracing::debug;

/// Shared handle to the client store
pub type SharedStore = Arc<dyn KeyValueStore>;

/// String key/value persistence
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a value; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Process-local store backed by a sharded concurrent map
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store behind a [`SharedStore`] handle
    #[must_use]
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store persisted as a flat JSON object on disk
///
/// Reads are served from memory; every write rewrites the file through a temporary file
/// and rename so a crash never leaves a truncated store behind.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: DashMap<String, String>,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if an existing file cannot be read, or
    /// `SerializationError` if it is not a JSON object of strings
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let entries = DashMap::new();
        if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if !raw.trim().is_empty() {
                let map: BTreeMap<String, String> = serde_json::from_str(&raw)?;
                for (key, value) in map {
                    entries.insert(key, value);
                }
            }
        }
        debug!(store.path = %path.display(), store.keys = entries.len(), "Opened client store");
        Ok(Self {
            path,
            entries,
            write_lock: Mutex::new(()),
        })
    }

    /// Open the store at the platform default location
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when no data directory exists, or any error from [`Self::open`]
    pub fn open_default() -> AppResult<Self> {
        Self::open(default_store_path()?)
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> AppResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| AppError::storage("Client store lock poisoned"))?;

        let snapshot: BTreeMap<String, String> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        let json = serde_json::to_string_pretty(&snapshot)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.persist()
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// `<data dir>/habitbite/store.json`
///
/// # Errors
///
/// Returns `StorageError` when the platform has no data directory
pub fn default_store_path() -> AppResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("habitbite").join("store.json"))
        .ok_or_else(|| AppError::storage("No platform data directory available for client store"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() -> AppResult<()> {
        let store = MemoryStore::new();
        store.set("token", "abc")?;
        assert_eq!(store.get("token")?.as_deref(), Some("abc"));
        store.remove("token")?;
        assert_eq!(store.get("token")?, None);
        store.remove("token")?;
        Ok(())
    }

    #[test]
    fn test_file_store_survives_reopen() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("store.json");

        let store = FileStore::open(&path)?;
        store.set("theme", "dark")?;
        store.set("token", "t-1")?;
        store.remove("token")?;
        drop(store);

        let reopened = FileStore::open(&path)?;
        assert_eq!(reopened.get("theme")?.as_deref(), Some("dark"));
        assert_eq!(reopened.get("token")?, None);
        Ok(())
    }

    #[test]
    fn test_file_store_rejects_garbage() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("store.json");
        fs::write(&path, "not json")?;
        assert!(FileStore::open(&path).is_err());
        Ok(())
    }
}
