// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Storage port for preference blobs and the JSON service on top of it.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::prefs::MazePrefs;

/// Byte-level storage keyed by logical name.
pub trait PrefsStore {
    /// Reads the blob for `key`; [`PrefsError::Missing`] when absent.
    fn read(&self, key: &str) -> Result<Vec<u8>, PrefsError>;
    /// Replaces the blob for `key`.
    fn write(&self, key: &str, data: &[u8]) -> Result<(), PrefsError>;
}

/// Failures from a [`PrefsStore`] or the JSON layer.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// Nothing stored under the key.
    #[error("no stored preferences")]
    Missing,
    /// Backing storage failed.
    #[error("prefs io error: {0}")]
    Io(#[from] std::io::Error),
    /// Stored bytes are not valid prefs JSON.
    #[error("prefs json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The store cannot be used at all (no config directory, etc.).
    #[error("prefs store unavailable: {0}")]
    Unavailable(String),
}

/// In-memory store for tests and `--reset-prefs` style ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefsStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Vec<u8>, PrefsError> {
        self.blobs
            .borrow()
            .get(key)
            .cloned()
            .ok_or(PrefsError::Missing)
    }

    fn write(&self, key: &str, data: &[u8]) -> Result<(), PrefsError> {
        self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

/// Serialises [`MazePrefs`] as pretty JSON into a [`PrefsStore`].
#[derive(Debug)]
pub struct PrefsService<S> {
    store: S,
    key: String,
}

impl<S> PrefsService<S> {
    /// Key used unless overridden with [`PrefsService::with_key`].
    pub const DEFAULT_KEY: &'static str = "playmz_prefs";

    /// Service over `store` using [`PrefsService::DEFAULT_KEY`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: Self::DEFAULT_KEY.to_owned(),
        }
    }

    /// Same store, different blob key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Blob key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrows the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: PrefsStore> PrefsService<S> {
    /// Loads stored prefs; `Ok(None)` when nothing (or an empty blob) is stored.
    pub fn load(&self) -> Result<Option<MazePrefs>, PrefsError> {
        match self.store.read(&self.key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(PrefsError::Missing) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Persists `prefs`.
    pub fn save(&self, prefs: &MazePrefs) -> Result<(), PrefsError> {
        let data = serde_json::to_vec_pretty(prefs)?;
        self.store.write(&self.key, &data)
    }

    /// Overwrites the stored prefs with defaults and returns them.
    pub fn reset(&self) -> Result<MazePrefs, PrefsError> {
        let prefs = MazePrefs::default();
        self.save(&prefs)?;
        Ok(prefs)
    }
}
