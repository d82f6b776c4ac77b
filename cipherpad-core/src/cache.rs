use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{PadError, PadResult};
use crate::pad::Pad;

/// A name-keyed store of pad snapshots.
///
/// Every entry is an independent copy taken at save time; mutating the
/// engine's active pad after a save never changes a cached entry, and using
/// a loaded pad never changes the entry it came from.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PadCache {
    pads: HashMap<String, Pad>,
}

impl PadCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a snapshot of `pad` under `name`, replacing any previous entry
    /// with the same name.
    pub fn insert(&mut self, name: impl Into<String>, pad: &Pad) {
        self.pads.insert(name.into(), pad.clone());
    }

    /// Looks up the entry saved under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Pad> {
        self.pads.get(name)
    }

    /// Removes the entry saved under `name`, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Pad> {
        self.pads.remove(name)
    }

    /// Number of entries in the cache.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pads.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }

    /// The names of all cached pads, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pads.keys().map(String::as_str)
    }

    /// Loads a cache previously written by [`PadCache::save`]. A missing
    /// file is not an error; it yields an empty cache.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::NotFound`] if the file exists but cannot be read,
    /// or [`PadError::CacheFormat`] if its contents are not a valid cache.
    pub fn load(path: &Path) -> PadResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| PadError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Saves the cache as pretty-printed JSON at `path`, replacing any
    /// previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::WriteError`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> PadResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| PadError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}
