//! The old-to-new class token table
//!
//! Persisted as a flat JSON object. Built once by the mapping builder and
//! read-only for the whole rewrite run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors loading or saving a rename table
#[derive(Error, Debug)]
pub enum MapError {
    #[error("Failed to read rename map {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write rename map {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid rename map JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Mapping from old class token to new class token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenameMap {
    entries: BTreeMap<String, String>,
}

impl RenameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a rename map from a JSON object of strings
    pub fn from_json_str(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a rename map from a JSON file
    pub fn load(path: &Path) -> Result<Self, MapError> {
        let contents = std::fs::read_to_string(path).map_err(|source| MapError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Pretty-printed JSON, keys sorted
    pub fn to_json_pretty(&self) -> Result<String, MapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the map as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), MapError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|source| MapError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    /// Insert an entry, replacing any previous value for `old`.
    ///
    /// Returns the replaced value.
    pub fn insert(&mut self, old: impl Into<String>, new: impl Into<String>) -> Option<String> {
        self.entries.insert(old.into(), new.into())
    }

    pub fn get(&self, old: &str) -> Option<&str> {
        self.entries.get(old).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys whose new value is itself a key.
    ///
    /// Rewriting is only idempotent when this is empty: a second run would
    /// otherwise rename the already renamed tokens again.
    pub fn chained_keys(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(old, new)| old != new && self.entries.contains_key(new.as_str()))
            .map(|(old, _)| old.as_str())
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RenameMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
