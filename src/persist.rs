//! History persistence collaborator.
//!
//! The engine treats durable storage as an opaque capability: a
//! [`HistoryStore`] saves and loads a [`HistoryRecord`] and remembers its
//! last failure for deferred inspection. [`JsonFileStore`] is the provided
//! implementation, a serde_json file under the platform data directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, StoreError};
use crate::history::SynchronizedHistory;
use crate::stack::Stack;

/// Serialized form of a synchronized history: two parallel sequences,
/// oldest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub snapshots: Vec<Vec<f64>>,
    pub inputs: Vec<String>,
}

impl HistoryRecord {
    /// Capture a history's current entries.
    pub fn from_history(history: &SynchronizedHistory) -> Self {
        Self {
            snapshots: history
                .snapshots()
                .iter()
                .map(|stack| stack.as_slice().to_vec())
                .collect(),
            inputs: history.inputs().to_vec(),
        }
    }

    /// Rebuild a synchronized history from this record.
    pub fn into_history(self) -> Result<SynchronizedHistory, CalcError> {
        let snapshots = self.snapshots.into_iter().map(Stack::from_values).collect();
        SynchronizedHistory::restore(snapshots, self.inputs)
    }
}

/// Opaque save/load capability consumed by the engine.
///
/// Implementations remember their most recent failure so hosts can display
/// it later without threading every error through immediately.
pub trait HistoryStore {
    /// Save a record, to `path` or the store's default location.
    fn save(&mut self, record: &HistoryRecord, path: Option<&Path>) -> Result<bool, StoreError>;

    /// Load a record from `path` or the default location.
    ///
    /// A missing file is not an error: it yields `Ok(None)`.
    fn load(&mut self, path: Option<&Path>) -> Result<Option<HistoryRecord>, StoreError>;

    /// Whether a deferred error is pending.
    fn has_error(&self) -> bool;

    /// The pending error text, if any.
    fn error(&self) -> Option<&str>;

    /// Discard the pending error.
    fn clear_error(&mut self);
}

/// The default history file location.
pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("rpncalc").join("history.json"))
}

/// File-backed JSON history store.
pub struct JsonFileStore {
    default_path: Option<PathBuf>,
    last_error: Option<String>,
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFileStore {
    /// Create a store using the platform default path.
    pub fn new() -> Self {
        Self {
            default_path: default_history_path(),
            last_error: None,
        }
    }

    /// Create a store with an explicit default path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            default_path: Some(path),
            last_error: None,
        }
    }

    fn resolve_path(&self, path: Option<&Path>) -> Result<PathBuf, StoreError> {
        path.map(Path::to_path_buf)
            .or_else(|| self.default_path.clone())
            .ok_or(StoreError::NoPath)
    }

    fn try_save(&self, record: &HistoryRecord, path: Option<&Path>) -> Result<bool, StoreError> {
        let path = self.resolve_path(path)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("saved {} history entries to {}", record.inputs.len(), path.display());
        Ok(true)
    }

    fn try_load(&self, path: Option<&Path>) -> Result<Option<HistoryRecord>, StoreError> {
        let path = self.resolve_path(path)?;
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let record: HistoryRecord = serde_json::from_str(&json)?;
        debug!("loaded {} history entries from {}", record.inputs.len(), path.display());
        Ok(Some(record))
    }
}

impl HistoryStore for JsonFileStore {
    fn save(&mut self, record: &HistoryRecord, path: Option<&Path>) -> Result<bool, StoreError> {
        self.try_save(record, path).inspect_err(|err| {
            warn!("history save failed: {err}");
            self.last_error = Some(err.to_string());
        })
    }

    fn load(&mut self, path: Option<&Path>) -> Result<Option<HistoryRecord>, StoreError> {
        self.try_load(path).inspect_err(|err| {
            warn!("history load failed: {err}");
            self.last_error = Some(err.to_string());
        })
    }

    fn has_error(&self) -> bool {
        self.last_error.is_some()
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn clear_error(&mut self) {
        self.last_error = None;
    }
}
