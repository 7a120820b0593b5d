//! File-backed design library.
//!
//! DESIGN
//! ======
//! The whole library is one JSON document, an array of records, held in
//! memory for the life of the store. Every mutation rewrites the file
//! through a temp file and rename so a crash mid-write cannot leave a
//! half-written library behind.
//!
//! ERROR HANDLING
//! ==============
//! Loads never fail: a missing file starts an empty library, unreadable or
//! corrupt content logs a warning and starts empty, and individual records
//! that do not parse are skipped. Saves report their error to the caller,
//! but the in-memory list keeps the mutation either way; the next
//! successful save writes everything out.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use scene::model::DesignData;
use serde_json::Value;
use tracing::{debug, warn};

use crate::record::{self, DesignRecord};

/// Error returned by store mutations when the library cannot be persisted.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The record list could not be serialized to JSON.
    #[error("failed to serialize design library: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The library file or its temp sibling could not be written.
    #[error("failed to write design library {}: {source}", path.display())]
    Io {
        /// Path of the file involved in the failed write.
        path: PathBuf,
        /// Underlying filesystem error.
        source: io::Error,
    },
}

/// In-memory design library backed by one JSON file.
#[derive(Debug)]
pub struct DesignStore {
    path: PathBuf,
    records: Vec<DesignRecord>,
}

impl DesignStore {
    /// Open the library at `path`, reading whatever records survive
    /// parsing. Never fails; see the module notes on error handling.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = read_records(&path);
        debug!(path = %path.display(), count = records.len(), "design library loaded");
        Self { path, records }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in stored order.
    #[must_use]
    pub fn records(&self) -> &[DesignRecord] {
        &self.records
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DesignRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records sorted most recently updated first, the order the library
    /// view lists them in.
    #[must_use]
    pub fn recent_first(&self) -> Vec<&DesignRecord> {
        let mut records: Vec<&DesignRecord> = self.records.iter().collect();
        records.sort_by_key(|record| std::cmp::Reverse(record.updated_at_time()));
        records
    }

    // ── Mutations ───────────────────────────────────────────────

    /// Create a new record with default data and persist the library.
    /// Returns the new record.
    ///
    /// # Errors
    ///
    /// Returns a write error if persisting the library fails; the record
    /// stays in the in-memory list either way.
    pub fn create(&mut self, name: &str) -> Result<DesignRecord, StoreError> {
        let record = DesignRecord::new(name);
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Fetch a record for editing. Opening an id that does not exist yet
    /// creates and persists a default record under that id, so a link to a
    /// brand-new design always resolves.
    ///
    /// # Errors
    ///
    /// Returns a write error if an unknown id forces a persist and it fails.
    pub fn open(&mut self, id: &str) -> Result<DesignRecord, StoreError> {
        if let Some(record) = self.get(id) {
            return Ok(record.clone());
        }
        let record = DesignRecord::with_id(id.to_string(), record::DEFAULT_NAME);
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Save a snapshot and name into a record, stamping `updatedAt`.
    /// Creation time and thumbnail are preserved. Saving to an unknown id
    /// creates the record, so an editor can always save what it has open.
    ///
    /// # Errors
    ///
    /// Returns a write error if persisting the library fails; the update
    /// stays in the in-memory list either way.
    pub fn save_data(&mut self, id: &str, name: &str, data: &DesignData) -> Result<(), StoreError> {
        if let Some(record) = self.records.iter_mut().find(|record| record.id == id) {
            record.name = name.to_string();
            record.data = data.clone();
            record.touch();
        } else {
            let mut record = DesignRecord::with_id(id.to_string(), name);
            record.data = data.clone();
            self.records.push(record);
        }
        self.persist()
    }

    /// Rename a record, stamping `updatedAt`. Unknown ids are a no-op;
    /// returns whether the record existed.
    ///
    /// # Errors
    ///
    /// Returns a write error if persisting the library fails.
    pub fn rename(&mut self, id: &str, name: &str) -> Result<bool, StoreError> {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return Ok(false);
        };
        record.name = name.to_string();
        record.touch();
        self.persist()?;
        Ok(true)
    }

    /// Duplicate a record under a fresh id with a `" (Copy)"` name suffix.
    /// Returns the new record, or `None` for unknown ids.
    ///
    /// # Errors
    ///
    /// Returns a write error if persisting the library fails.
    pub fn duplicate(&mut self, id: &str) -> Result<Option<DesignRecord>, StoreError> {
        let Some(record) = self.get(id) else {
            return Ok(None);
        };
        let copy = record.duplicated();
        self.records.push(copy.clone());
        self.persist()?;
        Ok(Some(copy))
    }

    /// Delete a record. Unknown ids are a no-op; returns whether it
    /// existed.
    ///
    /// # Errors
    ///
    /// Returns a write error if persisting the library fails.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Rewrite the backing file from the in-memory list.
    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty());
        if let Some(parent) = parent {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        // Atomic write: temp file then rename.
        let temp = self.path.with_extension("json.tmp");
        fs::write(&temp, json).map_err(|source| StoreError::Io {
            path: temp.clone(),
            source,
        })?;
        fs::rename(&temp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Read and individually parse records, skipping what does not parse.
fn read_records(path: &Path) -> Vec<DesignRecord> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(error = %e, path = %path.display(), "failed to read design library; starting empty");
            return Vec::new();
        }
    };
    let values: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(error = %e, path = %path.display(), "design library is not a JSON array; starting empty");
            return Vec::new();
        }
    };
    let mut records = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<DesignRecord>(value) {
            Ok(record) => records.push(record),
            Err(e) => warn!(error = %e, path = %path.display(), "skipping malformed design record"),
        }
    }
    records
}
