//! JSON file-based entry source.
//!
//! Reads an entry snapshot from a human-readable JSON file. The file is read
//! on every [`EntrySource::load_entries`] call so a refreshed snapshot is
//! picked up without rebuilding the source.
//!
//! # File Format
//!
//! Any of the following layouts is accepted:
//!
//! ```json
//! ["beep/boop/bop", "my-secret"]
//! ```
//!
//! ```json
//! [
//!   { "path": "beep/boop/bop", "full_path": "kv/beep/boop/bop" },
//!   { "path": "my-secret" }
//! ]
//! ```
//!
//! ```json
//! { "data": { "keys": ["beep/", "my-secret"] } }
//! ```

use crate::domain::error::{KeynavError, Result};
use crate::domain::{validate_entries, Entry};
use crate::storage::backend::EntrySource;
use crate::storage::models::SnapshotFile;
use std::path::{Path, PathBuf};

/// Entry source backed by a JSON snapshot file.
///
/// # Examples
///
/// ```no_run
/// use keynav::storage::{EntrySource, JsonEntrySource};
///
/// let source = JsonEntrySource::new("/tmp/entries.json").with_mount_point("kv");
/// let entries = source.load_entries()?;
/// # Ok::<(), keynav::KeynavError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonEntrySource {
    file_path: PathBuf,
    mount_point: Option<String>,
}

impl JsonEntrySource {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            mount_point: None,
        }
    }

    /// Qualifies entries without an explicit `full_path` by this mount.
    #[must_use]
    pub fn with_mount_point(mut self, mount_point: impl Into<String>) -> Self {
        self.mount_point = Some(mount_point.into());
        self
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Decodes a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`KeynavError::Storage`] if the JSON does not match any accepted
    /// layout and [`KeynavError::InvalidEntry`] for entries with empty paths.
    pub fn parse(contents: &str, mount_point: Option<&str>) -> Result<Vec<Entry>> {
        let snapshot: SnapshotFile = serde_json::from_str(contents)
            .map_err(|e| KeynavError::Storage(format!("failed to parse JSON: {e}")))?;

        let entries: Vec<Entry> = snapshot
            .into_records()
            .into_iter()
            .map(|record| record.into_entry(mount_point))
            .collect();

        validate_entries(&entries)?;
        Ok(entries)
    }
}

impl EntrySource for JsonEntrySource {
    fn load_entries(&self) -> Result<Vec<Entry>> {
        let _span = tracing::debug_span!("load_entries", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let entries = Self::parse(&contents, self.mount_point.as_deref())?;

        tracing::debug!(entry_count = entries.len(), "loaded entry snapshot");
        Ok(entries)
    }
}
