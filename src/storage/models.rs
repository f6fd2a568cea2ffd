//! On-disk snapshot formats.
//!
//! These types mirror the JSON shapes an entry snapshot may take. They are kept
//! separate from [`Entry`] so the file format can stay permissive while the
//! domain type stays strict.

use crate::domain::Entry;
use serde::Deserialize;

/// One entry as written in a snapshot file.
///
/// Either a bare key string or an object with an optional `full_path`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EntryRecord {
    Key(String),
    Record {
        path: String,
        #[serde(default, alias = "fullPath", alias = "fullSecretPath")]
        full_path: Option<String>,
    },
}

impl EntryRecord {
    /// Converts the record into an [`Entry`], qualifying it by `mount_point`
    /// when the record carries no explicit full path.
    #[must_use]
    pub fn into_entry(self, mount_point: Option<&str>) -> Entry {
        let (path, full_path) = match self {
            Self::Key(path) => (path, None),
            Self::Record { path, full_path } => (path, full_path),
        };

        match (full_path, mount_point) {
            (Some(full_path), _) => Entry { path, full_path },
            (None, Some(mount)) => Entry::in_mount(mount, path),
            (None, None) => Entry::new(path),
        }
    }
}

/// Backend LIST response body: `{"data": {"keys": [...]}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub data: ListData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListData {
    #[serde(default)]
    pub keys: Vec<String>,
}

/// Any accepted snapshot file layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SnapshotFile {
    Entries(Vec<EntryRecord>),
    List(ListResponse),
}

impl SnapshotFile {
    #[must_use]
    pub fn into_records(self) -> Vec<EntryRecord> {
        match self {
            Self::Entries(records) => records,
            Self::List(response) => response.data.keys.into_iter().map(EntryRecord::Key).collect(),
        }
    }
}
