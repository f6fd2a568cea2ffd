//! Entry domain model.
//!
//! An [`Entry`] is one leaf key in a hierarchical namespace, identified by a
//! `/`-delimited path relative to the namespace root.

use crate::domain::error::{KeynavError, Result};
use serde::{Deserialize, Serialize};

/// Hierarchy separator used in entry paths.
pub const SEPARATOR: char = '/';

/// A key in the namespace listing.
///
/// - `path`: key relative to the namespace root, e.g. `beep/boop/bop`
/// - `full_path`: fully-qualified identifier, usually prefixed by the mount
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub path: String,
    pub full_path: String,
}

impl Entry {
    /// Creates an entry whose `full_path` equals its `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keynav::Entry;
    ///
    /// let entry = Entry::new("beep/boop");
    /// assert_eq!(entry.full_path, "beep/boop");
    /// ```
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            full_path: path.clone(),
            path,
        }
    }

    /// Creates an entry qualified by a mount point.
    ///
    /// ```
    /// use keynav::Entry;
    ///
    /// let entry = Entry::in_mount("secret", "beep/boop");
    /// assert_eq!(entry.path, "beep/boop");
    /// assert_eq!(entry.full_path, "secret/beep/boop");
    /// ```
    #[must_use]
    pub fn in_mount(mount_point: &str, path: impl Into<String>) -> Self {
        let path = path.into();
        let mount = mount_point.trim_end_matches(SEPARATOR);
        let full_path = if mount.is_empty() {
            path.clone()
        } else {
            format!("{mount}{SEPARATOR}{path}")
        };
        Self { path, full_path }
    }

    /// Returns `true` if the key is a backend directory marker (ends in `/`).
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.path.ends_with(SEPARATOR)
    }

    /// Name of the entry relative to `directory`, if the entry lives under it.
    ///
    /// Returns the first path segment below `directory`, keeping its trailing
    /// separator when the entry is nested deeper (the segment names a
    /// subdirectory).
    ///
    /// ```
    /// use keynav::Entry;
    ///
    /// let entry = Entry::new("beep/boop/bop");
    /// assert_eq!(entry.child_of("beep/"), Some("boop/"));
    /// assert_eq!(entry.child_of("beep/boop/"), Some("bop"));
    /// assert_eq!(entry.child_of("my/"), None);
    /// ```
    #[must_use]
    pub fn child_of(&self, directory: &str) -> Option<&str> {
        let rest = self.path.strip_prefix(directory)?;
        if rest.is_empty() {
            return None;
        }
        match rest.find(SEPARATOR) {
            Some(idx) => Some(&rest[..=idx]),
            None => Some(rest),
        }
    }
}

/// Rejects snapshots containing entries with an empty path.
///
/// The engine tolerates such entries (they contribute no prefixes), but callers
/// are expected to filter them out before building a session.
///
/// # Errors
///
/// Returns [`KeynavError::InvalidEntry`] for the first offending entry.
pub fn validate_entries(entries: &[Entry]) -> Result<()> {
    if let Some(index) = entries.iter().position(|e| e.path.is_empty()) {
        return Err(KeynavError::InvalidEntry {
            index,
            reason: "path is empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_mount_trims_trailing_separator() {
        let entry = Entry::in_mount("kv/", "my");
        assert_eq!(entry.full_path, "kv/my");

        let entry = Entry::in_mount("", "my");
        assert_eq!(entry.full_path, "my");
    }

    #[test]
    fn child_of_root_and_directory_markers() {
        assert_eq!(Entry::new("my-secret").child_of(""), Some("my-secret"));
        assert_eq!(Entry::new("beep/").child_of(""), Some("beep/"));
        assert_eq!(Entry::new("beep/").child_of("beep/"), None);
        assert!(Entry::new("beep/").is_directory());
        assert!(!Entry::new("beep/boop").is_directory());
    }

    #[test]
    fn validate_entries_reports_first_empty_path() {
        let entries = vec![Entry::new("a"), Entry::new(""), Entry::new("")];
        match validate_entries(&entries) {
            Err(KeynavError::InvalidEntry { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(validate_entries(&[Entry::new("a/b")]).is_ok());
    }
}
