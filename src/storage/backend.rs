//! Entry source abstraction.
//!
//! This module defines the [`EntrySource`] trait that abstracts over where an
//! entry snapshot comes from. The navigation engine never fetches entries; the
//! caller loads a snapshot through a source and hands it to the session.

use crate::domain::error::Result;
use crate::domain::{validate_entries, Entry};

/// Provider of entry snapshots for one namespace/mount.
///
/// Implementations return entries in discovery order and must not return
/// entries with an empty path.
///
/// # Implementations
///
/// - [`JsonEntrySource`](crate::storage::JsonEntrySource): reads a JSON file
/// - `Vec<Entry>`: a fixed in-memory snapshot
///
/// # Examples
///
/// ```
/// use keynav::storage::EntrySource;
/// use keynav::Entry;
///
/// let source = vec![Entry::new("beep/boop"), Entry::new("my")];
/// let entries = source.load_entries()?;
/// assert_eq!(entries.len(), 2);
/// # Ok::<(), keynav::KeynavError>(())
/// ```
pub trait EntrySource {
    /// Loads the current snapshot of entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read, cannot be decoded, or
    /// contains an invalid entry.
    fn load_entries(&self) -> Result<Vec<Entry>>;
}

impl EntrySource for Vec<Entry> {
    fn load_entries(&self) -> Result<Vec<Entry>> {
        validate_entries(self)?;
        Ok(self.clone())
    }
}
