//! Directory prefix derivation.
//!
//! Directories are never stored: they are the `/`-terminated prefixes of the
//! entry paths, recomputed from the snapshot on every engine call.

use crate::domain::{Entry, SEPARATOR};
use std::collections::BTreeSet;

/// The set of navigable directories implied by an entry snapshot.
#[derive(Debug, Clone, Default)]
pub struct DirectoryPrefixes<'a> {
    prefixes: BTreeSet<&'a str>,
}

impl<'a> DirectoryPrefixes<'a> {
    /// Collects every cumulative `/`-terminated prefix of every entry path.
    ///
    /// `beep/boop/bop` contributes `beep/` and `beep/boop/`. A key that itself
    /// ends in `/` is a backend directory marker and contributes itself too.
    /// Empty paths contribute nothing.
    #[must_use]
    pub fn collect(entries: &'a [Entry]) -> Self {
        let prefixes = entries
            .iter()
            .flat_map(|entry| prefixes_of(&entry.path))
            .collect();
        Self { prefixes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, directory: &str) -> bool {
        self.prefixes.contains(directory)
    }

    /// Longest known directory that `value` starts with, or the root.
    ///
    /// ```
    /// use keynav::{engine::DirectoryPrefixes, Entry};
    ///
    /// let entries = vec![Entry::new("beep/boop/bop"), Entry::new("beep/boop-1")];
    /// let prefixes = DirectoryPrefixes::collect(&entries);
    /// assert_eq!(prefixes.longest_prefix_of("beep/boop/b"), "beep/boop/");
    /// assert_eq!(prefixes.longest_prefix_of("beep/boop"), "beep/");
    /// assert_eq!(prefixes.longest_prefix_of("my"), "");
    /// ```
    #[must_use]
    pub fn longest_prefix_of(&self, value: &str) -> &'a str {
        self.prefixes
            .iter()
            .copied()
            .filter(|prefix| value.starts_with(prefix))
            .max_by_key(|prefix| prefix.len())
            .unwrap_or("")
    }

    /// Longest known directory strictly above `directory`, or the root.
    #[must_use]
    pub fn parent_of(&self, directory: &str) -> &'a str {
        self.prefixes
            .iter()
            .copied()
            .filter(|prefix| prefix.len() < directory.len() && directory.starts_with(prefix))
            .max_by_key(|prefix| prefix.len())
            .unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.prefixes.iter().copied()
    }
}

fn prefixes_of(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices(SEPARATOR).map(move |(idx, _)| &path[..=idx])
}
