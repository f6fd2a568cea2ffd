//! Caller-side filter session state.
//!
//! This module defines [`FilterSession`], the single source of truth for the
//! state the navigation engine expects its caller to own: the entry snapshot,
//! the directory being shown, the filter field contents and the active page
//! filter. The engine reads this state on every event and never keeps a copy.
//!
//! # State Components
//!
//! - **Entries**: snapshot of the mount's keys, in discovery order
//! - **Current Directory**: the listing being shown (empty = root)
//! - **Typed Value**: full contents of the filter field
//! - **Page Filter**: residual filter applied inside the current directory
//!
//! # Example
//!
//! ```rust
//! use keynav::app::FilterSession;
//! use keynav::{engine, Entry};
//!
//! let entries = vec![Entry::new("beep/boop/bop"), Entry::new("my")];
//! let mut session = FilterSession::new("kv", entries)?;
//!
//! let decision = engine::resolve(session.entries(), session.current_directory(), "beep/");
//! session.apply(&decision);
//! assert_eq!(session.current_directory(), "beep/");
//! # Ok::<(), keynav::KeynavError>(())
//! ```

use crate::app::actions::Action;
use crate::domain::error::Result;
use crate::domain::{validate_entries, Entry, NavigationDecision, SEPARATOR};
use serde::Serialize;
use std::collections::HashSet;

/// One row of the listing shown for the current directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Name relative to the current directory; subdirectories keep their `/`.
    pub name: String,

    /// Path relative to the namespace root.
    pub path: String,

    /// Whether selecting the row navigates into a subdirectory.
    pub is_directory: bool,
}

/// State owned by the host of a filter input.
#[derive(Debug, Clone)]
pub struct FilterSession {
    mount_point: String,
    entries: Vec<Entry>,
    current_directory: String,
    typed_value: String,
    page_filter: Option<String>,
}

impl FilterSession {
    /// Creates a session at the namespace root with an empty filter field.
    ///
    /// # Errors
    ///
    /// Returns [`KeynavError::InvalidEntry`](crate::KeynavError::InvalidEntry)
    /// if any entry has an empty path.
    pub fn new(mount_point: impl Into<String>, entries: Vec<Entry>) -> Result<Self> {
        validate_entries(&entries)?;
        Ok(Self {
            mount_point: mount_point.into(),
            entries,
            current_directory: String::new(),
            typed_value: String::new(),
            page_filter: None,
        })
    }

    #[must_use]
    pub fn mount_point(&self) -> &str {
        &self.mount_point
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn current_directory(&self) -> &str {
        &self.current_directory
    }

    #[must_use]
    pub fn typed_value(&self) -> &str {
        &self.typed_value
    }

    #[must_use]
    pub fn page_filter(&self) -> Option<&str> {
        self.page_filter.as_deref()
    }

    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.page_filter.is_some()
    }

    /// Replaces the field contents without navigating.
    ///
    /// Used by the handler before dispatching an edit; the decision applied
    /// afterwards brings directory and filter in line with the new value.
    pub fn set_typed_value(&mut self, value: impl Into<String>) {
        self.typed_value = value.into();
    }

    /// Swaps in a fresh entry snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error and keeps the old snapshot if the new one contains an
    /// entry with an empty path.
    pub fn replace_entries(&mut self, entries: Vec<Entry>) -> Result<()> {
        validate_entries(&entries)?;
        tracing::debug!(
            old_count = self.entries.len(),
            new_count = entries.len(),
            "replacing entry snapshot"
        );
        self.entries = entries;
        Ok(())
    }

    /// Commits a decision and returns the router action it requires.
    pub fn apply(&mut self, decision: &NavigationDecision) -> Action {
        let action = Action::from_decision(&self.mount_point, decision);

        if decision.is_directory_change {
            tracing::debug!(
                from = %self.current_directory,
                to = %decision.target_directory,
                "changing directory"
            );
        }

        self.current_directory.clone_from(&decision.target_directory);
        self.page_filter.clone_from(&decision.residual_filter);
        self.typed_value = decision.filter_value();

        action
    }

    /// Computes the listing for the current directory under the page filter.
    ///
    /// Rows are the immediate children of the current directory: leaf keys and
    /// subdirectories, each listed once in discovery order. When a page filter
    /// is set only rows whose name contains it are kept.
    #[must_use]
    pub fn visible_items(&self) -> Vec<ListItem> {
        let _span = tracing::debug_span!(
            "visible_items",
            total_entries = self.entries.len(),
            directory = %self.current_directory,
            page_filter = ?self.page_filter
        )
        .entered();

        let mut seen = HashSet::new();
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .filter_map(|entry| entry.child_of(&self.current_directory))
            .filter(|name| seen.insert(*name))
            .filter(|name| {
                self.page_filter
                    .as_deref()
                    .map_or(true, |filter| name.contains(filter))
            })
            .map(|name| ListItem {
                name: name.to_string(),
                path: format!("{}{name}", self.current_directory),
                is_directory: name.ends_with(SEPARATOR),
            })
            .collect();

        tracing::trace!(visible = items.len(), "listing computed");
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::Route;

    fn session() -> FilterSession {
        let entries = ["my-secret", "my", "beep/boop/bop", "beep/boop-1"]
            .into_iter()
            .map(Entry::new)
            .collect();
        FilterSession::new("kv", entries).unwrap()
    }

    fn names(items: &[ListItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn new_session_starts_at_root() {
        let session = session();
        assert_eq!(session.current_directory(), "");
        assert_eq!(session.typed_value(), "");
        assert!(!session.is_filtered());
    }

    #[test]
    fn rejects_empty_entry_paths() {
        assert!(FilterSession::new("kv", vec![Entry::new("")]).is_err());

        let mut session = session();
        assert!(session.replace_entries(vec![Entry::new("")]).is_err());
        assert_eq!(session.entries().len(), 4);
    }

    #[test]
    fn apply_commits_decision() {
        let mut session = session();
        let action = session.apply(&NavigationDecision::new("beep/", Some("boop".into()), true));

        assert_eq!(
            action,
            Action::TransitionTo(Route {
                name: "kv.list-directory".to_string(),
                directory: Some("beep/".to_string()),
                page_filter: Some("boop".to_string()),
            })
        );
        assert_eq!(session.current_directory(), "beep/");
        assert_eq!(session.page_filter(), Some("boop"));
        assert_eq!(session.typed_value(), "beep/boop");
    }

    #[test]
    fn root_listing_groups_subdirectories() {
        let session = session();
        let items = session.visible_items();

        assert_eq!(names(&items), vec!["my-secret", "my", "beep/"]);
        assert!(items[2].is_directory);
        assert_eq!(items[2].path, "beep/");
    }

    #[test]
    fn listing_applies_page_filter_within_directory() {
        let mut session = session();
        session.apply(&NavigationDecision::new("beep/", Some("-".into()), true));

        let items = session.visible_items();
        assert_eq!(names(&items), vec!["boop-1"]);
        assert_eq!(items[0].path, "beep/boop-1");
        assert!(!items[0].is_directory);
    }
}
