//! Path filter navigation engine.
//!
//! Maps the state of a filter field over a hierarchical key listing to a
//! [`NavigationDecision`]: which directory to show and which residual filter to
//! apply inside it.
//!
//! Every function here is pure. The caller owns the current directory and the
//! field contents and passes both in on each call; directories are derived from
//! the entry snapshot on demand (see [`DirectoryPrefixes`]).
//!
//! # Example
//!
//! ```rust
//! use keynav::engine::{dispatch, InputEvent};
//! use keynav::Entry;
//!
//! let entries = vec![Entry::new("beep/boop/bop"), Entry::new("beep/boop-1")];
//!
//! let decision = dispatch(&entries, "", &InputEvent::Edit("beep/".into()));
//! assert_eq!(decision.target_directory, "beep/");
//! assert_eq!(decision.residual_filter, None);
//! assert!(decision.is_directory_change);
//! ```

pub mod event;
pub mod prefixes;

pub use event::InputEvent;
pub use prefixes::DirectoryPrefixes;

use crate::domain::{Entry, NavigationDecision, SEPARATOR};

/// Resolves an edited field value to a directory and residual filter.
///
/// The target is the longest known directory the value starts with; whatever
/// follows it becomes the filter. A value that is exactly a directory commits
/// to that directory with no filter, which is how a trailing `/` descends.
#[must_use]
pub fn resolve(
    entries: &[Entry],
    current_directory: &str,
    typed_value: &str,
) -> NavigationDecision {
    let _span = tracing::debug_span!(
        "resolve",
        entries = entries.len(),
        current_directory = %current_directory,
        typed_len = typed_value.len()
    )
    .entered();

    if typed_value.is_empty() {
        return NavigationDecision::new("", None, !current_directory.is_empty());
    }

    let prefixes = DirectoryPrefixes::collect(entries);
    let target = prefixes.longest_prefix_of(typed_value);
    let residual = &typed_value[target.len()..];

    tracing::trace!(directory = %target, residual = %residual, "resolved typed value");

    NavigationDecision::new(
        target,
        Some(residual.to_string()),
        target != current_directory,
    )
}

/// Handles a backspace press, given the field value before the deletion.
///
/// Erasing the trailing `/` of the directory being shown ascends to its
/// parent and leaves the erased directory's name as the filter. Any other
/// deletion is an ordinary edit of the remaining value.
#[must_use]
pub fn on_backspace(
    entries: &[Entry],
    current_directory: &str,
    typed_value_before_delete: &str,
) -> NavigationDecision {
    let mut new_value = typed_value_before_delete.to_string();
    let removed = new_value.pop();

    if removed != Some(SEPARATOR) || typed_value_before_delete != current_directory {
        return resolve(entries, current_directory, &new_value);
    }

    let prefixes = DirectoryPrefixes::collect(entries);
    let parent = prefixes.parent_of(current_directory);
    let segment = &current_directory[parent.len()..];
    let segment = segment.strip_suffix(SEPARATOR).unwrap_or(segment);

    tracing::debug!(
        from = %current_directory,
        to = %parent,
        filter = %segment,
        "ascending past directory boundary"
    );

    NavigationDecision::new(parent, Some(segment.to_string()), true)
}

/// Handles an escape press: drop the filter, stay in the directory.
#[must_use]
pub fn on_escape(current_directory: &str) -> NavigationDecision {
    tracing::trace!(current_directory = %current_directory, "clearing filter");
    NavigationDecision::new(current_directory, None, false)
}

/// Routes an [`InputEvent`] to the matching engine operation.
#[must_use]
pub fn dispatch(
    entries: &[Entry],
    current_directory: &str,
    event: &InputEvent,
) -> NavigationDecision {
    match event {
        InputEvent::Edit(value) => resolve(entries, current_directory, value),
        InputEvent::Backspace(previous) => on_backspace(entries, current_directory, previous),
        InputEvent::Escape => on_escape(current_directory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fixture() -> Vec<Entry> {
        ["my-secret", "my", "beep/boop/bop", "beep/boop-1"]
            .into_iter()
            .map(Entry::new)
            .collect()
    }

    fn decision(target: &str, residual: Option<&str>, change: bool) -> NavigationDecision {
        NavigationDecision::new(target, residual.map(String::from), change)
    }

    #[test]
    fn empty_value_returns_to_root() {
        let entries = fixture();
        assert_eq!(resolve(&entries, "beep/", ""), decision("", None, true));
        assert_eq!(resolve(&entries, "", ""), decision("", None, false));
    }

    #[test]
    fn trailing_slash_descends() {
        let entries = fixture();
        assert_eq!(resolve(&entries, "", "beep/"), decision("beep/", None, true));
        assert_eq!(
            resolve(&entries, "beep/", "beep/boop/"),
            decision("beep/boop/", None, true)
        );
    }

    #[test]
    fn residual_after_longest_directory() {
        let entries = fixture();
        assert_eq!(
            resolve(&entries, "", "beep/boop-"),
            decision("beep/", Some("boop-"), true)
        );
        assert_eq!(
            resolve(&entries, "beep/", "beep/boop-"),
            decision("beep/", Some("boop-"), false)
        );
        assert_eq!(
            resolve(&entries, "beep/boop/", "beep/boop/b"),
            decision("beep/boop/", Some("b"), false)
        );
    }

    #[test]
    fn value_without_separator_filters_root() {
        let entries = fixture();
        assert_eq!(resolve(&entries, "", "my"), decision("", Some("my"), false));
        assert_eq!(resolve(&entries, "beep/", "my"), decision("", Some("my"), true));
    }

    #[test]
    fn unknown_directory_stays_in_filter() {
        let entries = fixture();
        assert_eq!(
            resolve(&entries, "", "nope/x"),
            decision("", Some("nope/x"), false)
        );
    }

    #[test]
    fn no_entries_means_root_with_full_filter() {
        assert_eq!(
            resolve(&[], "", "beep/boop/"),
            decision("", Some("beep/boop/"), false)
        );
    }

    #[test]
    fn backspace_inside_directory_trims_filter() {
        let entries = fixture();
        assert_eq!(
            on_backspace(&entries, "beep/", "beep/boop-"),
            decision("beep/", Some("boop"), false)
        );
    }

    #[test]
    fn backspace_on_directory_boundary_ascends() {
        let entries = fixture();
        assert_eq!(
            on_backspace(&entries, "beep/boop/", "beep/boop/"),
            decision("beep/", Some("boop"), true)
        );
        assert_eq!(
            on_backspace(&entries, "beep/", "beep/"),
            decision("", Some("beep"), true)
        );
    }

    #[test]
    fn backspace_on_slash_outside_shown_directory_is_an_edit() {
        let entries = fixture();
        assert_eq!(
            on_backspace(&entries, "beep/", "beep/x/"),
            decision("beep/", Some("x"), false)
        );
        assert_eq!(on_backspace(&entries, "", "beep/"), decision("", Some("beep"), false));
    }

    #[test]
    fn backspace_on_empty_field_goes_to_root() {
        let entries = fixture();
        assert_eq!(on_backspace(&entries, "", ""), decision("", None, false));
    }

    #[test]
    fn escape_keeps_directory_and_clears_filter() {
        let first = on_escape("beep/");
        assert_eq!(first, decision("beep/", None, false));
        assert_eq!(on_escape("beep/"), first);
        assert_eq!(on_escape(""), decision("", None, false));
    }

    #[test]
    fn dispatch_forwards_each_event() {
        let entries = fixture();
        assert_eq!(
            dispatch(&entries, "", &InputEvent::Edit("beep/".into())),
            resolve(&entries, "", "beep/")
        );
        assert_eq!(
            dispatch(&entries, "beep/boop/", &InputEvent::Backspace("beep/boop/".into())),
            on_backspace(&entries, "beep/boop/", "beep/boop/")
        );
        assert_eq!(dispatch(&entries, "beep/", &InputEvent::Escape), on_escape("beep/"));
    }

    fn arb_entries() -> impl Strategy<Value = Vec<Entry>> {
        prop::collection::vec("[ab/]{1,6}", 0..6)
            .prop_map(|paths| paths.into_iter().map(Entry::new).collect())
    }

    proptest! {
        #[test]
        fn target_is_prefix_of_typed_value(
            entries in arb_entries(),
            current in prop::sample::select(vec!["", "a/", "b/a/"]),
            typed in "[ab/]{0,8}",
        ) {
            let decision = resolve(&entries, current, &typed);
            prop_assert!(typed.starts_with(&decision.target_directory));
        }

        #[test]
        fn recombined_value_resolves_to_same_target(
            entries in arb_entries(),
            current in prop::sample::select(vec!["", "a/", "b/a/"]),
            typed in "[ab/]{0,8}",
        ) {
            let first = resolve(&entries, current, &typed);
            let second = resolve(&entries, current, &first.filter_value());
            prop_assert_eq!(second.target_directory, first.target_directory);
        }
    }
}
