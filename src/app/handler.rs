//! Event handling and navigation coordination.
//!
//! This module translates keystroke-level [`Event`]s into engine
//! [`InputEvent`]s, runs the engine against the session state, commits the
//! resulting decision and returns the router actions the host must execute.
//!
//! # Architecture
//!
//! ```text
//! Keystroke → Event → handle_event → engine::dispatch → NavigationDecision
//!                          ↓                                   ↓
//!                    FilterSession  ←──────── apply ───────────┘
//!                          ↓
//!                   Vec<Action> (route transition / page filter update)
//! ```
//!
//! # Example
//!
//! ```rust
//! use keynav::app::{handle_event, Event, FilterSession};
//! use keynav::Entry;
//!
//! let mut session = FilterSession::new("kv", vec![Entry::new("beep/boop")])?;
//! for c in "beep/".chars() {
//!     handle_event(&mut session, &Event::Char(c))?;
//! }
//! assert_eq!(session.current_directory(), "beep/");
//! # Ok::<(), keynav::KeynavError>(())
//! ```

use crate::app::{Action, FilterSession};
use crate::domain::error::Result;
use crate::domain::Entry;
use crate::engine::{self, InputEvent};

/// Input the host forwards from its filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A character was typed at the end of the field.
    Char(char),
    /// Text was pasted at the end of the field.
    Paste(String),
    /// The field contents were replaced wholesale (selection edits, autofill).
    SetValue(String),
    /// Backspace was pressed.
    Backspace,
    /// Escape was pressed.
    Escape,
    /// A fresh entry snapshot arrived from the entry source.
    EntriesLoaded(Vec<Entry>),
}

/// Processes an event, updates the session and returns actions to execute.
///
/// The boolean is `true` when the listing needs to be redrawn.
///
/// # Errors
///
/// Returns an error if an `EntriesLoaded` snapshot contains an invalid entry;
/// the session keeps its previous snapshot in that case.
pub fn handle_event(session: &mut FilterSession, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let input = match event {
        Event::Char(c) => {
            let mut value = session.typed_value().to_string();
            value.push(*c);
            InputEvent::Edit(value)
        }
        Event::Paste(text) => {
            if text.is_empty() {
                return Ok((false, vec![]));
            }
            InputEvent::Edit(format!("{}{text}", session.typed_value()))
        }
        Event::SetValue(value) => {
            if value == session.typed_value() {
                return Ok((false, vec![]));
            }
            InputEvent::Edit(value.clone())
        }
        Event::Backspace => {
            if session.typed_value().is_empty() {
                tracing::trace!("backspace on empty field");
                return Ok((false, vec![]));
            }
            InputEvent::Backspace(session.typed_value().to_string())
        }
        Event::Escape => {
            if !session.is_filtered() && session.typed_value() == session.current_directory() {
                tracing::trace!("nothing to clear");
                return Ok((false, vec![]));
            }
            InputEvent::Escape
        }
        Event::EntriesLoaded(entries) => {
            session.replace_entries(entries.clone())?;
            InputEvent::Edit(session.typed_value().to_string())
        }
    };

    if let InputEvent::Edit(value) = &input {
        session.set_typed_value(value.clone());
    }

    let decision = engine::dispatch(session.entries(), session.current_directory(), &input);

    tracing::debug!(
        target_directory = %decision.target_directory,
        residual_filter = ?decision.residual_filter,
        is_directory_change = decision.is_directory_change,
        "navigation decided"
    );

    let unchanged = !decision.is_directory_change
        && decision.residual_filter.as_deref() == session.page_filter();
    if unchanged && matches!(event, Event::EntriesLoaded(_)) {
        tracing::debug!("snapshot refresh left navigation unchanged");
        session.apply(&decision);
        return Ok((true, vec![]));
    }

    let action = session.apply(&decision);
    Ok((true, vec![action]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Route;

    fn session() -> FilterSession {
        let entries = ["my-secret", "my", "beep/boop/bop", "beep/boop-1"]
            .into_iter()
            .map(Entry::new)
            .collect();
        FilterSession::new("kv", entries).unwrap()
    }

    fn type_str(session: &mut FilterSession, text: &str) -> Vec<Action> {
        text.chars()
            .flat_map(|c| handle_event(session, &Event::Char(c)).unwrap().1)
            .collect()
    }

    #[test]
    fn typing_a_directory_transitions_into_it() {
        let mut session = session();
        let actions = type_str(&mut session, "beep/");

        assert_eq!(
            actions.last(),
            Some(&Action::TransitionTo(Route {
                name: "kv.list-directory".to_string(),
                directory: Some("beep/".to_string()),
                page_filter: None,
            }))
        );
        assert_eq!(session.current_directory(), "beep/");
        assert_eq!(session.page_filter(), None);
    }

    #[test]
    fn typing_within_directory_updates_filter() {
        let mut session = session();
        type_str(&mut session, "beep/");
        let actions = type_str(&mut session, "boop-");

        assert_eq!(
            actions.last(),
            Some(&Action::UpdatePageFilter {
                page_filter: Some("boop-".to_string())
            })
        );
        assert_eq!(session.typed_value(), "beep/boop-");
    }

    #[test]
    fn backspace_then_escape_stays_in_directory() {
        let mut session = session();
        type_str(&mut session, "beep/boop-");

        let (_, actions) = handle_event(&mut session, &Event::Backspace).unwrap();
        assert_eq!(
            actions,
            vec![Action::UpdatePageFilter {
                page_filter: Some("boop".to_string())
            }]
        );
        assert_eq!(session.current_directory(), "beep/");

        let (_, actions) = handle_event(&mut session, &Event::Escape).unwrap();
        assert_eq!(actions, vec![Action::UpdatePageFilter { page_filter: None }]);
        assert_eq!(session.current_directory(), "beep/");
        assert_eq!(session.typed_value(), "beep/");
    }

    #[test]
    fn backspace_on_boundary_ascends_with_directory_name() {
        let mut session = session();
        type_str(&mut session, "beep/boop/");
        assert_eq!(session.current_directory(), "beep/boop/");

        let (_, actions) = handle_event(&mut session, &Event::Backspace).unwrap();
        assert_eq!(
            actions,
            vec![Action::TransitionTo(Route {
                name: "kv.list-directory".to_string(),
                directory: Some("beep/".to_string()),
                page_filter: Some("boop".to_string()),
            })]
        );
        assert_eq!(session.typed_value(), "beep/boop");
    }

    #[test]
    fn backspace_to_empty_returns_to_root_listing() {
        let mut session = session();
        type_str(&mut session, "m");

        let (_, actions) = handle_event(&mut session, &Event::Backspace).unwrap();
        assert_eq!(actions, vec![Action::UpdatePageFilter { page_filter: None }]);

        let (redraw, actions) = handle_event(&mut session, &Event::Backspace).unwrap();
        assert!(!redraw);
        assert!(actions.is_empty());
    }

    #[test]
    fn escape_without_filter_is_noop() {
        let mut session = session();
        type_str(&mut session, "beep/");

        let (redraw, actions) = handle_event(&mut session, &Event::Escape).unwrap();
        assert!(!redraw);
        assert!(actions.is_empty());
    }

    #[test]
    fn paste_and_set_value_resolve_whole_value() {
        let mut session = session();
        handle_event(&mut session, &Event::Paste("beep/boop/b".into())).unwrap();
        assert_eq!(session.current_directory(), "beep/boop/");
        assert_eq!(session.page_filter(), Some("b"));

        let (_, actions) = handle_event(&mut session, &Event::SetValue("my".into())).unwrap();
        assert_eq!(
            actions,
            vec![Action::TransitionTo(Route {
                name: "kv.list".to_string(),
                directory: None,
                page_filter: Some("my".to_string()),
            })]
        );
    }

    #[test]
    fn entries_loaded_reresolves_current_value() {
        let mut session = FilterSession::new("kv", vec![Entry::new("my")]).unwrap();
        type_str(&mut session, "new/");
        assert_eq!(session.current_directory(), "");
        assert_eq!(session.page_filter(), Some("new/"));

        let snapshot = vec![Entry::new("my"), Entry::new("new/key")];
        let (redraw, actions) =
            handle_event(&mut session, &Event::EntriesLoaded(snapshot)).unwrap();
        assert!(redraw);
        assert_eq!(
            actions,
            vec![Action::TransitionTo(Route {
                name: "kv.list-directory".to_string(),
                directory: Some("new/".to_string()),
                page_filter: None,
            })]
        );
    }

    #[test]
    fn invalid_snapshot_is_rejected() {
        let mut session = session();
        let result = handle_event(&mut session, &Event::EntriesLoaded(vec![Entry::new("")]));
        assert!(result.is_err());
        assert_eq!(session.entries().len(), 4);
    }
}
