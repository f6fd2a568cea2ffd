//! Actions representing router side effects to be executed by the host.
//!
//! The event handler turns each [`NavigationDecision`] into exactly one
//! [`Action`]. A directory change becomes a route transition; anything else is
//! an in-place update of the `pageFilter` query parameter.
//!
//! # Example
//!
//! ```rust
//! use keynav::app::{Action, Route};
//! use keynav::NavigationDecision;
//!
//! let decision = NavigationDecision::new("beep/", None, true);
//! let action = Action::from_decision("kv", &decision);
//!
//! assert_eq!(
//!     action,
//!     Action::TransitionTo(Route {
//!         name: "kv.list-directory".to_string(),
//!         directory: Some("beep/".to_string()),
//!         page_filter: None,
//!     })
//! );
//! ```

use crate::domain::NavigationDecision;
use serde::Serialize;

/// Route name suffix for the namespace root listing.
const LIST_ROUTE: &str = "list";

/// Route name suffix for a directory listing.
const LIST_DIRECTORY_ROUTE: &str = "list-directory";

/// A route in the host's routing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Fully-qualified route name, `<mount>.list` or `<mount>.list-directory`.
    pub name: String,

    /// Directory parameter. Only set for the list-directory route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,

    /// `pageFilter` query parameter; `None` omits it.
    pub page_filter: Option<String>,
}

impl Route {
    /// Builds the listing route for `directory` under `mount_point`.
    #[must_use]
    pub fn listing(mount_point: &str, directory: &str, page_filter: Option<String>) -> Self {
        if directory.is_empty() {
            Self {
                name: format!("{mount_point}.{LIST_ROUTE}"),
                directory: None,
                page_filter,
            }
        } else {
            Self {
                name: format!("{mount_point}.{LIST_DIRECTORY_ROUTE}"),
                directory: Some(directory.to_string()),
                page_filter,
            }
        }
    }
}

/// Commands for the host router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Performs a full route transition to another listing.
    ///
    /// The host must keep the filter input focused across the transition.
    TransitionTo(Route),

    /// Updates the `pageFilter` query parameter of the current route in place.
    UpdatePageFilter {
        page_filter: Option<String>,
    },
}

impl Action {
    /// Maps an engine decision to the router action it calls for.
    #[must_use]
    pub fn from_decision(mount_point: &str, decision: &NavigationDecision) -> Self {
        if decision.is_directory_change {
            Self::TransitionTo(Route::listing(
                mount_point,
                &decision.target_directory,
                decision.residual_filter.clone(),
            ))
        } else {
            Self::UpdatePageFilter {
                page_filter: decision.residual_filter.clone(),
            }
        }
    }
}
