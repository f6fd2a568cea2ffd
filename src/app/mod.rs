//! Application layer coordinating session state, events and router actions.
//!
//! This module sits between the host UI and the navigation engine. The host
//! forwards keystrokes as [`Event`]s; the handler consults the engine with the
//! state held in [`FilterSession`] and hands back [`Action`]s for the router.
//!
//! # Architecture
//!
//! ```text
//! Keystroke → Event → handle_event → engine → NavigationDecision → Action → Router
//!                         ↑                          │
//!                         └──── FilterSession ←──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: router commands emitted by the handler
//! - [`handler`]: event processing
//! - [`state`]: caller-owned session state and listing computation

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::{Action, Route};
pub use handler::{handle_event, Event};
pub use state::{FilterSession, ListItem};
