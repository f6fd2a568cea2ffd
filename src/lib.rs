//! keynav: directory-aware filter navigation for hierarchical key listings.
//!
//! keynav is the decision logic behind a filter box over a `/`-separated key
//! namespace (secret paths, object keys). Typing into the box narrows the
//! listing; typing a known directory followed by `/` descends into it;
//! backspacing over that `/` climbs back out; escape clears the filter without
//! leaving the directory.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host / CLI (main.rs)                               │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Session state
//! │  - Keystroke events                                 │  ← Router actions
//! │  - Listing computation                              │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────────┐   ┌───────────────────────────┐
//! │ Engine (engine/)          │   │ Storage Layer (storage/)  │
//! │ - resolve / backspace /   │   │ - Entry snapshots (JSON)  │
//! │   escape decisions        │   │                           │
//! │ - Directory prefixes      │   │                           │
//! └───────────────────────────┘   └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Entry, NavigationDecision, errors (domain/)      │
//! │  - Data directory paths (infrastructure/)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to rotating OTLP JSON file │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`engine`]: pure navigation decisions
//! - [`app`]: caller-side session, keystroke events, router actions
//! - [`domain`]: core types and errors
//! - [`storage`]: entry snapshot sources
//! - [`infrastructure`]: platform paths
//! - [`observability`]: tracing setup
//!
//! # Configuration
//!
//! ```toml
//! mount_point = "secret"
//! entries_file = "~/snapshots/secret.json"
//! trace_level = "debug"
//! trace_file = "/tmp/keynav-otlp.json"
//! ```
//!
//! # Example
//!
//! ```rust
//! use keynav::{handle_event, Action, Entry, Event, FilterSession};
//!
//! let entries = vec![Entry::new("beep/boop/bop"), Entry::new("beep/boop-1")];
//! let mut session = FilterSession::new("kv", entries)?;
//!
//! for c in "beep/boop/".chars() {
//!     handle_event(&mut session, &Event::Char(c))?;
//! }
//! assert_eq!(session.current_directory(), "beep/boop/");
//!
//! let (_, actions) = handle_event(&mut session, &Event::Backspace)?;
//! assert!(matches!(actions[0], Action::TransitionTo(_)));
//! assert_eq!(session.current_directory(), "beep/");
//! assert_eq!(session.page_filter(), Some("boop"));
//! # Ok::<(), keynav::KeynavError>(())
//! ```

pub mod app;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod storage;

pub mod observability;

pub use app::{handle_event, Action, Event, FilterSession, ListItem, Route};
pub use domain::{Entry, KeynavError, NavigationDecision, Result};
pub use engine::{dispatch, on_backspace, on_escape, resolve, InputEvent};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use storage::{EntrySource, JsonEntrySource};

/// Mount point used when none is configured.
pub const DEFAULT_MOUNT_POINT: &str = "kv";

/// Runtime configuration.
///
/// Values come from a TOML file ([`Config::from_file`]) or a flat key/value
/// map supplied by a host ([`Config::from_map`]). Blank values fall back to
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mount/namespace identifier; prefixes route names and full paths.
    ///
    /// Default: `"kv"`
    pub mount_point: String,

    /// JSON entry snapshot to load at startup.
    ///
    /// Paths starting with `~` are expanded against the home directory.
    pub entries_file: Option<String>,

    /// Tracing level filter, e.g. `info` or `keynav=debug`.
    ///
    /// Default: `"info"`
    pub trace_level: Option<String>,

    /// OTLP JSON trace output file.
    ///
    /// Default: `<data dir>/keynav-otlp.json`
    pub trace_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mount_point: DEFAULT_MOUNT_POINT.to_string(),
            entries_file: None,
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use keynav::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("mount_point".to_string(), "secret".to_string());
    /// map.insert("trace_level".to_string(), " ".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.mount_point, "secret");
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self {
            mount_point: value("mount_point").unwrap_or_else(|| DEFAULT_MOUNT_POINT.to_string()),
            entries_file: value("entries_file"),
            trace_level: value("trace_level"),
            trace_file: value("trace_file"),
        }
        .normalized()
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`KeynavError::Io`] if the file cannot be read and
    /// [`KeynavError::Config`] if it is not valid TOML for this schema.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`KeynavError::Config`] on malformed TOML or unknown types.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| KeynavError::Config(format!("failed to parse config: {e}")))?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        let mount = self.mount_point.trim().trim_end_matches(domain::SEPARATOR);
        self.mount_point = if mount.is_empty() {
            DEFAULT_MOUNT_POINT.to_string()
        } else {
            mount.to_string()
        };
        for field in [&mut self.entries_file, &mut self.trace_level, &mut self.trace_file] {
            if field.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *field = None;
            }
        }
        self
    }
}

/// Builds a session from configuration.
///
/// Loads the entry snapshot named by `entries_file`, if any; otherwise the
/// session starts with no entries and expects an
/// [`Event::EntriesLoaded`] from the host.
///
/// # Errors
///
/// Propagates snapshot loading and validation errors.
///
/// # Example
///
/// ```rust
/// use keynav::{initialize, Config};
///
/// let session = initialize(&Config::default())?;
/// assert!(session.entries().is_empty());
/// assert_eq!(session.mount_point(), "kv");
/// # Ok::<(), keynav::KeynavError>(())
/// ```
pub fn initialize(config: &Config) -> Result<FilterSession> {
    tracing::debug!(mount_point = %config.mount_point, "initializing keynav session");

    let entries = match &config.entries_file {
        Some(file) => {
            let path = infrastructure::expand_tilde(file);
            JsonEntrySource::new(path)
                .with_mount_point(config.mount_point.clone())
                .load_entries()?
        }
        None => {
            tracing::debug!("no entries file configured, starting empty");
            Vec::new()
        }
    };

    FilterSession::new(config.mount_point.clone(), entries)
}
