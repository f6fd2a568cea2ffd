//! Domain layer for keynav.
//!
//! This module holds the core types shared by the navigation engine and its
//! callers, independent of any UI framework or backend.
//!
//! # Organization
//!
//! - [`entry`]: namespace keys and snapshot validation
//! - [`decision`]: the engine's output type
//! - [`error`]: error types and result alias
//!
//! # Examples
//!
//! ```
//! use keynav::domain::{validate_entries, Entry, Result};
//!
//! fn load() -> Result<Vec<Entry>> {
//!     let entries = vec![Entry::new("beep/boop"), Entry::new("my")];
//!     validate_entries(&entries)?;
//!     Ok(entries)
//! }
//! # load().unwrap();
//! ```

pub mod decision;
pub mod entry;
pub mod error;

pub use decision::NavigationDecision;
pub use entry::{validate_entries, Entry, SEPARATOR};
pub use error::{KeynavError, Result};
