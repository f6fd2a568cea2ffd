//! Entry snapshot loading.
//!
//! The engine consumes whatever snapshot the caller passes in; this layer is
//! how the shipped session and CLI obtain one.
//!
//! # Modules
//!
//! - `backend`: the [`EntrySource`] trait
//! - `json`: JSON snapshot files
//! - `models`: accepted on-disk layouts

pub mod backend;
pub mod json;
pub mod models;

pub use backend::EntrySource;
pub use json::JsonEntrySource;
pub use models::{EntryRecord, SnapshotFile};
