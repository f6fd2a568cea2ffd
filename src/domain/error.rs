//! Error types for keynav.
//!
//! This module defines the centralized error type [`KeynavError`] and a type alias
//! [`Result`] used by everything outside the navigation engine. The engine itself
//! is total and never fails; errors come from loading entry snapshots, reading
//! configuration and validating caller-supplied entries.

use thiserror::Error;

/// The main error type for keynav operations.
///
/// # Examples
///
/// ```
/// use keynav::KeynavError;
///
/// fn validate_mount(mount: &str) -> Result<(), KeynavError> {
///     if mount.is_empty() {
///         return Err(KeynavError::Config("mount point is empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_mount("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum KeynavError {
    /// Reading or decoding an entry snapshot failed.
    ///
    /// The string describes the source and what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An entry in a snapshot violates the entry invariants.
    ///
    /// `index` is the position of the offending entry in discovery order.
    #[error("Invalid entry at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

/// A specialized `Result` type for keynav operations.
pub type Result<T> = std::result::Result<T, KeynavError>;
