//! Path utilities for locating keynav's data files.
//!
//! Resolves the per-user data directory used for trace output and expands
//! `~`-prefixed paths given in configuration.

use std::env;
use std::path::PathBuf;

/// Directory name under the platform data directory.
const APP_DIR: &str = "keynav";

/// File name of the OTLP JSON trace output.
const TRACE_FILE_NAME: &str = "keynav-otlp.json";

/// Returns the data directory for keynav.
///
/// Uses `$XDG_DATA_HOME/keynav` when set, else `~/.local/share/keynav`. Falls
/// back to a relative `.keynav` directory when no home directory is known.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(xdg) = env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    home_dir().map_or_else(
        || PathBuf::from(format!(".{APP_DIR}")),
        |home| home.join(".local").join("share").join(APP_DIR),
    )
}

/// Default location of the trace output file.
#[must_use]
pub fn default_trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use keynav::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~"), "relative/~");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = home_dir() else {
        return path.to_string();
    };
    let home = home.to_string_lossy();

    if path == "~" {
        home.into_owned()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
