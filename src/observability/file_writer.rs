//! Size-rotated line writer for trace output.
//!
//! Lines are appended to a single file; once the file grows past its size
//! limit it is renamed with a timestamp suffix and a fresh file is started.
//! Only the newest few backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the file exceeds 10 MB.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Backups retained after rotation.
pub const DEFAULT_MAX_BACKUPS: usize = 3;

#[derive(Debug)]
struct OpenFile {
    file: File,
    written: u64,
}

/// Thread-safe appender with size-based rotation.
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    current: Mutex<Option<OpenFile>>,
}

impl RotatingWriter {
    /// Creates a writer with the default limits. The file is opened lazily.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            current: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened, written or rotated, or if the lock
    /// was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut current = self.current.lock().map_err(|e| {
            io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}"))
        })?;

        if current.as_ref().is_some_and(|open| open.written > self.max_bytes) {
            *current = None;
            self.rotate()?;
        }

        if current.is_none() {
            *current = Some(self.open()?);
        }

        let Some(open) = current.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file unavailable"));
        };

        writeln!(open.file, "{line}")?;
        open.file.flush()?;
        open.written += line.len() as u64 + 1;
        Ok(())
    }

    fn open(&self) -> io::Result<OpenFile> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(OpenFile { file, written })
    }

    fn rotate(&self) -> io::Result<()> {
        if self.path.exists() {
            let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.6f");
            fs::rename(&self.path, self.backup_path(&stamp.to_string()))?;
        }
        self.prune_backups()
    }

    fn backup_path(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn prune_backups(&self) -> io::Result<()> {
        let Some(file_name) = self.path.file_name().and_then(|n| n.to_str()) else {
            return Ok(());
        };
        let prefix = format!("{file_name}.");
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        // Timestamp suffixes sort chronologically.
        let mut backups: Vec<PathBuf> = fs::read_dir(&dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();
        backups.sort();

        let excess = backups.len().saturating_sub(self.max_backups);
        for stale in backups.into_iter().take(excess) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
