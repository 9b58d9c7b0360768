//! Size-rotated line writer for span exports.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size threshold before rotation (10 MB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated files to keep.
pub const DEFAULT_MAX_BACKUPS: usize = 3;

/// Appends lines to a file, rotating it once it grows past `max_bytes`.
///
/// Rotated files are named `<file name>.<UTC timestamp>` next to the original;
/// only the newest `max_backups` are kept. The handle is opened lazily on the
/// first write and shared behind a mutex.
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
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
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails on rotation, open, write or flush errors, or if the lock is poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|m| m.len() >= self.max_bytes) {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "span export file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{stamp}"));
        fs::rename(&self.path, PathBuf::from(backup))?;
        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let (Some(dir), Some(name)) = (self.path.parent(), self.path.file_name().and_then(|n| n.to_str())) else {
            return Ok(());
        };
        let dir = if dir.as_os_str().is_empty() { Path::new(".") } else { dir };
        let prefix = format!("{name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|p| p.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with(&prefix)))
            .collect();

        // Timestamps sort lexically, newest last.
        backups.sort();
        let excess = backups.len().saturating_sub(self.max_backups);
        for old in backups.into_iter().take(excess) {
            if let Err(e) = fs::remove_file(&old) {
                tracing::debug!(path = %old.display(), error = %e, "failed to remove old span export");
            }
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
