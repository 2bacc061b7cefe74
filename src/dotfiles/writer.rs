//! Home-directory file writes with skip/force/backup semantics.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::shell::chown_if_needed;

/// Outcome of a config write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was written.
    Written,
    /// Destination exists and `--force` was not given.
    SkippedExisting,
    /// Dry-run: nothing touched.
    WouldWrite,
}

/// Writes config files into the home directory.
///
/// Encapsulates the rules every applier shares: never overwrite without
/// `--force`, back up what `--force` replaces, touch nothing in dry-run,
/// and hand ownership back to the invoking user when running under sudo.
#[derive(Debug, Clone)]
pub struct FileWriter {
    force: bool,
    dry_run: bool,
}

impl FileWriter {
    /// Create a writer.
    pub fn new(force: bool, dry_run: bool) -> Self {
        Self { force, dry_run }
    }

    /// Whether `--force` is active.
    pub fn force(&self) -> bool {
        self.force
    }

    /// Whether dry-run is active.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Write `contents` to `dest` under the skip/force/backup rules.
    pub fn write_config(&self, dest: &Path, contents: &[u8]) -> Result<WriteOutcome> {
        if dest.exists() && !self.force {
            tracing::debug!(path = %dest.display(), "exists, skipping");
            return Ok(WriteOutcome::SkippedExisting);
        }

        if self.dry_run {
            tracing::info!(path = %dest.display(), size = contents.len(), "dry-run: would write");
            return Ok(WriteOutcome::WouldWrite);
        }

        if dest.exists() {
            self.backup(dest);
        }

        if let Some(parent) = dest.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
                chown_if_needed(parent);
            }
        }

        fs::write(dest, contents)?;
        chown_if_needed(dest);
        tracing::debug!(path = %dest.display(), "wrote config file");
        Ok(WriteOutcome::Written)
    }

    /// Create a directory (and parents), honoring dry-run.
    pub fn create_dir(&self, dir: &Path) -> Result<()> {
        if self.dry_run {
            tracing::info!(path = %dir.display(), "dry-run: would create directory");
            return Ok(());
        }

        fs::create_dir_all(dir)?;
        chown_if_needed(dir);
        Ok(())
    }

    /// Remove a directory tree, honoring dry-run. Used for forced plugin
    /// re-clones.
    pub fn remove_dir_all(&self, dir: &Path) -> Result<()> {
        if self.dry_run {
            tracing::info!(path = %dir.display(), "dry-run: would remove directory");
            return Ok(());
        }

        if dir.exists() {
            fs::remove_dir_all(dir)?;
        }
        Ok(())
    }

    fn backup(&self, dest: &Path) {
        let backup = backup_path(dest, Utc::now());
        match fs::rename(dest, &backup) {
            Ok(()) => {
                tracing::info!(from = %dest.display(), to = %backup.display(), "backed up existing file");
                chown_if_needed(&backup);
            }
            Err(e) => {
                tracing::warn!(path = %dest.display(), error = %e, "could not back up existing file");
            }
        }
    }
}

/// Timestamped backup path for a file.
///
/// `.zshrc` becomes `.zshrc.backup-20260808-093015`; the timestamp keeps
/// repeated forced runs from clobbering earlier backups.
pub fn backup_path(dest: &Path, now: DateTime<Utc>) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    dest.with_file_name(format!(
        "{}.backup-{}",
        name,
        now.format("%Y%m%d-%H%M%S")
    ))
}
