//! RAII backup guard for settings.json mutations.
//!
//! [`BackupGuard`] copies the settings file to `settings.json.bak` before any
//! mutation. Unlike a throwaway temp copy, the backup is meant to stay on disk
//! after a successful run so the user can recover a previous state by hand.
//! If the guard is dropped without [`BackupGuard::commit`] (an error was
//! propagated after the copy was made), the original is put back from the
//! backup.
//!
//! # Examples
//!
//! ```no_run
//! use hookpack_core::ops::BackupGuard;
//! use std::path::Path;
//!
//! fn rewrite(path: &Path) -> Result<(), hookpack_core::HookpackError> {
//!     let guard = BackupGuard::new(path)?;
//!
//!     // ... modify the file at `path` ...
//!
//!     // Success: keep the new file, leave the .bak in place.
//!     let _backup = guard.commit();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::HookpackError;
use crate::settings::backup_path_for;

/// Backs up a file on creation and restores it on drop unless committed.
///
/// # Behavior
///
/// - **`new(path)`**: Copies the file to `{path}.bak`, overwriting any older
///   backup. If the file does not exist, no backup is made and the guard does
///   nothing on drop.
/// - **`commit(self)`**: Marks the mutation as done and returns the backup
///   path. The backup file is kept.
/// - **`Drop`**: If not committed and a backup exists, copies it back over
///   the original.
pub struct BackupGuard {
    original_path: PathBuf,
    backup_path: Option<PathBuf>,
    committed: bool,
}

impl BackupGuard {
    /// # Errors
    ///
    /// Returns [`HookpackError::Io`] if the file exists but cannot be copied.
    pub fn new(path: &Path) -> Result<Self, HookpackError> {
        let original_path = path.to_path_buf();

        let backup_path = if original_path.exists() {
            let backup = backup_path_for(&original_path);
            fs::copy(&original_path, &backup)?;
            debug!(backup = %backup.display(), "backed up settings");
            Some(backup)
        } else {
            None
        };

        Ok(Self {
            original_path,
            backup_path,
            committed: false,
        })
    }

    /// Returns the path to the backup file, if one was created.
    pub fn backup_path(&self) -> Option<&Path> {
        self.backup_path.as_deref()
    }

    /// Consumes the guard without restoring, returning the backup path.
    pub fn commit(mut self) -> Option<PathBuf> {
        self.committed = true;
        self.backup_path.take()
    }
}

impl Drop for BackupGuard {
    fn drop(&mut self) {
        if self.committed {
            return;
        }

        if let Some(ref backup) = self.backup_path {
            // Nothing more can be done from a destructor; the .bak stays on
            // disk for manual recovery.
            if let Err(e) = fs::copy(backup, &self.original_path) {
                warn!(
                    backup = %backup.display(),
                    error = %e,
                    "failed to restore settings from backup"
                );
            }
        }
    }
}
