//! Remove a pack's hooks from settings.json.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::HookpackError;
use crate::merge::strip_pack_hooks;
use crate::ops::BackupGuard;
use crate::ownership::validate_pack_id;
use crate::settings::{load_settings, save_settings};

/// What [`uninstall_pack_hooks`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallOutcome {
    pub settings_path: PathBuf,
    /// `false` if there was no settings file, in which case nothing was
    /// written.
    pub settings_found: bool,
    pub backup_path: Option<PathBuf>,
    /// Number of hook groups removed across all events.
    pub removed: usize,
}

/// Removes every hook group owned by `pack_id` from the settings file.
///
/// A missing settings file is not an error: nothing is written and zero
/// removals are reported. Otherwise the file is backed up and rewritten even
/// if the pack had no hooks in it.
///
/// # Errors
///
/// Returns [`HookpackError::InvalidPackId`] for an unusable pack id,
/// [`HookpackError::Json`] or [`HookpackError::MalformedSettings`] if the
/// file can't be parsed, and [`HookpackError::Io`] on filesystem failures.
pub fn uninstall_pack_hooks(
    settings_path: &Path,
    pack_id: &str,
) -> Result<UninstallOutcome, HookpackError> {
    validate_pack_id(pack_id)?;

    if !settings_path.exists() {
        debug!(path = %settings_path.display(), "no settings file, nothing to uninstall");
        return Ok(UninstallOutcome {
            settings_path: settings_path.to_path_buf(),
            settings_found: false,
            backup_path: None,
            removed: 0,
        });
    }

    let guard = BackupGuard::new(settings_path)?;

    let mut settings = load_settings(settings_path)?;
    let removed = strip_pack_hooks(&mut settings, pack_id)?;
    save_settings(settings_path, &settings)?;

    let backup_path = guard.commit();
    info!(pack = pack_id, removed, "uninstalled pack hooks");

    Ok(UninstallOutcome {
        settings_path: settings_path.to_path_buf(),
        settings_found: true,
        backup_path,
        removed,
    })
}
