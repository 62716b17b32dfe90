//! Install a pack's hooks into settings.json.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::HookpackError;
use crate::merge::merge_pack_hooks;
use crate::ops::BackupGuard;
use crate::ownership::validate_pack_id;
use crate::settings::{load_settings, save_settings};
use crate::types::PackHooks;

/// What [`install_pack_hooks`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub settings_path: PathBuf,
    /// `None` if there was no settings file to back up.
    pub backup_path: Option<PathBuf>,
    /// Number of events a group was written for.
    pub events_merged: usize,
    /// Number of groups from an earlier install of the same pack that were
    /// replaced.
    pub replaced: usize,
}

/// Merges `pack_hooks` for `pack_id` into the settings file at
/// `settings_path`, creating the file if it doesn't exist.
///
/// The previous file is copied to `settings.json.bak` first. Re-running with
/// the same arguments leaves exactly one group per event for the pack.
///
/// # Errors
///
/// Returns [`HookpackError::InvalidPackId`] before touching the file if the
/// pack id is unusable, [`HookpackError::Json`] or
/// [`HookpackError::MalformedSettings`] if the existing file can't be merged
/// into (the file is left as it was), and [`HookpackError::Io`] on filesystem
/// failures.
pub fn install_pack_hooks(
    settings_path: &Path,
    pack_id: &str,
    pack_hooks: &PackHooks,
) -> Result<InstallOutcome, HookpackError> {
    validate_pack_id(pack_id)?;

    let guard = BackupGuard::new(settings_path)?;

    let mut settings = load_settings(settings_path)?;
    let replaced = merge_pack_hooks(&mut settings, pack_id, pack_hooks)?;
    save_settings(settings_path, &settings)?;

    let backup_path = guard.commit();
    info!(
        pack = pack_id,
        events = pack_hooks.len(),
        replaced,
        "installed pack hooks"
    );

    Ok(InstallOutcome {
        settings_path: settings_path.to_path_buf(),
        backup_path,
        events_merged: pack_hooks.len(),
        replaced,
    })
}
