//! Remove miscased event keys that make Claude Code reject settings.json.
//!
//! Older pack installers registered `SubAgentStart` / `SubAgentStop`; the
//! real event names are `SubagentStart` / `SubagentStop`, and an unknown key
//! causes the whole file to be rejected.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::HookpackError;
use crate::ops::BackupGuard;
use crate::settings::{load_settings, save_settings};
use crate::types::SettingsDocument;

/// Event keys removed by [`repair_hook_keys`].
pub const INVALID_EVENT_KEYS: &[&str] = &["SubAgentStart", "SubAgentStop"];

/// What [`repair_hook_keys`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairOutcome {
    pub settings_path: PathBuf,
    /// Keys that were present and removed, in [`INVALID_EVENT_KEYS`] order.
    pub removed_keys: Vec<String>,
    /// Only set when the file was rewritten.
    pub backup_path: Option<PathBuf>,
}

/// Drops the [`INVALID_EVENT_KEYS`] from the hook map, returning which ones
/// were present. Correctly cased events are left alone.
pub fn remove_invalid_event_keys(
    settings: &mut SettingsDocument,
) -> Result<Vec<String>, HookpackError> {
    let Some(hooks) = settings.hooks_mut()? else {
        return Ok(Vec::new());
    };

    let removed: Vec<String> = INVALID_EVENT_KEYS
        .iter()
        .filter(|key| hooks.contains_key(**key))
        .map(|key| key.to_string())
        .collect();

    if !removed.is_empty() {
        hooks.retain(|event, _| !INVALID_EVENT_KEYS.contains(&event.as_str()));
    }

    Ok(removed)
}

/// Removes miscased event keys from the settings file, writing it back only
/// if something changed.
///
/// # Errors
///
/// Returns [`HookpackError::SettingsNotFound`] if there is no settings file,
/// and the usual parse and filesystem errors otherwise.
pub fn repair_hook_keys(settings_path: &Path) -> Result<RepairOutcome, HookpackError> {
    if !settings_path.exists() {
        return Err(HookpackError::SettingsNotFound(settings_path.to_path_buf()));
    }

    let mut settings = load_settings(settings_path)?;
    let removed_keys = remove_invalid_event_keys(&mut settings)?;

    let backup_path = if removed_keys.is_empty() {
        None
    } else {
        let guard = BackupGuard::new(settings_path)?;
        save_settings(settings_path, &settings)?;
        info!(keys = ?removed_keys, "removed invalid event keys");
        guard.commit()
    };

    Ok(RepairOutcome {
        settings_path: settings_path.to_path_buf(),
        removed_keys,
        backup_path,
    })
}
