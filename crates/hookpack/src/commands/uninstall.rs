//! Handler for the `hookpack uninstall` CLI command.

use std::path::Path;

use hookpack_core::ops::uninstall_pack_hooks;

use crate::output::Reporter;

/// Run the uninstall command, removing every hook owned by `pack_id`.
///
/// A missing settings file counts as success. Returns `true` on success,
/// `false` on failure.
pub fn run_uninstall(pack_id: &str, settings_path: &Path, reporter: &mut Reporter) -> bool {
    match uninstall_pack_hooks(settings_path, pack_id) {
        Ok(outcome) if !outcome.settings_found => {
            reporter.info("No settings.json found. Nothing to clean.");
            true
        }
        Ok(outcome) => {
            if let Some(backup) = &outcome.backup_path {
                reporter.info(&format!("Backup: {}", backup.display()));
            }
            reporter.success(&format!(
                "Removed {} hook entry/entries for '{pack_id}'",
                outcome.removed
            ));
            true
        }
        Err(e) => {
            reporter.error(&format!("Uninstall failed: {e}"));
            false
        }
    }
}
