//! Handler for the `hookpack repair` CLI command.

use std::path::Path;

use hookpack_core::ops::repair_hook_keys;

use crate::output::Reporter;

/// Run the repair command, dropping miscased event keys from the settings
/// file.
///
/// Returns `true` on success, `false` on failure.
pub fn run_repair(settings_path: &Path, reporter: &mut Reporter) -> bool {
    match repair_hook_keys(settings_path) {
        Ok(outcome) if outcome.removed_keys.is_empty() => {
            reporter.info("No invalid keys found. settings.json is clean.");
            true
        }
        Ok(outcome) => {
            if let Some(backup) = &outcome.backup_path {
                reporter.info(&format!("Backup: {}", backup.display()));
            }
            reporter.success_with_details(
                &format!("Removed invalid keys: {}", outcome.removed_keys.join(", ")),
                "Valid alternatives (SubagentStart, SubagentStop) left intact.",
            );
            true
        }
        Err(e) => {
            reporter.error(&format!("Repair failed: {e}"));
            false
        }
    }
}
