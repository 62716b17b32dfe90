//! Handler for the `hookpack install` CLI command.

use std::path::Path;

use hookpack_core::ops::install_pack_hooks;
use hookpack_core::ownership::{command_belongs_to_pack, pack_marker};
use hookpack_core::PackHooks;

use crate::output::Reporter;

/// Run the install command, merging `hooks_json` for `pack_id` into the
/// settings file.
///
/// Returns `true` on success, `false` on failure.
pub fn run_install(
    pack_id: &str,
    hooks_json: &str,
    settings_path: &Path,
    reporter: &mut Reporter,
) -> bool {
    // Parse before touching the file so bad input never leaves a backup or a
    // half-written settings.json behind.
    let pack_hooks = match PackHooks::parse(hooks_json) {
        Ok(hooks) => hooks,
        Err(e) => {
            reporter.error(&format!("Malformed hooks JSON: {e}"));
            return false;
        }
    };

    if pack_hooks.is_empty() {
        reporter.warning("No hook entries given; nothing will be merged");
    }

    for (event, entry) in pack_hooks.iter() {
        if !command_belongs_to_pack(&entry.command, pack_id) {
            reporter.warning(&format!(
                "{event}: command does not contain '{}'; reinstalling will duplicate it and uninstall will not remove it",
                pack_marker(pack_id)
            ));
        }
    }

    match install_pack_hooks(settings_path, pack_id, &pack_hooks) {
        Ok(outcome) => {
            if let Some(backup) = &outcome.backup_path {
                reporter.info(&format!("Backup: {}", backup.display()));
            }
            let message = format!(
                "Merged {} hook(s) into {}",
                outcome.events_merged,
                outcome.settings_path.display()
            );
            if outcome.replaced > 0 {
                reporter.success_with_details(
                    &message,
                    &format!(
                        "Replaced {} hook group(s) from a previous install of '{pack_id}'",
                        outcome.replaced
                    ),
                );
            } else {
                reporter.success(&message);
            }
            true
        }
        Err(e) => {
            reporter.error(&format!("Install failed: {e}"));
            false
        }
    }
}
