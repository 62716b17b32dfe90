//! Deciding which hook groups belong to a pack.
//!
//! settings.json has no room for a pack id, so ownership is read off the
//! command itself: a pack's scripts live under `.claude/hooks/sounds/<pack>/`,
//! and any group with a command mentioning that path is treated as the pack's.

use serde_json::Value;

use crate::error::HookpackError;

/// Path prefix under which every pack's scripts are installed.
pub const PACK_PATH_MARKER: &str = ".claude/hooks/sounds/";

/// The marker identifying commands of `pack_id`. The trailing slash keeps
/// `pack-b` from matching `pack-ab` or `pack-bb`.
pub fn pack_marker(pack_id: &str) -> String {
    format!("{PACK_PATH_MARKER}{pack_id}/")
}

/// Returns `true` if `command` carries the pack's marker.
///
/// A pack entry whose command fails this check can't be told apart from a
/// user's own hook, so reinstalling it appends a duplicate and uninstalling
/// leaves it behind.
pub fn command_belongs_to_pack(command: &str, pack_id: &str) -> bool {
    command.contains(&pack_marker(pack_id))
}

/// Returns `true` if any command in the group's `hooks` list contains the
/// pack's marker.
///
/// Never fails: a group without `hooks`, or entries without a string
/// `command`, simply don't match.
pub fn belongs_to_pack(hook_group: &Value, pack_id: &str) -> bool {
    hook_group
        .get("hooks")
        .and_then(Value::as_array)
        .is_some_and(|hooks| {
            hooks
                .iter()
                .filter_map(|hook| hook.get("command").and_then(Value::as_str))
                .any(|command| command_belongs_to_pack(command, pack_id))
        })
}

/// Rejects pack ids that would make the marker ambiguous.
pub fn validate_pack_id(pack_id: &str) -> Result<(), HookpackError> {
    if pack_id.is_empty() || pack_id.contains('/') {
        return Err(HookpackError::InvalidPackId(pack_id.to_string()));
    }
    Ok(())
}
