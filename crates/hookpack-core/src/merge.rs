//! In-memory merge and unmerge of pack hooks.
//!
//! These functions only touch a [`SettingsDocument`]; reading and writing the
//! file is left to [`crate::ops`].

use serde_json::Value;
use tracing::debug;

use crate::error::HookpackError;
use crate::ownership::belongs_to_pack;
use crate::types::{HookGroup, PackHooks, SettingsDocument};

/// Installs `pack_hooks` for `pack_id` into the document's hook map.
///
/// For each requested event, any group already owned by the pack is dropped
/// and one freshly built group is appended after the remaining groups. Events
/// not named in `pack_hooks` are left alone, so running this twice with the
/// same input yields the same document.
///
/// Returns the number of stale groups that were replaced.
///
/// # Errors
///
/// Returns [`HookpackError::MalformedSettings`] if `hooks` is not an object
/// or a requested event does not hold an array.
pub fn merge_pack_hooks(
    settings: &mut SettingsDocument,
    pack_id: &str,
    pack_hooks: &PackHooks,
) -> Result<usize, HookpackError> {
    let hooks = settings.hooks_or_insert()?;
    let mut replaced = 0;

    for (event, entry) in pack_hooks.iter() {
        let group = serde_json::to_value(HookGroup::for_entry(entry))?;

        match hooks.get_mut(event) {
            Some(Value::Array(groups)) => {
                let before = groups.len();
                groups.retain(|g| !belongs_to_pack(g, pack_id));
                let stale = before - groups.len();
                groups.push(group);
                replaced += stale;
                debug!(event, stale, groups = groups.len(), "merged pack hook");
            }
            Some(_) => return Err(not_an_array(event)),
            None => {
                hooks.insert(event.to_string(), Value::Array(vec![group]));
                debug!(event, "added event for pack hook");
            }
        }
    }

    Ok(replaced)
}

/// Removes every group owned by `pack_id` from every event.
///
/// Events left without groups are deleted, and if that empties the hook map
/// the `hooks` key itself is removed from the document.
///
/// Returns the number of groups removed.
///
/// # Errors
///
/// Returns [`HookpackError::MalformedSettings`] if `hooks` is not an object
/// or an event does not hold an array.
pub fn strip_pack_hooks(
    settings: &mut SettingsDocument,
    pack_id: &str,
) -> Result<usize, HookpackError> {
    let Some(hooks) = settings.hooks_mut()? else {
        return Ok(0);
    };

    let mut removed = 0;
    for (event, groups) in hooks.iter_mut() {
        let groups = groups.as_array_mut().ok_or_else(|| not_an_array(event))?;
        let before = groups.len();
        groups.retain(|g| !belongs_to_pack(g, pack_id));
        let stripped = before - groups.len();
        if stripped > 0 {
            debug!(event = event.as_str(), stripped, "stripped pack hooks");
        }
        removed += stripped;
    }

    hooks.retain(|_, groups| groups.as_array().is_some_and(|g| !g.is_empty()));

    if hooks.is_empty() {
        settings.remove_hooks();
    }

    Ok(removed)
}

fn not_an_array(event: &str) -> HookpackError {
    HookpackError::MalformedSettings(format!("hooks.{event} is not a JSON array"))
}
