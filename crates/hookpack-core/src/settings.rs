use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::HookpackError;
use crate::types::SettingsDocument;

/// Suffix appended to the settings file name for the pre-mutation copy.
pub const BACKUP_SUFFIX: &str = ".bak";

/// `~/.claude/settings.json`.
pub fn default_settings_path() -> Result<PathBuf, HookpackError> {
    dirs::home_dir()
        .map(|home| home.join(".claude").join("settings.json"))
        .ok_or(HookpackError::HomeDirNotFound)
}

/// `settings.json` -> `settings.json.bak`, next to the original.
pub fn backup_path_for(settings_path: &Path) -> PathBuf {
    let mut name = OsString::from(settings_path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Reads the settings document, or an empty one if the file doesn't exist.
pub fn load_settings(path: &Path) -> Result<SettingsDocument, HookpackError> {
    if !path.exists() {
        debug!(path = %path.display(), "settings file absent, starting empty");
        return Ok(SettingsDocument::new());
    }

    let content = fs::read_to_string(path)?;
    let settings: SettingsDocument = serde_json::from_str(&content)?;
    debug!(path = %path.display(), keys = settings.as_map().len(), "loaded settings");
    Ok(settings)
}

/// Writes the document with two-space indentation and a trailing newline,
/// creating the parent directory if needed.
pub fn save_settings(path: &Path, settings: &SettingsDocument) -> Result<(), HookpackError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, format!("{json}\n"))?;
    debug!(path = %path.display(), "wrote settings");
    Ok(())
}
