use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookpackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hook entries: {0}")]
    InvalidHookEntries(String),

    #[error("Invalid pack id '{0}': must be non-empty and must not contain '/'")]
    InvalidPackId(String),

    #[error("Malformed settings: {0}")]
    MalformedSettings(String),

    #[error("No settings.json found at {}", .0.display())]
    SettingsNotFound(PathBuf),

    #[error("Could not determine home directory")]
    HomeDirNotFound,
}
