//! File-level operations on settings.json.
//!
//! Each operation reads the settings file once, transforms it in memory with
//! the functions in [`crate::merge`], and writes it back once. A
//! [`BackupGuard`] copies the previous file to `settings.json.bak` first and
//! puts it back if anything fails after the copy.

pub mod backup;
pub mod install;
pub mod repair;
pub mod uninstall;

pub use backup::BackupGuard;
pub use install::{install_pack_hooks, InstallOutcome};
pub use repair::{repair_hook_keys, RepairOutcome, INVALID_EVENT_KEYS};
pub use uninstall::{uninstall_pack_hooks, UninstallOutcome};
