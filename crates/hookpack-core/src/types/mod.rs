pub mod hook;
pub mod settings;

pub use hook::{HookCommand, HookGroup, PackHookEntry, PackHooks};
pub use settings::{SettingsDocument, HOOKS_KEY};
