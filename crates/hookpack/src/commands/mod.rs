pub mod completions;
pub mod install;
pub mod repair;
pub mod uninstall;
