pub mod error;
pub mod merge;
pub mod ops;
pub mod ownership;
pub mod settings;
pub mod types;

pub use error::HookpackError;
pub use types::*;
