//! Configuration module for seedlock
//!
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SeedlockPaths;
pub use settings::Settings;
