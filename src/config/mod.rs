//! Configuration module.
//!
//! Provides `AppConfig` (top-level settings), `PlaybackConfig` for sequence
//! pacing, `InputConfig` for the word source, `AppPaths` for the platform
//! config directory, and TOML persistence via `AppConfig::load` /
//! `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, ConfigError, InputConfig, PlaybackConfig};
