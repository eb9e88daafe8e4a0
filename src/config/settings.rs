//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and handed to the
//! playback task by value.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AppPaths;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Invalid playback settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `speed_multiplier` must be finite and strictly positive.
    #[error("speed multiplier must be a positive number, got {0}")]
    InvalidSpeed(f32),

    /// `pause_duration_ms` must be at least 1 ms.
    #[error("pause duration must be greater than zero")]
    ZeroPause,
}

// ---------------------------------------------------------------------------
// PlaybackConfig
// ---------------------------------------------------------------------------

/// Pacing of the sign sequence.
///
/// Each step dwells for `pause_duration_ms / speed_multiplier` plus a fixed
/// settle time (see [`crate::sequencer::timeline`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Divides every wait; higher is faster.
    pub speed_multiplier: f32,
    /// Base dwell per word in milliseconds.
    pub pause_duration_ms: u64,
}

impl PlaybackConfig {
    /// Speed substituted for a non-positive `speed_multiplier`.
    pub const MIN_SPEED: f32 = 0.3;
    /// Pause substituted for a zero `pause_duration_ms`.
    pub const MIN_PAUSE_MS: u64 = 200;

    /// Check that the values can drive the scheduler.
    ///
    /// ```
    /// use sign_speech::config::{ConfigError, PlaybackConfig};
    ///
    /// assert!(PlaybackConfig::default().validate().is_ok());
    ///
    /// let bad = PlaybackConfig { speed_multiplier: 0.0, ..Default::default() };
    /// assert_eq!(bad.validate(), Err(ConfigError::InvalidSpeed(0.0)));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed_multiplier.is_finite() || self.speed_multiplier <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed_multiplier));
        }
        if self.pause_duration_ms == 0 {
            return Err(ConfigError::ZeroPause);
        }
        Ok(())
    }

    /// Replace only the fields [`validate`](Self::validate) rejects; valid
    /// fields are kept as they are.
    ///
    /// A non-finite speed becomes the default `1.0`, a non-positive one
    /// [`MIN_SPEED`](Self::MIN_SPEED).  A zero pause becomes
    /// [`MIN_PAUSE_MS`](Self::MIN_PAUSE_MS).
    pub fn repaired(&self) -> Self {
        let speed_multiplier = if !self.speed_multiplier.is_finite() {
            Self::default().speed_multiplier
        } else if self.speed_multiplier <= 0.0 {
            Self::MIN_SPEED
        } else {
            self.speed_multiplier
        };
        let pause_duration_ms = if self.pause_duration_ms == 0 {
            Self::MIN_PAUSE_MS
        } else {
            self.pause_duration_ms
        };
        Self {
            speed_multiplier,
            pause_duration_ms,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
            pause_duration_ms: 800,
        }
    }
}

// ---------------------------------------------------------------------------
// InputConfig
// ---------------------------------------------------------------------------

/// Word-source and transcript settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Number of transcript entries kept; the oldest are dropped first.
    pub transcript_capacity: usize,
    /// When reading segments continuously, wait for the current sequence to
    /// finish before submitting the next one instead of letting it be
    /// rejected.
    pub wait_for_idle: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            transcript_capacity: 50,
            wait_for_idle: true,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use sign_speech::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// # let _ = config;
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Sequence pacing.
    pub playback: PlaybackConfig,
    /// Word source / transcript settings.
    pub input: InputConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.playback.speed_multiplier, 1.0);
        assert_eq!(cfg.playback.pause_duration_ms, 800);
        assert_eq!(cfg.input.transcript_capacity, 50);
        assert!(cfg.input.wait_for_idle);
    }

    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let mut original = AppConfig::default();
        original.playback.speed_multiplier = 2.5;
        original.playback.pause_duration_ms = 1_200;
        original.input.transcript_capacity = 7;
        original.input.wait_for_idle = false;
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(loaded.playback, original.playback);
        assert_eq!(loaded.input.transcript_capacity, 7);
        assert!(!loaded.input.wait_for_idle);
    }

    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config.playback, PlaybackConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[playback]\nspeed_multiplier = 2.0\n").unwrap();

        let config = AppConfig::load_from(&path).expect("load");
        assert_eq!(config.playback.speed_multiplier, 2.0);
        assert_eq!(config.playback.pause_duration_ms, 800);
        assert_eq!(config.input.transcript_capacity, 50);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "playback = [not toml").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn validate_rejects_bad_speed_and_pause() {
        let mut cfg = PlaybackConfig::default();
        cfg.speed_multiplier = -1.0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidSpeed(-1.0)));

        cfg.speed_multiplier = f32::INFINITY;
        assert!(cfg.validate().is_err());

        cfg.speed_multiplier = 1.0;
        cfg.pause_duration_ms = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroPause));
    }

    #[test]
    fn repaired_replaces_only_invalid_fields() {
        let cfg = PlaybackConfig {
            speed_multiplier: 10.0,
            pause_duration_ms: 0,
        }
        .repaired();
        assert_eq!(cfg.speed_multiplier, 10.0);
        assert_eq!(cfg.pause_duration_ms, PlaybackConfig::MIN_PAUSE_MS);

        let cfg = PlaybackConfig {
            speed_multiplier: f32::NAN,
            pause_duration_ms: 5,
        }
        .repaired();
        assert_eq!(cfg.speed_multiplier, 1.0);
        assert_eq!(cfg.pause_duration_ms, 5);
        assert!(cfg.validate().is_ok());

        let cfg = PlaybackConfig {
            speed_multiplier: -2.0,
            pause_duration_ms: 5_000,
        }
        .repaired();
        assert_eq!(cfg.speed_multiplier, PlaybackConfig::MIN_SPEED);
        assert_eq!(cfg.pause_duration_ms, 5_000);
    }

    #[test]
    fn repaired_keeps_valid_config() {
        let cfg = PlaybackConfig {
            speed_multiplier: 0.1,
            pause_duration_ms: 3,
        };
        assert_eq!(cfg.repaired(), cfg);
    }
}
