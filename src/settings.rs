//! Game settings and preferences
//!
//! Read once at startup from a JSON file. Every field is optional in the
//! file; anything missing keeps its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{FPS, MUSIC_VOLUME};
use crate::error::SettingsError;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation balance
    pub tuning: Tuning,

    /// Frame rate of the fixed-rate loop
    pub fps: u32,
    /// Fixed RNG seed (random per launch when absent)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence everything
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            fps: FPS,
            seed: None,
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: MUSIC_VOLUME,
            muted: false,
        }
    }
}

impl Settings {
    /// Environment variable naming an alternative settings file
    pub const PATH_ENV: &'static str = "AVOIDER_SETTINGS";
    /// Settings file looked up in the working directory
    pub const DEFAULT_FILE: &'static str = "avoider.json";

    /// Parse settings from JSON, then validate and clamp
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize()?;
        Ok(settings)
    }

    /// Load settings from a file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `$AVOIDER_SETTINGS` or `./avoider.json`.
    /// A missing file or a bad one falls back to defaults.
    pub fn load() -> Self {
        let path = std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_FILE));

        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Validate tuning and the frame rate, clamp volumes into range
    pub fn sanitize(&mut self) -> Result<(), SettingsError> {
        self.tuning.validate()?;
        if self.fps == 0 {
            return Err(SettingsError::Invalid("fps must be at least 1".to_string()));
        }
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        Ok(())
    }

    /// Effective background music volume
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Effective sound effect volume
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}
