//! Game settings and preferences
//!
//! Stored as JSON next to the executable's working directory.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audio::SoundCue;
use crate::consts::DEFAULT_MAX_FRAME_DT;

/// Errors from reading or writing the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Collectible RNG seed; a random seed is drawn when absent
    pub seed: Option<u64>,

    // === Controls ===
    /// Releasing the current direction key stops the player
    pub stop_on_release: bool,

    // === Simulation ===
    /// Largest delta time a single frame may simulate (seconds)
    pub max_frame_dt: f32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,

    // === Native runner ===
    /// Frame pacing target for the headless runner
    pub target_fps: u32,
    /// Autopilot runs before the headless runner quits
    pub demo_runs: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            stop_on_release: false,
            max_frame_dt: DEFAULT_MAX_FRAME_DT,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 1.0,
            target_fps: 60,
            demo_runs: 3,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "boom_snake_settings.json";

    /// Read settings from a JSON file. Missing fields take their defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let mut settings: Settings = serde_json::from_str(&json)?;
        settings.sanitize();
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Read settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from(path.as_ref()) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Clamp out-of-range values loaded from disk
    pub fn sanitize(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            log::warn!("Invalid max_frame_dt {}, using default", self.max_frame_dt);
            self.max_frame_dt = DEFAULT_MAX_FRAME_DT;
        }
        self.target_fps = self.target_fps.max(1);
    }

    /// Final playback volume of a cue
    pub fn effective_volume(&self, cue: SoundCue) -> f32 {
        let channel = if cue.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        self.master_volume * channel * cue.base_volume()
    }
}
