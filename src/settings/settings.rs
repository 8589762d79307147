// Settings management and persistence
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::engine::MAX_CHANNELS;

/// Channel pool and master volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    pub channels: usize, // 1-16
    pub volume: f32,     // 0.0-1.0
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            channels: 8,
            volume: 1.0,
        }
    }
}

/// Haptic click on every press
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticSettings {
    pub enabled: bool,
    pub pulse_ms: u64,
}

impl Default for HapticSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            pulse_ms: 40,
        }
    }
}

/// Where transient backing files are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackingSettings {
    pub directory: Option<PathBuf>, // None = system temp dir
    pub prefix: String,
}

impl Default for BackingSettings {
    fn default() -> Self {
        Self {
            directory: None,
            prefix: "soundboard-".to_string(),
        }
    }
}

/// Output stream overrides; None keeps the device default.
///
/// Phone-sized devices play well at 22050 Hz with a 4096-frame buffer, but
/// forcing a rate the device cannot open leaves the board silent, so both
/// are opt-in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub sample_rate: Option<u32>,
    pub buffer_frames: Option<u32>,
}

/// Main application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub version: i32, // Settings schema version for future migrations
    pub playback: PlaybackSettings,
    pub haptics: HapticSettings,
    pub backing: BackingSettings,
    pub output: OutputSettings,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            version: 1,
            playback: PlaybackSettings::default(),
            haptics: HapticSettings::default(),
            backing: BackingSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl BoardSettings {
    /// Get the settings file path
    pub fn get_settings_path(app_dir: &Path) -> PathBuf {
        app_dir.join("settings.json")
    }

    /// Load settings from `app_dir`, or return defaults if there is no file
    pub fn load(app_dir: &Path) -> Result<Self> {
        Self::load_from(&Self::get_settings_path(app_dir))
    }

    /// Load settings from a specific file, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("[Settings] No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;

        let settings: BoardSettings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;

        log::info!("[Settings] Loaded settings from {:?}", path);
        Ok(settings.sanitized())
    }

    /// Save settings to `app_dir`
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        fs::create_dir_all(app_dir).context("Failed to create settings directory")?;

        let path = Self::get_settings_path(app_dir);
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;

        log::info!("[Settings] Saved settings to {:?}", path);
        Ok(())
    }

    /// Clamp out-of-range values
    pub fn sanitized(mut self) -> Self {
        self.playback.channels = self.playback.channels.clamp(1, MAX_CHANNELS);
        self.playback.volume = if self.playback.volume.is_finite() {
            self.playback.volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self
    }
}
