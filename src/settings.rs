//! Game settings and preferences
//!
//! Read from a JSON file next to the executable's working directory.
//! A missing or broken file is never fatal; defaults are used instead.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default settings file name
pub const SETTINGS_FILE: &str = "junk-blaster.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Pacing ===
    /// How long the win/lose screen blocks before accepting a restart
    pub end_banner_ms: u64,
    /// Delay between redraws of the start menu
    pub menu_frame_ms: u64,

    // === HUD ===
    /// Show score and health
    pub show_hud: bool,

    // === Run ===
    /// Directory holding sprites, sounds and music
    pub asset_dir: PathBuf,
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            end_banner_ms: 5000,
            menu_frame_ms: 800,

            show_hud: true,

            asset_dir: PathBuf::from("assets"),
            seed: None,
        }
    }
}

impl Settings {
    /// Settings with every blocking delay removed
    pub fn instant() -> Self {
        Self {
            end_banner_ms: 0,
            menu_frame_ms: 0,
            ..Self::default()
        }
    }

    pub fn end_banner_delay(&self) -> Duration {
        Duration::from_millis(self.end_banner_ms)
    }

    pub fn menu_frame_delay(&self) -> Duration {
        Duration::from_millis(self.menu_frame_ms)
    }

    /// Load from `SETTINGS_FILE`, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            log::info!("No {} found, using default settings", SETTINGS_FILE);
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source: std::io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(io_err)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("junk-blaster-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_path("partial.json");
        std::fs::write(&path, r#"{ "muted": true, "seed": 7 }"#).unwrap();
        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(settings.muted);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.end_banner_ms, 5000);
        assert_eq!(settings.asset_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved.json");
        let mut settings = Settings::instant();
        settings.music_volume = 0.25;
        settings.save(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_errors() {
        let missing = temp_path("missing.json");
        assert!(matches!(
            Settings::load_from(&missing),
            Err(SettingsError::Io { .. })
        ));

        let broken = temp_path("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        let result = Settings::load_from(&broken);
        std::fs::remove_file(&broken).ok();
        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }
}
