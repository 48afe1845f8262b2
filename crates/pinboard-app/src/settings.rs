// Settings persistence: window size stored in the platform config dir,
// e.g. ~/.config/pinboard/settings.json on Linux. Image positions are
// deliberately not persisted; every launch starts from the initial layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::theme::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinboardSettings {
    #[serde(default = "default_width")]
    pub window_width: f32,
    #[serde(default = "default_height")]
    pub window_height: f32,
}

fn default_width() -> f32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_height() -> f32 {
    DEFAULT_WINDOW_HEIGHT
}

impl Default for PinboardSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("pinboard").join("settings.json"))
}

pub fn load_settings() -> PinboardSettings {
    let path = match settings_path() {
        Some(p) => p,
        None => return PinboardSettings::default(),
    };

    match std::fs::read_to_string(&path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                PinboardSettings::default()
            }
        },
        Err(_) => PinboardSettings::default(),
    }
}

pub fn save_settings(settings: &PinboardSettings) {
    let path = match settings_path() {
        Some(p) => p,
        None => {
            log::warn!("Cannot determine settings path");
            return;
        }
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("Failed to create config dir {}: {}", parent.display(), e);
            return;
        }
    }

    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                log::error!("Failed to write {}: {}", path.display(), e);
            }
        }
        Err(e) => {
            log::error!("Failed to serialize settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_json_round_trip() {
        let settings = PinboardSettings {
            window_width: 1024.0,
            window_height: 576.0,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: PinboardSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.window_width, 1024.0);
        assert_eq!(back.window_height, 576.0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let back: PinboardSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(back.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(back.window_height, DEFAULT_WINDOW_HEIGHT);
    }
}
