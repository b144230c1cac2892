//! Game configuration
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults below. Command-line flags are applied on top in `main`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::display::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const DEFAULT_CONFIG_PATH: &str = "stardome.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Linear instead of point sampling when the frame is stretched
    pub linear_filtering: bool,
    pub seed: u64,
    pub star_count: usize,
    /// env_logger filter string; `RUST_LOG` is used when absent
    pub log_filter: Option<String>,
    pub keys: KeyBindings,
    pub audio: AudioConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            vsync: true,
            linear_filtering: false,
            seed: 1,
            star_count: 400,
            log_filter: None,
            keys: KeyBindings::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load `path`, or fall back to defaults. A missing file is expected; a
    /// broken one comes back as a warning for the caller to log once the
    /// logger (whose filter lives in this file) is up.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        let path = path.as_ref();
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(format!("ignoring {}: {}", path.display(), e)),
            ),
        }
    }
}

/// SDL key names for each logical action (see `SDL_GetKeyFromName`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub action: Vec<String>,
    pub pause: Vec<String>,
    pub restart: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: keys(&["Up", "W"]),
            down: keys(&["Down", "S"]),
            left: keys(&["Left", "A"]),
            right: keys(&["Right", "D"]),
            action: keys(&["Space", "Return"]),
            pause: keys(&["P"]),
            restart: keys(&["R"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub initial_master_volume: f32,
    pub max_master_volume: f32,
    /// Master volume gained per second until the max is reached
    pub master_volume_ramp: f32,
    pub chopping_sound: String,
    pub tracks: Vec<TrackConfig>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            initial_master_volume: 0.1,
            max_master_volume: 0.5,
            master_volume_ramp: 0.02,
            chopping_sound: "chopping.wav".to_string(),
            tracks: vec![
                TrackConfig::new("music/drift.ogg", 214.0, 1.0),
                TrackConfig::new("music/greenhouse.ogg", 187.0, 0.8),
                TrackConfig::new("music/all_of_us.ogg", 243.0, 0.9),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    pub name: String,
    pub length_secs: f32,
    #[serde(default = "default_track_volume")]
    pub max_volume: f32,
}

fn default_track_volume() -> f32 {
    1.0
}

impl TrackConfig {
    pub fn new(name: impl Into<String>, length_secs: f32, max_volume: f32) -> Self {
        Self {
            name: name.into(),
            length_secs,
            max_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_build() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (1600, 900));
        assert!(config.vsync);
        assert!(!config.linear_filtering);
        assert_eq!(config.audio.initial_master_volume, 0.1);
        assert_eq!(config.audio.max_master_volume, 0.5);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "seed": 99, "keys": { "pause": ["Escape"] } }"#).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.width, 1600);
        assert_eq!(config.keys.pause, vec!["Escape".to_string()]);
        assert_eq!(config.keys.up, KeyBindings::default().up);
        assert_eq!(config.audio, AudioConfig::default());
    }

    #[test]
    fn test_track_volume_defaults_to_one() {
        let track: TrackConfig =
            serde_json::from_str(r#"{ "name": "a.ogg", "length_secs": 12.5 }"#).unwrap();
        assert_eq!(track.max_volume, 1.0);
    }

    #[test]
    fn test_save_load_file() {
        let path = std::env::temp_dir().join(format!("stardome-test-{}.json", std::process::id()));
        let mut config = GameConfig::default();
        config.seed = 1234;
        config.log_filter = Some("debug".to_string());
        config.save(&path).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_or_default_on_bad_input() {
        let missing = std::env::temp_dir().join("stardome-definitely-missing.json");
        assert_eq!(GameConfig::load_or_default(&missing), (GameConfig::default(), None));

        let broken = std::env::temp_dir().join(format!("stardome-broken-{}.json", std::process::id()));
        fs::write(&broken, "{ not json").unwrap();
        let (config, warning) = GameConfig::load_or_default(&broken);
        assert_eq!(config, GameConfig::default());
        assert!(warning.is_some_and(|w| w.contains("ignoring")));
        assert!(GameConfig::load(&broken).is_err());
        let _ = fs::remove_file(&broken);
    }
}
