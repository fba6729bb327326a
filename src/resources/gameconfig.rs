//! Game configuration resource.
//!
//! Manages gameplay tuning loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! acceleration = 400
//! max_speed = 200
//! deceleration = 10000
//! gravity = 2000
//! jump_height = -600
//! boosted_jump_height = -1200
//! step_distance = 64
//!
//! [boost]
//! duration_ms = 2500
//! zoom = 2.5
//!
//! [camera]
//! zoom = 3.0
//! look_ahead = 50
//!
//! [enemy]
//! detection_range = 200
//! follow_range = 150
//! speed = 80
//! damage = 20
//!
//! [sim]
//! fps = 60
//! levels_dir = ./assets/levels
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::boost::BoostConfig;
use crate::resources::camera::CameraConfig;
use crate::resources::enemytuning::EnemyTuning;
use crate::resources::stats::MAX_HEALTH;
use crate::resources::tuning::MovementTuning;

const DEFAULT_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_LEVELS_DIR: &str = "./assets/levels";

/// Game configuration resource.
///
/// Holds the base values every level starts from. The level runner copies
/// `tuning` into the live [`MovementTuning`] resource on each (re)start.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub tuning: MovementTuning,
    pub boost: BoostConfig,
    pub camera: CameraConfig,
    pub enemy: EnemyTuning,
    /// Simulation rate of the headless runner.
    pub fps: u32,
    pub levels_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            tuning: MovementTuning::default(),
            boost: BoostConfig::default(),
            camera: CameraConfig::default(),
            enemy: EnemyTuning::default(),
            fps: DEFAULT_FPS,
            levels_dir: PathBuf::from(DEFAULT_LEVELS_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| -> Option<f32> {
            match config.getfloat(section, key) {
                Ok(value) => value.map(|v| v as f32),
                Err(e) => {
                    warn!("Ignoring [{}] {}: {}", section, key, e);
                    None
                }
            }
        };

        // [player] section; air values are re-derived from the ground values
        let base = self.tuning;
        let mut tuning = MovementTuning::from_base(
            float("player", "acceleration").unwrap_or(base.acceleration),
            float("player", "max_speed").unwrap_or(base.max_speed),
            float("player", "deceleration").unwrap_or(base.deceleration),
            float("player", "gravity").unwrap_or(base.gravity),
            float("player", "jump_height").unwrap_or(base.base_jump_height),
            float("player", "boosted_jump_height").unwrap_or(base.boosted_jump_height),
        );
        tuning.step_distance = float("player", "step_distance").unwrap_or(base.step_distance);
        self.tuning = tuning;

        // [boost] section
        if let Some(ms) = float("boost", "duration_ms") {
            self.boost.duration = ms / 1000.0;
        }
        if let Some(zoom) = float("boost", "zoom") {
            self.boost.zoom = zoom;
        }
        if let Some(factor) = float("boost", "acceleration_factor") {
            self.boost.acceleration_factor = factor;
        }

        // [camera] section
        if let Some(zoom) = float("camera", "zoom") {
            self.camera.base_zoom = zoom;
        }
        if let Some(look_ahead) = float("camera", "look_ahead") {
            self.camera.look_ahead = look_ahead;
        }

        // [enemy] section
        if let Some(range) = float("enemy", "detection_range") {
            self.enemy.detection_range = range;
        }
        if let Some(range) = float("enemy", "follow_range") {
            self.enemy.follow_range = range;
        }
        if let Some(speed) = float("enemy", "speed") {
            self.enemy.speed = speed;
        }
        if let Some(damage) = config.getint("enemy", "damage").ok().flatten() {
            let clamped = damage.clamp(0, i64::from(MAX_HEALTH));
            if clamped != damage {
                warn!("[enemy] damage {} out of range, using {}", damage, clamped);
            }
            self.enemy.contact_damage = clamped as i32;
        }

        // [sim] section
        if let Some(fps) = config.getuint("sim", "fps").ok().flatten() {
            self.fps = (fps as u32).max(1);
        }
        if let Some(dir) = config.get("sim", "levels_dir") {
            self.levels_dir = PathBuf::from(dir);
        }

        info!(
            "Loaded config: accel={}, max_speed={}, jump={}, boost={}s, zoom={}, enemy speed={}, fps={}",
            self.tuning.acceleration,
            self.tuning.max_speed,
            self.tuning.base_jump_height,
            self.boost.duration,
            self.camera.base_zoom,
            self.enemy.speed,
            self.fps
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("player", "acceleration", Some(self.tuning.acceleration.to_string()));
        config.set("player", "max_speed", Some(self.tuning.max_speed.to_string()));
        config.set("player", "deceleration", Some(self.tuning.deceleration.to_string()));
        config.set("player", "gravity", Some(self.tuning.gravity.to_string()));
        config.set("player", "jump_height", Some(self.tuning.base_jump_height.to_string()));
        config.set(
            "player",
            "boosted_jump_height",
            Some(self.tuning.boosted_jump_height.to_string()),
        );
        config.set("player", "step_distance", Some(self.tuning.step_distance.to_string()));

        config.set("boost", "duration_ms", Some((self.boost.duration * 1000.0).to_string()));
        config.set("boost", "zoom", Some(self.boost.zoom.to_string()));
        config.set(
            "boost",
            "acceleration_factor",
            Some(self.boost.acceleration_factor.to_string()),
        );

        config.set("camera", "zoom", Some(self.camera.base_zoom.to_string()));
        config.set("camera", "look_ahead", Some(self.camera.look_ahead.to_string()));

        config.set("enemy", "detection_range", Some(self.enemy.detection_range.to_string()));
        config.set("enemy", "follow_range", Some(self.enemy.follow_range.to_string()));
        config.set("enemy", "speed", Some(self.enemy.speed.to_string()));
        config.set("enemy", "damage", Some(self.enemy.contact_damage.to_string()));

        config.set("sim", "fps", Some(self.fps.to_string()));
        config.set("sim", "levels_dir", Some(self.levels_dir.display().to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Length of one simulated frame in seconds.
    pub fn frame_time(&self) -> f32 {
        1.0 / self.fps as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_tuning() {
        let config = GameConfig::new();
        assert_eq!(config.tuning.acceleration, 400.0);
        assert_eq!(config.boost.duration, 2.5);
        assert_eq!(config.camera.base_zoom, 3.0);
        assert_eq!(config.enemy.detection_range, 200.0);
        assert_eq!(config.fps, 60);
    }

    #[test]
    fn ini_overrides_only_present_keys() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[player]\nacceleration = 800\n[boost]\nduration_ms = 1000\n[enemy]\ndamage = 35\n[sim]\nfps = 30\n",
            )
            .unwrap();
        assert_eq!(config.tuning.acceleration, 800.0);
        assert_eq!(config.tuning.air_acceleration, 400.0);
        assert_eq!(config.tuning.max_speed, 200.0);
        assert_eq!(config.boost.duration, 1.0);
        assert_eq!(config.enemy.contact_damage, 35);
        assert_eq!(config.fps, 30);
        assert!((config.frame_time() - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn malformed_number_keeps_default() {
        let mut config = GameConfig::new();
        config.load_from_str("[player]\nmax_speed = fast\n").unwrap();
        assert_eq!(config.tuning.max_speed, 200.0);
    }

    #[test]
    fn damage_is_clamped_to_the_health_range() {
        let mut config = GameConfig::new();
        config.load_from_str("[enemy]\ndamage = -50\n").unwrap();
        assert_eq!(config.enemy.contact_damage, 0);
        config.load_from_str("[enemy]\ndamage = 5000000000\n").unwrap();
        assert_eq!(config.enemy.contact_damage, MAX_HEALTH);
    }

    #[test]
    fn saved_file_loads_back() {
        let path = std::env::temp_dir().join(format!("trickbit-config-{}.ini", std::process::id()));
        let mut saved = GameConfig::with_path(&path);
        saved.tuning.acceleration = 500.0;
        saved.boost.duration = 1.5;
        saved.camera.look_ahead = 30.0;
        saved.enemy.contact_damage = 25;
        saved.fps = 30;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        let result = loaded.load_from_file();
        let _ = std::fs::remove_file(&path);
        result.unwrap();
        assert_eq!(loaded.tuning.acceleration, 500.0);
        assert_eq!(loaded.tuning.air_acceleration, 250.0);
        assert_eq!(loaded.boost.duration, 1.5);
        assert_eq!(loaded.camera.look_ahead, 30.0);
        assert_eq!(loaded.enemy.contact_damage, 25);
        assert_eq!(loaded.fps, 30);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        let err = config.load_from_file().unwrap_err();
        assert!(err.starts_with("Failed to load config file"));
    }
}
