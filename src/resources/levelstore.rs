//! Level definitions and their registry.
//!
//! A level is pure data: tile layers, spawn points, the number of keys the
//! exit door needs, and a tagged list of special objects. One generic runner
//! ([`crate::systems::level`]) turns any [`LevelData`] into entities.
//!
//! # File format
//!
//! ```json
//! {
//!   "key": "level1",
//!   "title": "Welcome, User",
//!   "next": "level2",
//!   "scale": 2.0,
//!   "player_spawn": { "x": 32, "y": 640 },
//!   "enemy_spawns": [ { "x": 370, "y": 850 } ],
//!   "keys_required": 1,
//!   "objects": [
//!     { "kind": "key", "x": 900, "y": 800 },
//!     { "kind": "guide", "x": 200, "y": 860, "message": "Find the key!" },
//!     { "kind": "falling_platform", "x": 1200, "y": 700, "delay_ms": 800, "fall_distance": 1000 }
//!   ],
//!   "tilemap": { "tile_size": 16, "map_width": 160, "map_height": 32, "layers": [] }
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::resources::tilemap::Tilemap;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

/// Special object placed in a level.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LevelObject {
    Key {
        x: f32,
        y: f32,
    },
    Chest {
        x: f32,
        y: f32,
    },
    Door {
        x: f32,
        y: f32,
    },
    Guide {
        x: f32,
        y: f32,
        message: String,
    },
    FallingPlatform {
        x: f32,
        y: f32,
        #[serde(default = "default_fall_delay_ms")]
        delay_ms: u32,
        #[serde(default = "default_fall_distance")]
        fall_distance: f32,
    },
}

fn default_fall_delay_ms() -> u32 {
    800
}

fn default_fall_distance() -> f32 {
    1000.0
}

fn default_scale() -> f32 {
    2.0
}

fn default_keys_required() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelData {
    pub key: String,
    /// Shown by the shell when the level starts.
    pub title: String,
    /// Level entered through the exit door; `None` means the game is won.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default = "default_scale")]
    pub scale: f32,
    pub player_spawn: SpawnPoint,
    #[serde(default)]
    pub enemy_spawns: Vec<SpawnPoint>,
    #[serde(default = "default_keys_required")]
    pub keys_required: u32,
    #[serde(default)]
    pub objects: Vec<LevelObject>,
    pub tilemap: Tilemap,
}

impl LevelData {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse level JSON: {}", e))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level file {}: {}", path.display(), e))?;
        Self::from_json(&json)
    }
}

/// Registry of loaded levels by key, remembering load order.
#[derive(Resource, Debug, Default)]
pub struct LevelStore {
    pub map: FxHashMap<String, LevelData>,
    order: Vec<String>,
}

impl LevelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a level by its key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&LevelData> {
        self.map.get(key.as_ref())
    }

    /// Insert a level under its own key, replacing any previous definition.
    pub fn insert(&mut self, level: LevelData) {
        if !self.map.contains_key(&level.key) {
            self.order.push(level.key.clone());
        }
        self.map.insert(level.key.clone(), level);
    }

    /// Key of the first level loaded.
    pub fn first_key(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Load every `*.json` file in `dir`, sorted by file name.
    ///
    /// Unparseable files are skipped with a warning. Returns the number of
    /// levels loaded.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, String> {
        let dir = dir.as_ref();
        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .map_err(|e| format!("Failed to read level dir {}: {}", dir.display(), e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match LevelData::load(&path) {
                Ok(level) => {
                    info!("Loaded level '{}' from {}", level.key, path.display());
                    self.insert(level);
                    loaded += 1;
                }
                Err(e) => warn!("{}", e),
            }
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL: &str = r#"{
        "key": "test",
        "title": "Test",
        "player_spawn": { "x": 10, "y": 20 },
        "objects": [
            { "kind": "key", "x": 1, "y": 2 },
            { "kind": "guide", "x": 3, "y": 4, "message": "hi" },
            { "kind": "falling_platform", "x": 5, "y": 6 }
        ],
        "tilemap": { "tile_size": 16, "map_width": 4, "map_height": 4, "layers": [] }
    }"#;

    #[test]
    fn level_json_fills_defaults() {
        let level = LevelData::from_json(LEVEL).unwrap();
        assert_eq!(level.scale, 2.0);
        assert_eq!(level.keys_required, 1);
        assert!(level.next.is_none());
        assert!(level.enemy_spawns.is_empty());
        assert_eq!(
            level.objects[2],
            LevelObject::FallingPlatform {
                x: 5.0,
                y: 6.0,
                delay_ms: 800,
                fall_distance: 1000.0
            }
        );
    }

    #[test]
    fn bad_json_reports_error() {
        let err = LevelData::from_json("{").unwrap_err();
        assert!(err.starts_with("Failed to parse level JSON"));
    }

    #[test]
    fn store_keeps_insertion_order() {
        let mut store = LevelStore::new();
        let mut a = LevelData::from_json(LEVEL).unwrap();
        a.key = "b".into();
        let mut b = a.clone();
        b.key = "a".into();
        store.insert(a.clone());
        store.insert(b);
        store.insert(a);
        assert_eq!(store.first_key(), Some("b"));
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(store.len(), 2);
    }
}
