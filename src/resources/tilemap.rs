//! Tilemap data types.
//!
//! Simple serializable structs for tile map data, embedded in level files.
//! A layer lists single tile placements (`positions`) and/or horizontal
//! strips (`runs`); both expand to the same set of occupied cells.

use serde::{Deserialize, Serialize};

/// Single tile placement within a layer.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct Tileposition {
    /// X coordinate in tiles.
    pub x: u32,
    /// Y coordinate in tiles.
    pub y: u32,
    /// Tile identifier (tileset-local).
    #[serde(default)]
    pub id: u32,
}

/// Horizontal strip of tiles from `x0` to `x1` inclusive on row `y`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct TileRun {
    pub y: u32,
    pub x0: u32,
    pub x1: u32,
    #[serde(default)]
    pub id: u32,
}

/// A named tile layer containing positions.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Tilelayer {
    pub name: String,
    #[serde(default)]
    pub positions: Vec<Tileposition>,
    #[serde(default)]
    pub runs: Vec<TileRun>,
}

impl Tilelayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_run(mut self, y: u32, x0: u32, x1: u32) -> Self {
        self.runs.push(TileRun { y, x0, x1, id: 0 });
        self
    }

    pub fn with_tile(mut self, x: u32, y: u32) -> Self {
        self.positions.push(Tileposition { x, y, id: 0 });
        self
    }

    /// Every occupied cell, runs expanded.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.positions
            .iter()
            .map(|p| (p.x, p.y))
            .chain(self.runs.iter().flat_map(|r| {
                let (lo, hi) = if r.x0 <= r.x1 { (r.x0, r.x1) } else { (r.x1, r.x0) };
                (lo..=hi).map(move |x| (x, r.y))
            }))
    }
}

/// Tilemap metadata and layers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilemap {
    /// Size of a tile in pixels, before level scaling.
    pub tile_size: u32,
    /// Map width in tiles.
    pub map_width: u32,
    /// Map height in tiles.
    pub map_height: u32,
    pub layers: Vec<Tilelayer>,
}

impl Tilemap {
    pub fn layer(&self, name: &str) -> Option<&Tilelayer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_and_positions_expand_to_cells() {
        let layer = Tilelayer::new("Base").with_run(5, 3, 1).with_tile(9, 9);
        let mut cells: Vec<_> = layer.cells().collect();
        cells.sort();
        assert_eq!(cells, vec![(1, 5), (2, 5), (3, 5), (9, 9)]);
    }

    #[test]
    fn layer_json_defaults_missing_lists() {
        let layer: Tilelayer =
            serde_json::from_str(r#"{"name":"Death","runs":[{"y":3,"x0":0,"x1":1}]}"#).unwrap();
        assert!(layer.positions.is_empty());
        assert_eq!(layer.cells().count(), 2);
    }
}
