//! Terrain lookup built from a level's tile layers.
//!
//! The level's `Base` layer is solid ground, `Death` kills on contact and
//! `Booster` triggers the jump boost. Lookups are by world coordinate; tiles
//! are scaled by the level's scale factor.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use rustc_hash::FxHashSet;

use crate::resources::tilemap::Tilemap;

pub const BASE_LAYER: &str = "Base";
pub const DEATH_LAYER: &str = "Death";
pub const BOOSTER_LAYER: &str = "Booster";

/// The only terrain question the AI asks.
pub trait TerrainQuery {
    fn has_tile_at(&self, world_x: f32, world_y: f32) -> bool;
}

impl<F> TerrainQuery for F
where
    F: Fn(f32, f32) -> bool,
{
    fn has_tile_at(&self, world_x: f32, world_y: f32) -> bool {
        self(world_x, world_y)
    }
}

/// Occupied cells of one layer.
#[derive(Debug, Clone, Default)]
pub struct TileLayer {
    /// Edge length of a cell in world units.
    pub cell_size: f32,
    cells: FxHashSet<(i32, i32)>,
}

impl TileLayer {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: FxHashSet::default(),
        }
    }

    pub fn insert(&mut self, cx: i32, cy: i32) {
        self.cells.insert((cx, cy));
    }

    pub fn contains_cell(&self, cx: i32, cy: i32) -> bool {
        self.cells.contains(&(cx, cy))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell containing a world point.
    pub fn cell_of(&self, world_x: f32, world_y: f32) -> (i32, i32) {
        (
            (world_x / self.cell_size).floor() as i32,
            (world_y / self.cell_size).floor() as i32,
        )
    }

    /// (min, max) corners of a cell in world units.
    pub fn cell_bounds(&self, cx: i32, cy: i32) -> (Vec2, Vec2) {
        let min = Vec2::new(cx as f32, cy as f32) * self.cell_size;
        (min, min + Vec2::splat(self.cell_size))
    }

    /// Occupied cells intersecting the open box (min, max).
    pub fn cells_in(&self, min: Vec2, max: Vec2) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (x0, y0, x1, y1) = if self.cells.is_empty() || self.cell_size <= 0.0 {
            (0, 0, -1, -1)
        } else {
            let (x0, y0) = self.cell_of(min.x, min.y);
            // Open upper bound: a box ending exactly on a cell edge does not touch that cell.
            let x1 = ((max.x / self.cell_size).ceil() as i32) - 1;
            let y1 = ((max.y / self.cell_size).ceil() as i32) - 1;
            (x0, y0, x1, y1)
        };
        (y0..=y1)
            .flat_map(move |cy| (x0..=x1).map(move |cx| (cx, cy)))
            .filter(|&(cx, cy)| self.contains_cell(cx, cy))
    }

    /// Whether any occupied cell intersects the open box (min, max).
    pub fn overlaps_box(&self, min: Vec2, max: Vec2) -> bool {
        self.cells_in(min, max).next().is_some()
    }
}

impl TerrainQuery for TileLayer {
    fn has_tile_at(&self, world_x: f32, world_y: f32) -> bool {
        let (cx, cy) = self.cell_of(world_x, world_y);
        self.contains_cell(cx, cy)
    }
}

/// Terrain of the running level.
#[derive(Resource, Debug, Clone, Default)]
pub struct TerrainLayers {
    pub base: TileLayer,
    pub death: TileLayer,
    pub booster: TileLayer,
    /// World size in units.
    pub bounds: Vec2,
}

impl TerrainLayers {
    /// Build the lookup from a tilemap scaled by `scale`. Missing layers stay empty.
    pub fn from_tilemap(tilemap: &Tilemap, scale: f32) -> Self {
        let cell_size = tilemap.tile_size as f32 * scale;
        let build = |name: &str| {
            let mut layer = TileLayer::new(cell_size);
            if let Some(src) = tilemap.layer(name) {
                for (x, y) in src.cells() {
                    layer.insert(x as i32, y as i32);
                }
            }
            layer
        };
        Self {
            base: build(BASE_LAYER),
            death: build(DEATH_LAYER),
            booster: build(BOOSTER_LAYER),
            bounds: Vec2::new(
                tilemap.map_width as f32 * cell_size,
                tilemap.map_height as f32 * cell_size,
            ),
        }
    }
}
