//! World-space position of an entity.
//!
//! The pivot is the centre of the entity's collider. Systems that integrate
//! physics, resolve terrain contacts, or measure distances all read and write
//! this component.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &MapPosition) -> f32 {
        self.pos.distance(other.pos)
    }
}
