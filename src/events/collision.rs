//! Collision notifications.
//!
//! The detector emits [`CollisionEvent`] whenever the player's collider
//! overlaps another entity's, and [`RegionEvent`] when it touches a special
//! tile layer. Observers react in a decoupled manner (damage, pickups, boost).
use bevy_ecs::prelude::*;

/// Event fired when two entities with BoxCollider overlap.
///
/// `a` is always the player; `b` is the other participant.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Special tile layers that react to contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Booster,
    Death,
}

/// Event fired when the player's collider touches a region layer.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEvent {
    pub entity: Entity,
    pub region: Region,
}
