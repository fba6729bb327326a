//! Marker for entities owned by the running level.
//!
//! Every entity spawned by the level runner carries [`LevelScoped`]. When the
//! level is restarted or left, all of them are despawned in one sweep; entities
//! without it (observers, registered systems) survive the transition.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct LevelScoped;
