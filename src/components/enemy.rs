//! Enemy agent record.
//!
//! One [`EnemyAgent`] per spawned enemy. The agent is alive for as long as its
//! entity exists; contact with the player despawns it.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetingState {
    #[default]
    Idle,
    Targeting,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct EnemyAgent {
    /// Where the level spawned this enemy.
    pub origin: Vec2,
    /// -1 facing left, +1 facing right.
    pub facing: i8,
    pub state: TargetingState,
    /// Set on the first player contact so a single resolution pass cannot
    /// process the same enemy twice.
    pub has_collided: bool,
}

impl EnemyAgent {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            facing: 1,
            state: TargetingState::Idle,
            has_collided: false,
        }
    }

    pub fn is_targeting(&self) -> bool {
        self.state == TargetingState::Targeting
    }
}
