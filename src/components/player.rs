//! Player-controlled body.
//!
//! [`PlayerController`] holds the per-frame memory of the movement controller:
//! where the last footstep happened, which way the player faces, and the
//! status reported to the shell.

use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementStatus {
    #[default]
    Idle,
    Walking,
    Jumping,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerController {
    /// x coordinate at which the last step notice fired.
    pub last_step_x: f32,
    pub facing_left: bool,
    pub status: MovementStatus,
}

impl PlayerController {
    pub fn new(spawn_x: f32) -> Self {
        Self {
            last_step_x: spawn_x,
            facing_left: false,
            status: MovementStatus::Idle,
        }
    }
}
