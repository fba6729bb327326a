//! Enemy AI constants.

use bevy_ecs::prelude::Resource;

pub const DEFAULT_DETECTION_RANGE: f32 = 200.0;
pub const DEFAULT_FOLLOW_RANGE: f32 = 150.0;
pub const DEFAULT_ENEMY_SPEED: f32 = 80.0;
pub const DEFAULT_CONTACT_DAMAGE: i32 = 20;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct EnemyTuning {
    /// Idle enemies start chasing inside this distance.
    pub detection_range: f32,
    /// Chasing enemies give up beyond this distance.
    pub follow_range: f32,
    pub speed: f32,
    /// Horizontal distance of the ledge probe.
    pub lookahead: f32,
    /// Vertical distance of the ledge probe below the enemy.
    pub drop_check: f32,
    /// Minimum |ny| of the chase direction before vertical pursuit kicks in.
    pub vertical_threshold: f32,
    pub vertical_scale: f32,
    /// Per-frame velocity multiplier while idle.
    pub idle_decay: f32,
    /// Below this speed on both axes an idle enemy snaps to rest.
    pub rest_threshold: f32,
    pub contact_damage: i32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            detection_range: DEFAULT_DETECTION_RANGE,
            follow_range: DEFAULT_FOLLOW_RANGE,
            speed: DEFAULT_ENEMY_SPEED,
            lookahead: 32.0,
            drop_check: 32.0,
            vertical_threshold: 0.3,
            vertical_scale: 0.5,
            idle_decay: 0.9,
            rest_threshold: 5.0,
            contact_damage: DEFAULT_CONTACT_DAMAGE,
        }
    }
}
