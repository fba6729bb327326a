//! Player movement constants.
//!
//! [`MovementTuning`] is owned by the running level. Only the boost modifier
//! mutates it, and it is rebuilt from the configured base values whenever a
//! level (re)starts.

use bevy_ecs::prelude::Resource;

pub const DEFAULT_ACCELERATION: f32 = 400.0;
pub const DEFAULT_MAX_SPEED: f32 = 200.0;
pub const DEFAULT_DECELERATION: f32 = 10_000.0;
pub const DEFAULT_GRAVITY: f32 = 2_000.0;
pub const DEFAULT_BASE_JUMP_HEIGHT: f32 = -600.0;
pub const DEFAULT_BOOSTED_JUMP_HEIGHT: f32 = -1_200.0;
pub const DEFAULT_STEP_DISTANCE: f32 = 64.0;

/// Air acceleration as a fraction of ground acceleration.
pub const AIR_ACCELERATION_RATIO: f32 = 0.5;
/// Air deceleration as a multiple of ground deceleration.
pub const AIR_DECELERATION_RATIO: f32 = 2.0;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MovementTuning {
    pub acceleration: f32,
    pub max_speed: f32,
    pub deceleration: f32,
    pub air_acceleration: f32,
    pub air_deceleration: f32,
    pub gravity: f32,
    /// Upward launch speed (negative, y grows downward).
    pub base_jump_height: f32,
    pub boosted_jump_height: f32,
    /// Selects the boosted jump height. Exactly one height is active.
    pub jump_boosted: bool,
    /// Grounded travel between two step notices.
    pub step_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_base(
            DEFAULT_ACCELERATION,
            DEFAULT_MAX_SPEED,
            DEFAULT_DECELERATION,
            DEFAULT_GRAVITY,
            DEFAULT_BASE_JUMP_HEIGHT,
            DEFAULT_BOOSTED_JUMP_HEIGHT,
        )
    }
}

impl MovementTuning {
    /// Build a tuning set; air values derive from the ground values at fixed ratios.
    pub fn from_base(
        acceleration: f32,
        max_speed: f32,
        deceleration: f32,
        gravity: f32,
        base_jump_height: f32,
        boosted_jump_height: f32,
    ) -> Self {
        Self {
            acceleration,
            max_speed,
            deceleration,
            air_acceleration: acceleration * AIR_ACCELERATION_RATIO,
            air_deceleration: deceleration * AIR_DECELERATION_RATIO,
            gravity,
            base_jump_height,
            boosted_jump_height,
            jump_boosted: false,
            step_distance: DEFAULT_STEP_DISTANCE,
        }
    }

    pub fn jump_height(&self) -> f32 {
        if self.jump_boosted {
            self.boosted_jump_height
        } else {
            self.base_jump_height
        }
    }

    /// (acceleration, deceleration) for the given ground contact.
    pub fn accel_pair(&self, grounded: bool) -> (f32, f32) {
        if grounded {
            (self.acceleration, self.deceleration)
        } else {
            (self.air_acceleration, self.air_deceleration)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_values_use_fixed_ratios() {
        let t = MovementTuning::default();
        assert_eq!(t.air_acceleration, 200.0);
        assert_eq!(t.air_deceleration, 20_000.0);
        assert_eq!(t.accel_pair(true), (400.0, 10_000.0));
        assert_eq!(t.accel_pair(false), (200.0, 20_000.0));
    }

    #[test]
    fn jump_flag_selects_exactly_one_height() {
        let mut t = MovementTuning::default();
        assert_eq!(t.jump_height(), DEFAULT_BASE_JUMP_HEIGHT);
        t.jump_boosted = true;
        assert_eq!(t.jump_height(), DEFAULT_BOOSTED_JUMP_HEIGHT);
    }
}
