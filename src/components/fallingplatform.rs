//! Platform that drops away after being stepped on.
//!
//! Lifecycle: `Resting` until the player lands on it, `Armed` while the
//! pre-fall delay runs on the scheduler, `Falling` for the drop itself. The
//! entity is despawned when the drop completes.

use bevy_ecs::prelude::Component;

/// Duration of the drop in seconds.
pub const FALL_DURATION: f32 = 2.0;
/// Duration of the shake at the start of the drop in seconds.
pub const SHAKE_DURATION: f32 = 0.4;
/// Maximum horizontal shake offset in world units.
pub const SHAKE_AMPLITUDE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PlatformPhase {
    #[default]
    Resting,
    Armed,
    Falling {
        elapsed: f32,
    },
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FallingPlatform {
    pub origin_x: f32,
    pub origin_y: f32,
    pub fall_distance: f32,
    /// Delay between the first touch and the drop, in seconds.
    pub delay: f32,
    pub phase: PlatformPhase,
}

impl FallingPlatform {
    pub fn new(origin_x: f32, origin_y: f32, fall_distance: f32, delay: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            fall_distance,
            delay,
            phase: PlatformPhase::Resting,
        }
    }

    /// Vertical offset after `elapsed` seconds of falling (quadratic ease-in).
    pub fn drop_offset(&self, elapsed: f32) -> f32 {
        let t = (elapsed / FALL_DURATION).clamp(0.0, 1.0);
        self.fall_distance * t * t
    }
}
