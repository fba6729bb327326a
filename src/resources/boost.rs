//! Jump-boost buff state.
//!
//! A boost swaps in the boosted jump height, scales acceleration down and
//! pulls the camera out, all for a fixed duration. While it is active further
//! booster contacts are ignored, so the multiplier never stacks and the timer
//! never restarts.
//!
//! Expiry restores the tuning from a snapshot taken at activation rather than
//! by inverting the multiplier.

use bevy_ecs::prelude::Resource;

use crate::resources::camera::CameraFollow;
use crate::resources::scheduler::TimerToken;
use crate::resources::tuning::MovementTuning;

pub const DEFAULT_BOOST_DURATION: f32 = 2.5;
pub const DEFAULT_BOOST_ACCELERATION_FACTOR: f32 = 0.5;
pub const DEFAULT_BOOSTED_ZOOM: f32 = 2.5;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct BoostConfig {
    /// Seconds the boost lasts.
    pub duration: f32,
    pub acceleration_factor: f32,
    pub zoom: f32,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_BOOST_DURATION,
            acceleration_factor: DEFAULT_BOOST_ACCELERATION_FACTOR,
            zoom: DEFAULT_BOOSTED_ZOOM,
        }
    }
}

/// Tuning values overwritten by a boost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningSnapshot {
    pub acceleration: f32,
    pub jump_boosted: bool,
    pub zoom_target: f32,
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct BoostState {
    pub active: bool,
    /// Pending expiry on the scheduler.
    pub timer: Option<TimerToken>,
    /// Zoom target applied while boosted.
    pub applied_zoom: f32,
    snapshot: Option<TuningSnapshot>,
}

impl BoostState {
    /// Apply the boost. Returns false, touching nothing, if one is already active.
    pub fn activate(
        &mut self,
        tuning: &mut MovementTuning,
        camera: &mut CameraFollow,
        config: &BoostConfig,
    ) -> bool {
        if self.active {
            return false;
        }
        self.snapshot = Some(TuningSnapshot {
            acceleration: tuning.acceleration,
            jump_boosted: tuning.jump_boosted,
            zoom_target: camera.target_zoom,
        });
        tuning.jump_boosted = true;
        tuning.acceleration *= config.acceleration_factor;
        camera.target_zoom = config.zoom;
        self.applied_zoom = config.zoom;
        self.active = true;
        true
    }

    /// Undo the boost. Returns false if none was active.
    pub fn expire(&mut self, tuning: &mut MovementTuning, camera: &mut CameraFollow) -> bool {
        if !self.active {
            return false;
        }
        if let Some(snapshot) = self.snapshot.take() {
            tuning.acceleration = snapshot.acceleration;
            tuning.jump_boosted = snapshot.jump_boosted;
            camera.target_zoom = snapshot.zoom_target;
        }
        self.active = false;
        self.timer = None;
        true
    }

    pub fn snapshot(&self) -> Option<&TuningSnapshot> {
        self.snapshot.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::camera::CameraConfig;

    fn setup() -> (BoostState, MovementTuning, CameraFollow, BoostConfig) {
        let camera = CameraFollow::new(&CameraConfig::default());
        (
            BoostState::default(),
            MovementTuning::default(),
            camera,
            BoostConfig::default(),
        )
    }

    #[test]
    fn activation_swaps_jump_and_halves_acceleration() {
        let (mut boost, mut tuning, mut camera, config) = setup();
        assert!(boost.activate(&mut tuning, &mut camera, &config));
        assert!(boost.active);
        assert_eq!(tuning.jump_height(), tuning.boosted_jump_height);
        assert_eq!(tuning.acceleration, 200.0);
        assert_eq!(camera.target_zoom, 2.5);
        assert_eq!(boost.applied_zoom, 2.5);
    }

    #[test]
    fn repeated_activation_does_not_stack() {
        let (mut boost, mut tuning, mut camera, config) = setup();
        boost.activate(&mut tuning, &mut camera, &config);
        for _ in 0..5 {
            assert!(!boost.activate(&mut tuning, &mut camera, &config));
        }
        assert_eq!(tuning.acceleration, 400.0 * 0.5);
    }

    #[test]
    fn expiry_restores_snapshot_even_after_outside_mutation() {
        let (mut boost, mut tuning, mut camera, config) = setup();
        boost.activate(&mut tuning, &mut camera, &config);
        tuning.acceleration = 123.0;
        assert!(boost.expire(&mut tuning, &mut camera));
        assert_eq!(tuning.acceleration, 400.0);
        assert!(!tuning.jump_boosted);
        assert_eq!(camera.target_zoom, 3.0);
        assert!(boost.snapshot().is_none());
        assert!(!boost.expire(&mut tuning, &mut camera));
    }
}
