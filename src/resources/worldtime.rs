//! Logical simulation clock.
//!
//! Every deferred effect (boost expiry, chest cleanup, guide cooldown) is
//! measured against `elapsed`, never against wall-clock time, so a replayed
//! input script always produces the same frames.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds of simulated time since the world was created.
    pub elapsed: f32,
    /// Scaled length of the current frame in seconds.
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
