//! Camera follow smoothing.
//!
//! The core owns only the follow state: where the camera looks, the
//! horizontal look-ahead offset and the zoom level. Viewport transforms are
//! left to the host renderer.
//!
//! Both the offset and the zoom approach their targets by linear
//! interpolation with a factor in (0, 1), so they move monotonically and
//! never overshoot.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

pub const DEFAULT_BASE_ZOOM: f32 = 3.0;
pub const DEFAULT_LOOK_AHEAD: f32 = 50.0;
pub const DEFAULT_OFFSET_LERP: f32 = 0.01;
pub const DEFAULT_FOLLOW_LERP: f32 = 0.1;
pub const DEFAULT_BOOSTED_ZOOM_RATE: f32 = 0.003;
pub const DEFAULT_FAST_ZOOM_RATE: f32 = 0.05;
pub const DEFAULT_SLOW_ZOOM_RATE: f32 = 0.001;
pub const DEFAULT_FAST_ZOOM_THRESHOLD: f32 = 0.1;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub base_zoom: f32,
    /// Horizontal offset toward the direction of travel.
    pub look_ahead: f32,
    pub offset_lerp: f32,
    pub follow_lerp: f32,
    pub boosted_zoom_rate: f32,
    pub fast_zoom_rate: f32,
    pub slow_zoom_rate: f32,
    /// Zoom error above which the fast rate is used.
    pub fast_zoom_threshold: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            base_zoom: DEFAULT_BASE_ZOOM,
            look_ahead: DEFAULT_LOOK_AHEAD,
            offset_lerp: DEFAULT_OFFSET_LERP,
            follow_lerp: DEFAULT_FOLLOW_LERP,
            boosted_zoom_rate: DEFAULT_BOOSTED_ZOOM_RATE,
            fast_zoom_rate: DEFAULT_FAST_ZOOM_RATE,
            slow_zoom_rate: DEFAULT_SLOW_ZOOM_RATE,
            fast_zoom_threshold: DEFAULT_FAST_ZOOM_THRESHOLD,
        }
    }
}

impl CameraConfig {
    /// Zoom interpolation rate for the current error and boost state.
    pub fn zoom_rate(&self, current: f32, target: f32, boosted: bool) -> f32 {
        if boosted {
            self.boosted_zoom_rate
        } else if (current - target).abs() > self.fast_zoom_threshold {
            self.fast_zoom_rate
        } else {
            self.slow_zoom_rate
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraFollow {
    /// World point the camera is centred on (before the look-ahead offset).
    pub position: Vec2,
    pub current_offset_x: f32,
    pub target_offset_x: f32,
    pub current_zoom: f32,
    pub target_zoom: f32,
}

impl CameraFollow {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            current_offset_x: 0.0,
            target_offset_x: 0.0,
            current_zoom: config.base_zoom,
            target_zoom: config.base_zoom,
        }
    }

    /// Fresh state for a new level, snapped onto `focus`.
    pub fn reset(&mut self, config: &CameraConfig, focus: Vec2) {
        *self = Self::new(config);
        self.position = focus;
    }

    /// Advance one frame.
    ///
    /// `direction` is the horizontal input intent (-1, 0, +1).
    pub fn step(&mut self, config: &CameraConfig, direction: i8, boosted: bool, focus: Vec2) {
        self.target_offset_x = f32::from(direction.signum()) * config.look_ahead;
        self.current_offset_x = lerp(self.current_offset_x, self.target_offset_x, config.offset_lerp);

        let rate = config.zoom_rate(self.current_zoom, self.target_zoom, boosted);
        self.current_zoom = lerp(self.current_zoom, self.target_zoom, rate);

        self.position = self.position.lerp(focus, config.follow_lerp);
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_toward_travel_direction() {
        let config = CameraConfig::default();
        let mut cam = CameraFollow::new(&config);
        cam.step(&config, 1, false, Vec2::ZERO);
        assert_eq!(cam.target_offset_x, 50.0);
        assert!((cam.current_offset_x - 0.5).abs() < 1e-6);
        cam.step(&config, -1, false, Vec2::ZERO);
        assert_eq!(cam.target_offset_x, -50.0);
        cam.step(&config, 0, false, Vec2::ZERO);
        assert_eq!(cam.target_offset_x, 0.0);
    }

    #[test]
    fn offset_reaches_roughly_63_percent_after_100_frames() {
        let config = CameraConfig::default();
        let mut cam = CameraFollow::new(&config);
        for _ in 0..100 {
            cam.step(&config, 1, false, Vec2::ZERO);
        }
        let fraction = cam.current_offset_x / 50.0;
        assert!(fraction > 0.6 && fraction < 0.66, "fraction was {fraction}");
    }

    #[test]
    fn zoom_rate_has_three_tiers() {
        let config = CameraConfig::default();
        assert_eq!(config.zoom_rate(3.0, 2.5, true), 0.003);
        assert_eq!(config.zoom_rate(2.5, 3.0, false), 0.05);
        assert_eq!(config.zoom_rate(2.95, 3.0, false), 0.001);
    }

    #[test]
    fn boosted_zoom_decreases_without_undershoot() {
        let config = CameraConfig::default();
        let mut cam = CameraFollow::new(&config);
        cam.target_zoom = 2.5;
        let mut previous = cam.current_zoom;
        for _ in 0..600 {
            cam.step(&config, 0, true, Vec2::ZERO);
            assert!(cam.current_zoom < previous);
            assert!(cam.current_zoom >= 2.5);
            previous = cam.current_zoom;
        }
    }

    #[test]
    fn reset_snaps_to_focus_and_base_zoom() {
        let config = CameraConfig::default();
        let mut cam = CameraFollow::new(&config);
        cam.current_zoom = 2.7;
        cam.current_offset_x = 20.0;
        cam.reset(&config, Vec2::new(10.0, 20.0));
        assert_eq!(cam.position, Vec2::new(10.0, 20.0));
        assert_eq!(cam.current_zoom, 3.0);
        assert_eq!(cam.current_offset_x, 0.0);
    }
}
