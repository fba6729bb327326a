//! Short-lived world-space text ("+1", "uppies!", "80/100").
//!
//! The core only tracks the text, its position and lifespan; drawing and
//! fading are the host shell's job. Spawned together with a
//! [`Ttl`](super::ttl::Ttl), a [`MapPosition`](super::mapposition::MapPosition)
//! and the [`LevelScoped`](super::levelscoped::LevelScoped) marker.

use bevy_ecs::prelude::Component;

/// Upward drift of floating text in world units per second.
pub const DEFAULT_RISE_SPEED: f32 = 40.0;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct FloatingText {
    pub text: String,
    /// Upward drift in world units per second (y decreases).
    pub rise_speed: f32,
}

impl FloatingText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rise_speed: DEFAULT_RISE_SPEED,
        }
    }

    pub fn with_rise_speed(mut self, rise_speed: f32) -> Self {
        self.rise_speed = rise_speed;
        self
    }
}

/// Marks the "Key needed!" hint so only one is alive at a time.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct KeyHint;
