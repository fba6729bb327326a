//! Render-facing animation selection.
//!
//! Gameplay systems decide *which* clip an entity should show and whether it
//! is mirrored; frame stepping and drawing belong to the host shell.

use bevy_ecs::prelude::Component;

/// Clips the core can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimKey {
    /// Player standing on ground.
    Idle,
    /// Player walking.
    Walk,
    /// Player airborne.
    Jump,
    /// Enemy resting.
    Still,
    /// Enemy chasing.
    Scurry,
}

impl AnimKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimKey::Idle => "idle",
            AnimKey::Walk => "walk",
            AnimKey::Jump => "jump",
            AnimKey::Still => "still",
            AnimKey::Scurry => "scurry",
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    pub key: AnimKey,
    /// Mirror the sprite horizontally.
    pub flip_h: bool,
}

impl AnimationState {
    pub fn new(key: AnimKey) -> Self {
        Self { key, flip_h: false }
    }

    /// Switch clip; returns true when the clip actually changed.
    pub fn play(&mut self, key: AnimKey) -> bool {
        let changed = self.key != key;
        self.key = key;
        changed
    }
}
