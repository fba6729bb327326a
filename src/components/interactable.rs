//! Level objects the player can pick up, open, or touch.
//!
//! Each category has its own record holding only the fields it needs.

use bevy_ecs::prelude::Component;

/// Collectible key. `id` is unique within the level.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPickup {
    pub id: u32,
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chest {
    pub opened: bool,
    /// Player is close enough to see the "Press E" prompt.
    pub near_player: bool,
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Door {
    pub opened: bool,
    /// Player is close enough to see the "Press F" prompt.
    pub near_player: bool,
}

/// Block that shows a hint message when touched.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct GuideBlock {
    pub message: String,
    pub lit: bool,
}

impl GuideBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            lit: false,
        }
    }
}

/// Collider that bodies stand on and bump into (guide blocks, falling platforms).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Solid;
