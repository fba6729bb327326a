use bevy_ecs::prelude::Component;

/// Names the category an entity belongs to ("player", "enemy", "key", ...).
///
/// The collision detector only reports contacts with categories that react to them.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);

impl Group {
    pub fn new(name: &'static str) -> Self {
        Group(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

pub const PLAYER: &str = "player";
pub const ENEMY: &str = "enemy";
pub const KEY: &str = "key";
pub const CHEST: &str = "chest";
pub const DOOR: &str = "door";
pub const GUIDE: &str = "guide";
pub const PLATFORM: &str = "platform";
pub const TEXT: &str = "text";
