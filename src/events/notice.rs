//! Notices for the host shell.
//!
//! Everything the shell needs to react to (sounds, HUD text, particles)
//! arrives as a [`GameNotice`] message. None of them feed back into game
//! state.

use bevy_ecs::message::Message;

#[derive(Message, Debug, Clone, PartialEq)]
pub enum GameNotice {
    /// The player covered another stride on the ground.
    Step,
    Jumped,
    /// An enemy hit the player; `health` is what remains.
    Damaged { health: i32 },
    EnemyDefeated,
    BoostActivated,
    BoostExpired,
    KeyCollected { collected: u32, required: u32 },
    ChestOpened { coins: u32 },
    DoorOpened,
    /// The exit was tried without enough keys.
    DoorLocked { missing: u32 },
    GuideShown { message: String },
    PlayerDied,
    LevelStarted { key: String, title: String },
    GameWon,
}
