//! Level transition requests.
//!
//! Triggered by death, exhausted health, or the exit door. The request is
//! stored and applied at the end of the frame by
//! [`apply_pending_level`](crate::systems::level::apply_pending_level), so
//! no system sees a half-torn-down level.

use bevy_ecs::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelRequest {
    /// Start the current level over.
    Restart,
    /// Go to the named level, or finish the game when `None`.
    Advance(Option<String>),
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct LevelRequestEvent(pub LevelRequest);
