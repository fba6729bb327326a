//! Input systems.
//!
//! - [`update_input_state`] folds the snapshot the host shell pushed for this
//!   frame into [`crate::resources::input::InputState`], deriving the
//!   `just_pressed` / `just_released` edges.
use bevy_ecs::prelude::*;
use log::trace;

use crate::resources::input::{InputState, PendingInput};

/// Apply the pending [`InputSnapshot`](crate::resources::input::InputSnapshot).
pub fn update_input_state(pending: Res<PendingInput>, mut input: ResMut<InputState>) {
    input.apply(pending.0);
    if input.jump.just_pressed {
        trace!("jump pressed");
    }
}
