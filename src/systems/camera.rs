//! Camera follow system.
//!
//! Feeds the player's position, the horizontal input intent and the boost
//! flag into [`CameraFollow::step`] once per frame. Without a player the
//! camera keeps easing toward where it already is.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::PlayerController;
use crate::resources::boost::BoostState;
use crate::resources::camera::{CameraConfig, CameraFollow};
use crate::resources::input::InputState;

pub fn camera_follow_system(
    input: Res<InputState>,
    boost: Res<BoostState>,
    config: Res<CameraConfig>,
    mut camera: ResMut<CameraFollow>,
    player: Query<&MapPosition, With<PlayerController>>,
) {
    let focus = player.single().map(|p| p.pos).unwrap_or(camera.position);
    camera.step(&config, input.horizontal(), boost.active, focus);
}
