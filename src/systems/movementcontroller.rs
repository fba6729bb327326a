//! Player movement controller.
//!
//! Translates [`InputState`] into the player's horizontal acceleration, drag,
//! speed cap and jump impulse, using the ground or air pair from
//! [`MovementTuning`] depending on the body's [`GroundContact`].
//!
//! The controller never moves the body itself; it only shapes the
//! [`RigidBody`] that [`movement`](crate::systems::movement::movement) and
//! [`resolve_terrain`](crate::systems::tilecollision::resolve_terrain) integrate
//! afterwards.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::animation::{AnimKey, AnimationState};
use crate::components::groundcontact::GroundContact;
use crate::components::mapposition::MapPosition;
use crate::components::player::{MovementStatus, PlayerController};
use crate::components::rigidbody::{MOVE_FORCE, RigidBody};
use crate::events::notice::GameNotice;
use crate::resources::input::InputState;
use crate::resources::tuning::MovementTuning;

/// What a single controller update produced besides body changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerOutcome {
    pub stepped: bool,
    pub jumped: bool,
}

/// Apply one frame of input to a player body.
///
/// `x` is the body's current horizontal position, used for step tracking.
pub fn drive_player(
    body: &mut RigidBody,
    controller: &mut PlayerController,
    x: f32,
    grounded: bool,
    input: &InputState,
    tuning: &MovementTuning,
) -> ControllerOutcome {
    let mut outcome = ControllerOutcome::default();
    let (acceleration, deceleration) = tuning.accel_pair(grounded);
    let direction = input.horizontal();

    body.max_speed_x = Some(tuning.max_speed);
    // Drag only bites on an axis with no acceleration, i.e. when no direction is held.
    body.drag.x = deceleration;

    match direction {
        d if d < 0 => {
            body.add_force(MOVE_FORCE, Vec2::new(-acceleration, 0.0));
            controller.facing_left = true;
        }
        d if d > 0 => {
            body.add_force(MOVE_FORCE, Vec2::new(acceleration, 0.0));
            controller.facing_left = false;
        }
        _ => body.add_force(MOVE_FORCE, Vec2::ZERO),
    }
    body.clamp_horizontal();

    if grounded && direction != 0 && (x - controller.last_step_x).abs() >= tuning.step_distance {
        controller.last_step_x = x;
        outcome.stepped = true;
    }

    if grounded && input.jump.just_pressed {
        body.velocity.y = tuning.jump_height();
        outcome.jumped = true;
    }

    controller.status = if !grounded || outcome.jumped {
        MovementStatus::Jumping
    } else if direction != 0 {
        MovementStatus::Walking
    } else {
        MovementStatus::Idle
    };

    outcome
}

fn clip_for(status: MovementStatus) -> AnimKey {
    match status {
        MovementStatus::Idle => AnimKey::Idle,
        MovementStatus::Walking => AnimKey::Walk,
        MovementStatus::Jumping => AnimKey::Jump,
    }
}

/// Drive every player-controlled body from the current input.
pub fn movement_controller(
    mut query: Query<(
        &MapPosition,
        &mut RigidBody,
        &mut PlayerController,
        &mut AnimationState,
        Option<&GroundContact>,
    )>,
    input: Res<InputState>,
    tuning: Res<MovementTuning>,
    mut notices: MessageWriter<GameNotice>,
) {
    for (position, mut body, mut controller, mut animation, contact) in query.iter_mut() {
        let grounded = GroundContact::is_grounded(contact);
        let outcome = drive_player(
            &mut body,
            &mut controller,
            position.pos.x,
            grounded,
            &input,
            &tuning,
        );

        if outcome.stepped {
            notices.write(GameNotice::Step);
        }
        if outcome.jumped {
            debug!("jump, vy = {}", body.velocity.y);
            notices.write(GameNotice::Jumped);
        }

        animation.play(clip_for(controller.status));
        animation.flip_h = controller.facing_left;
    }
}
