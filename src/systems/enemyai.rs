//! Enemy chase AI.
//!
//! Each frame every [`EnemyAgent`] measures its distance to the player and
//! applies range hysteresis: an idle enemy starts chasing inside the detection
//! range, a chasing enemy gives up beyond the (shorter) follow range. Both
//! checks run in the same frame, in that order. Giving up stops the enemy on
//! the spot.
//!
//! While chasing, the enemy moves along the normalized direction to the
//! player at a fixed speed. Before stepping forward it probes the terrain one
//! lookahead ahead and one drop below; a grounded enemy with nothing there
//! stops instead of walking off the ledge. Vertical pursuit only kicks in when
//! the player is clearly above or below.
//!
//! While idle, velocity decays geometrically and snaps to rest once both axes
//! are slow enough.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::animation::{AnimKey, AnimationState};
use crate::components::enemy::{EnemyAgent, TargetingState};
use crate::components::groundcontact::GroundContact;
use crate::components::mapposition::MapPosition;
use crate::components::player::PlayerController;
use crate::components::rigidbody::RigidBody;
use crate::resources::enemytuning::EnemyTuning;
use crate::resources::terrain::{TerrainLayers, TerrainQuery, TileLayer};

/// One AI update for a single enemy.
///
/// Writes the new velocity and returns the clip to show, or `None` to keep
/// the current one.
pub fn steer_enemy(
    agent: &mut EnemyAgent,
    position: Vec2,
    velocity: &mut Vec2,
    grounded: bool,
    player: Vec2,
    terrain: &impl TerrainQuery,
    tuning: &EnemyTuning,
) -> Option<AnimKey> {
    let distance = position.distance(player);
    if distance <= tuning.detection_range && !agent.is_targeting() {
        agent.state = TargetingState::Targeting;
    }
    if distance > tuning.follow_range && agent.is_targeting() {
        agent.state = TargetingState::Idle;
        *velocity = Vec2::ZERO;
        return Some(AnimKey::Still);
    }

    if !agent.is_targeting() {
        *velocity *= tuning.idle_decay;
        if velocity.x.abs() < tuning.rest_threshold && velocity.y.abs() < tuning.rest_threshold {
            *velocity = Vec2::ZERO;
            return Some(AnimKey::Still);
        }
        return None;
    }

    let direction = player - position;
    let magnitude = direction.length();
    if magnitude == 0.0 {
        return None;
    }
    let n = direction / magnitude;

    let probe_x = if n.x > 0.0 {
        position.x + tuning.lookahead
    } else {
        position.x - tuning.lookahead
    };
    let at_ledge = grounded && !terrain.has_tile_at(probe_x, position.y + tuning.drop_check);
    velocity.x = if at_ledge { 0.0 } else { n.x * tuning.speed };

    if n.y.abs() > tuning.vertical_threshold {
        velocity.y = n.y * tuning.speed * tuning.vertical_scale;
    }

    if n.x > 0.0 {
        agent.facing = 1;
    } else if n.x < 0.0 {
        agent.facing = -1;
    }

    Some(AnimKey::Scurry)
}

pub fn enemy_ai_system(
    mut enemies: Query<
        (
            Entity,
            &mut EnemyAgent,
            &MapPosition,
            &mut RigidBody,
            &mut AnimationState,
            Option<&GroundContact>,
        ),
        Without<PlayerController>,
    >,
    player: Query<&MapPosition, With<PlayerController>>,
    terrain: Option<Res<TerrainLayers>>,
    tuning: Res<EnemyTuning>,
) {
    let Ok(player) = player.single() else {
        return;
    };
    let fallback = TileLayer::default();
    let ground = terrain.as_deref().map(|t| &t.base).unwrap_or(&fallback);

    for (entity, mut agent, position, mut body, mut animation, contact) in enemies.iter_mut() {
        let before = agent.state;
        let mut velocity = body.velocity;
        let clip = steer_enemy(
            &mut agent,
            position.pos,
            &mut velocity,
            GroundContact::is_grounded(contact),
            player.pos,
            ground,
            &tuning,
        );
        body.velocity = velocity;

        if agent.state != before {
            debug!("enemy {:?}: {:?} -> {:?}", entity, before, agent.state);
        }
        if let Some(clip) = clip {
            animation.play(clip);
        }
        animation.flip_h = agent.facing < 0;
    }
}
