//! Player contact detection and the observers reacting to it.
//!
//! [`collision_detector`] runs after terrain resolution. It grows the
//! player's collider by [`CONTACT_MARGIN`] so resting on something counts as
//! touching it, then triggers:
//! - a [`CollisionEvent`] for every entity whose category reacts to contact
//! - a [`RegionEvent`] for each special tile layer the player touches
//!
//! Each observer below handles one category and ignores events whose `b`
//! entity lacks its component, so they can all listen to the same event.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};

use crate::components::boxcollider::BoxCollider;
use crate::components::enemy::EnemyAgent;
use crate::components::fallingplatform::{FallingPlatform, PlatformPhase};
use crate::components::group::{self, Group};
use crate::components::interactable::{GuideBlock, KeyPickup};
use crate::components::mapposition::MapPosition;
use crate::components::player::PlayerController;
use crate::events::collision::{CollisionEvent, Region, RegionEvent};
use crate::events::level::{LevelRequest, LevelRequestEvent};
use crate::events::notice::GameNotice;
use crate::resources::enemytuning::EnemyTuning;
use crate::resources::scheduler::{ScheduledAction, Scheduler};
use crate::resources::stats::{MAX_HEALTH, PlayerStats};
use crate::resources::terrain::TerrainLayers;
use crate::resources::worldtime::WorldTime;
use crate::systems::floatingtext::spawn_floating_text;

/// How far outside its box the player still touches things.
pub const CONTACT_MARGIN: f32 = 1.0;
/// Seconds a guide block stays lit after showing its message.
pub const GUIDE_LIT_DURATION: f32 = 3.5;

const REACTIVE_GROUPS: [&str; 4] = [group::ENEMY, group::KEY, group::GUIDE, group::PLATFORM];

pub fn collision_detector(
    players: Query<(Entity, &MapPosition, &BoxCollider), With<PlayerController>>,
    others: Query<(Entity, &MapPosition, &BoxCollider, &Group), Without<PlayerController>>,
    terrain: Option<Res<TerrainLayers>>,
    mut commands: Commands,
) {
    for (player, player_pos, player_collider) in players.iter() {
        let reach = player_collider.inflated(CONTACT_MARGIN);

        for (other, other_pos, other_collider, group) in others.iter() {
            if !REACTIVE_GROUPS.contains(&group.name()) {
                continue;
            }
            if reach.overlaps(player_pos.pos, other_collider, other_pos.pos) {
                commands.trigger(CollisionEvent { a: player, b: other });
            }
        }

        if let Some(terrain) = terrain.as_deref() {
            let (min, max) = reach.aabb(player_pos.pos);
            if terrain.booster.overlaps_box(min, max) {
                commands.trigger(RegionEvent {
                    entity: player,
                    region: Region::Booster,
                });
            }
            if terrain.death.overlaps_box(min, max) {
                commands.trigger(RegionEvent {
                    entity: player,
                    region: Region::Death,
                });
            }
        }
    }
}

/// Enemy contact: one-shot damage, then the enemy is gone.
pub fn enemy_contact_observer(
    trigger: On<CollisionEvent>,
    mut enemies: Query<&mut EnemyAgent>,
    positions: Query<&MapPosition>,
    tuning: Res<EnemyTuning>,
    mut stats: ResMut<PlayerStats>,
    mut scheduler: ResMut<Scheduler>,
    mut notices: MessageWriter<GameNotice>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok(mut agent) = enemies.get_mut(event.b) else {
        return;
    };
    if agent.has_collided {
        return;
    }
    agent.has_collided = true;

    let health = stats.take_damage(tuning.contact_damage);
    debug!("enemy {:?} hit the player, health {}", event.b, health);
    notices.write(GameNotice::Damaged { health });
    notices.write(GameNotice::EnemyDefeated);

    if let Ok(position) = positions.get(event.a) {
        spawn_floating_text(
            &mut commands,
            position.pos + Vec2::new(0.0, -30.0),
            format!("{}/{}", health, MAX_HEALTH),
            1.0,
        );
    }

    scheduler.cancel_owned_by(event.b);
    commands.entity(event.b).try_despawn();

    if stats.is_dead() {
        info!("player out of health");
        notices.write(GameNotice::PlayerDied);
        commands.trigger(LevelRequestEvent(LevelRequest::Restart));
    }
}

/// Key pickup: counted once per key id.
pub fn key_pickup_observer(
    trigger: On<CollisionEvent>,
    keys: Query<(&KeyPickup, &MapPosition)>,
    mut stats: ResMut<PlayerStats>,
    mut notices: MessageWriter<GameNotice>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok((key, position)) = keys.get(event.b) else {
        return;
    };
    if !stats.collect_key(key.id) {
        return;
    }
    let collected = stats.keys_collected();
    let required = stats.keys_required;
    info!("key {} collected ({}/{})", key.id, collected, required);
    notices.write(GameNotice::KeyCollected {
        collected,
        required,
    });
    let label = if required > 1 {
        format!("Key {}/{}", collected, required)
    } else {
        "Key found!".to_string()
    };
    spawn_floating_text(
        &mut commands,
        position.pos + Vec2::new(0.0, -30.0),
        label,
        1.0,
    );
    commands.entity(event.b).try_despawn();
}

/// Guide block: show its message, rate limited by the guide cooldown.
pub fn guide_observer(
    trigger: On<CollisionEvent>,
    mut guides: Query<(&mut GuideBlock, &MapPosition)>,
    time: Res<WorldTime>,
    mut stats: ResMut<PlayerStats>,
    mut scheduler: ResMut<Scheduler>,
    mut notices: MessageWriter<GameNotice>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok((mut guide, position)) = guides.get_mut(event.b) else {
        return;
    };
    if !stats.try_trigger_guide(time.elapsed) {
        return;
    }
    guide.lit = true;
    notices.write(GameNotice::GuideShown {
        message: guide.message.clone(),
    });
    spawn_floating_text(
        &mut commands,
        position.pos + Vec2::new(0.0, -50.0),
        guide.message.clone(),
        GUIDE_LIT_DURATION + 1.0,
    );
    scheduler.schedule(
        time.elapsed,
        GUIDE_LIT_DURATION,
        ScheduledAction::GuideReset,
        Some(event.b),
    );
}

/// Falling platform: the first touch arms it.
pub fn platform_contact_observer(
    trigger: On<CollisionEvent>,
    mut platforms: Query<&mut FallingPlatform>,
    time: Res<WorldTime>,
    mut scheduler: ResMut<Scheduler>,
) {
    let event = trigger.event();
    let Ok(mut platform) = platforms.get_mut(event.b) else {
        return;
    };
    if platform.phase != PlatformPhase::Resting {
        return;
    }
    platform.phase = PlatformPhase::Armed;
    scheduler.schedule(
        time.elapsed,
        platform.delay,
        ScheduledAction::PlatformFall,
        Some(event.b),
    );
}

/// Death region: straight back to the start of the level.
pub fn death_region_observer(
    trigger: On<RegionEvent>,
    mut notices: MessageWriter<GameNotice>,
    mut commands: Commands,
) {
    if trigger.event().region != Region::Death {
        return;
    }
    info!("player touched a death tile");
    notices.write(GameNotice::PlayerDied);
    commands.trigger(LevelRequestEvent(LevelRequest::Restart));
}
