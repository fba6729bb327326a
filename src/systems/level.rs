//! Level lifecycle: spawn, tear down, restart, advance.
//!
//! A level is started from its [`LevelData`] by [`start_level`]. Everything it
//! spawns carries [`LevelScoped`], so [`teardown_level`] can sweep it all away
//! together with every pending scheduler entry.
//!
//! Gameplay never switches levels directly. Observers record a
//! [`LevelRequest`] on the [`LevelRunner`] and the exclusive
//! [`apply_pending_level`] system, last in the frame, carries it out.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, error, info};

use crate::components::animation::{AnimKey, AnimationState};
use crate::components::boxcollider::BoxCollider;
use crate::components::enemy::EnemyAgent;
use crate::components::fallingplatform::FallingPlatform;
use crate::components::groundcontact::GroundContact;
use crate::components::group::{self, Group};
use crate::components::interactable::{Chest, Door, GuideBlock, KeyPickup, Solid};
use crate::components::levelscoped::LevelScoped;
use crate::components::mapposition::MapPosition;
use crate::components::player::PlayerController;
use crate::components::rigidbody::{MOVE_FORCE, RigidBody};
use crate::events::level::{LevelRequest, LevelRequestEvent};
use crate::events::notice::GameNotice;
use crate::events::timer::TimerFired;
use crate::resources::boost::BoostState;
use crate::resources::camera::CameraFollow;
use crate::resources::gameconfig::GameConfig;
use crate::resources::levelrunner::LevelRunner;
use crate::resources::levelstore::{LevelData, LevelObject, LevelStore};
use crate::resources::scheduler::{ScheduledAction, Scheduler};
use crate::resources::stats::PlayerStats;
use crate::resources::terrain::TerrainLayers;
use crate::resources::tuning::MovementTuning;

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 32.0);
pub const ENEMY_SIZE: Vec2 = Vec2::new(25.6, 25.6);
pub const KEY_SIZE: Vec2 = Vec2::new(20.0, 20.0);
pub const BLOCK_SIZE: Vec2 = Vec2::new(32.0, 32.0);
pub const DOOR_SIZE: Vec2 = Vec2::new(32.0, 64.0);

/// Stores a level request for the end of the frame.
pub fn level_request_observer(trigger: On<LevelRequestEvent>, mut runner: ResMut<LevelRunner>) {
    let request = trigger.event().0.clone();
    if runner.request(request.clone()) {
        debug!("level request {:?} queued", request);
    }
}

/// Turns a scheduled level transition into a request.
pub fn level_timer_observer(trigger: On<TimerFired>, mut commands: Commands) {
    if let ScheduledAction::Level(request) = &trigger.event().action {
        commands.trigger(LevelRequestEvent(request.clone()));
    }
}

/// Carry out the pending level request, if any.
pub fn apply_pending_level(world: &mut World) {
    let Some(request) = world
        .get_resource_mut::<LevelRunner>()
        .and_then(|mut runner| runner.take_pending())
    else {
        return;
    };
    let target = match request {
        LevelRequest::Restart => world
            .get_resource::<LevelRunner>()
            .and_then(|runner| runner.current.clone()),
        LevelRequest::Advance(Some(key)) => Some(key),
        LevelRequest::Advance(None) => {
            finish_game(world);
            return;
        }
    };
    match target {
        Some(key) => {
            if let Err(e) = start_level(world, &key) {
                error!("{}", e);
            }
        }
        None => debug!("no level running, request ignored"),
    }
}

/// Despawn every level-scoped entity and drop all pending timers.
pub fn teardown_level(world: &mut World) {
    let scoped: Vec<Entity> = world
        .query_filtered::<Entity, With<LevelScoped>>()
        .iter(world)
        .collect();
    debug!("tearing down {} entities", scoped.len());
    for entity in scoped {
        world.despawn(entity);
    }
    if let Some(mut scheduler) = world.get_resource_mut::<Scheduler>() {
        scheduler.clear();
    }
}

/// Tear down whatever is running and start `key` from scratch.
pub fn start_level(world: &mut World, key: &str) -> Result<(), String> {
    let level = world
        .get_resource::<LevelStore>()
        .and_then(|store| store.get(key))
        .cloned()
        .ok_or_else(|| format!("Level '{}' not found", key))?;

    teardown_level(world);

    let config = world.get_resource::<GameConfig>().cloned().unwrap_or_default();
    let spawn = Vec2::new(level.player_spawn.x, level.player_spawn.y);

    world.insert_resource(TerrainLayers::from_tilemap(&level.tilemap, level.scale));
    world.insert_resource(PlayerStats::new(level.keys_required));
    world.insert_resource(config.tuning);
    world.insert_resource(BoostState::default());
    world.insert_resource(config.boost);
    world.insert_resource(config.enemy);
    world.insert_resource(config.camera);
    let mut camera = CameraFollow::new(&config.camera);
    camera.reset(&config.camera, spawn);
    world.insert_resource(camera);

    spawn_level_entities(world, &level, &config.tuning);

    {
        let mut runner = world.get_resource_or_init::<LevelRunner>();
        runner.attempts = if runner.current.as_deref() == Some(key) {
            runner.attempts + 1
        } else {
            1
        };
        runner.current = Some(level.key.clone());
        runner.next = level.next.clone();
        runner.pending = None;
    }

    info!("Level '{}' ({}) started", level.key, level.title);
    world
        .get_resource_or_init::<Messages<GameNotice>>()
        .write(GameNotice::LevelStarted {
            key: level.key.clone(),
            title: level.title.clone(),
        });
    Ok(())
}

fn finish_game(world: &mut World) {
    teardown_level(world);
    {
        let mut runner = world.get_resource_or_init::<LevelRunner>();
        runner.won = true;
        runner.current = None;
        runner.next = None;
    }
    info!("Game won");
    world
        .get_resource_or_init::<Messages<GameNotice>>()
        .write(GameNotice::GameWon);
}

fn spawn_level_entities(world: &mut World, level: &LevelData, tuning: &MovementTuning) {
    let spawn = Vec2::new(level.player_spawn.x, level.player_spawn.y);
    spawn_player(world, spawn, tuning);
    for point in &level.enemy_spawns {
        spawn_enemy(world, Vec2::new(point.x, point.y), tuning.gravity);
    }
    for (index, object) in level.objects.iter().enumerate() {
        spawn_object(world, object, index as u32);
    }
}

pub fn spawn_player(world: &mut World, at: Vec2, tuning: &MovementTuning) -> Entity {
    let mut body = RigidBody::with_gravity(tuning.gravity);
    body.add_force(MOVE_FORCE, Vec2::ZERO);
    body.max_speed_x = Some(tuning.max_speed);
    body.drag.x = tuning.deceleration;
    world
        .spawn((
            MapPosition::new(at.x, at.y),
            body,
            BoxCollider::new(PLAYER_SIZE.x, PLAYER_SIZE.y),
            GroundContact::default(),
            PlayerController::new(at.x),
            AnimationState::new(AnimKey::Idle),
            Group::new(group::PLAYER),
            LevelScoped,
        ))
        .id()
}

pub fn spawn_enemy(world: &mut World, at: Vec2, gravity: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(at.x, at.y),
            RigidBody::with_gravity(gravity),
            BoxCollider::new(ENEMY_SIZE.x, ENEMY_SIZE.y),
            GroundContact::default(),
            EnemyAgent::new(at),
            AnimationState::new(AnimKey::Still),
            Group::new(group::ENEMY),
            LevelScoped,
        ))
        .id()
}

fn spawn_object(world: &mut World, object: &LevelObject, index: u32) -> Entity {
    match object {
        LevelObject::Key { x, y } => world
            .spawn((
                MapPosition::new(*x, *y),
                BoxCollider::new(KEY_SIZE.x, KEY_SIZE.y),
                KeyPickup { id: index },
                Group::new(group::KEY),
                LevelScoped,
            ))
            .id(),
        LevelObject::Chest { x, y } => world
            .spawn((
                MapPosition::new(*x, *y),
                BoxCollider::new(BLOCK_SIZE.x, BLOCK_SIZE.y),
                Chest::default(),
                Group::new(group::CHEST),
                LevelScoped,
            ))
            .id(),
        LevelObject::Door { x, y } => world
            .spawn((
                MapPosition::new(*x, *y),
                BoxCollider::new(DOOR_SIZE.x, DOOR_SIZE.y),
                Door::default(),
                Group::new(group::DOOR),
                LevelScoped,
            ))
            .id(),
        LevelObject::Guide { x, y, message } => world
            .spawn((
                MapPosition::new(*x, *y),
                BoxCollider::new(BLOCK_SIZE.x, BLOCK_SIZE.y),
                GuideBlock::new(message.clone()),
                Solid,
                Group::new(group::GUIDE),
                LevelScoped,
            ))
            .id(),
        LevelObject::FallingPlatform {
            x,
            y,
            delay_ms,
            fall_distance,
        } => world
            .spawn((
                MapPosition::new(*x, *y),
                BoxCollider::new(BLOCK_SIZE.x, BLOCK_SIZE.y),
                FallingPlatform::new(*x, *y, *fall_distance, *delay_ms as f32 / 1000.0),
                Solid,
                Group::new(group::PLATFORM),
                LevelScoped,
            ))
            .id(),
    }
}
