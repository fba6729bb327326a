//! Proximity interactions: chests and the exit door.
//!
//! Both are driven by distance to the player rather than by contact. The
//! `near_player` flags tell the shell when to draw the "Press E" / "Press F"
//! prompts.
//!
//! Timer observers for the deferred halves of these interactions (chest
//! removal, guide light reset) live here too.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};

use crate::components::floatingtext::KeyHint;
use crate::components::interactable::{Chest, Door, GuideBlock};
use crate::components::mapposition::MapPosition;
use crate::components::player::PlayerController;
use crate::events::level::LevelRequest;
use crate::events::notice::GameNotice;
use crate::events::timer::TimerFired;
use crate::resources::input::InputState;
use crate::resources::levelrunner::LevelRunner;
use crate::resources::scheduler::{ScheduledAction, Scheduler};
use crate::resources::stats::PlayerStats;
use crate::resources::worldtime::WorldTime;
use crate::systems::floatingtext::spawn_floating_text;

pub const CHEST_RANGE: f32 = 60.0;
pub const DOOR_RANGE: f32 = 80.0;
/// Seconds an opened chest lingers before it is removed.
pub const CHEST_LINGER: f32 = 1.0;
/// Seconds between opening the door and leaving the level.
pub const DOOR_EXIT_DELAY: f32 = 0.5;
pub const KEY_HINT_LIFESPAN: f32 = 1.5;

pub fn chest_interaction_system(
    input: Res<InputState>,
    time: Res<WorldTime>,
    player: Query<&MapPosition, With<PlayerController>>,
    mut chests: Query<(Entity, &MapPosition, &mut Chest), Without<PlayerController>>,
    mut stats: ResMut<PlayerStats>,
    mut scheduler: ResMut<Scheduler>,
    mut notices: MessageWriter<GameNotice>,
    mut commands: Commands,
) {
    let Ok(player) = player.single() else {
        return;
    };
    for (entity, position, mut chest) in chests.iter_mut() {
        if chest.opened {
            continue;
        }
        let near = position.distance(player) < CHEST_RANGE;
        if chest.near_player != near {
            chest.near_player = near;
        }
        if !near || !input.interact.just_pressed {
            continue;
        }

        chest.opened = true;
        chest.near_player = false;
        stats.coins += 1;
        info!("chest opened, coins {}", stats.coins);
        notices.write(GameNotice::ChestOpened { coins: stats.coins });
        spawn_floating_text(
            &mut commands,
            position.pos + Vec2::new(0.0, -40.0),
            "+1",
            1.0,
        );
        scheduler.schedule(
            time.elapsed,
            CHEST_LINGER,
            ScheduledAction::DespawnChest,
            Some(entity),
        );
    }
}

pub fn door_interaction_system(
    input: Res<InputState>,
    time: Res<WorldTime>,
    player: Query<&MapPosition, With<PlayerController>>,
    mut doors: Query<(Entity, &MapPosition, &mut Door), Without<PlayerController>>,
    hints: Query<(), With<KeyHint>>,
    stats: Res<PlayerStats>,
    runner: Res<LevelRunner>,
    mut scheduler: ResMut<Scheduler>,
    mut notices: MessageWriter<GameNotice>,
    mut commands: Commands,
) {
    let Ok(player) = player.single() else {
        return;
    };
    for (entity, position, mut door) in doors.iter_mut() {
        let near = !door.opened && position.distance(player) < DOOR_RANGE;
        if door.near_player != near {
            door.near_player = near;
        }
        if !near || !input.door.just_pressed {
            continue;
        }

        let missing = stats.keys_missing();
        if missing == 0 {
            door.opened = true;
            door.near_player = false;
            info!("door opened, leaving for {:?}", runner.next);
            notices.write(GameNotice::DoorOpened);
            spawn_floating_text(
                &mut commands,
                position.pos + Vec2::new(0.0, -50.0),
                "Door Unlocked!",
                1.0,
            );
            scheduler.schedule(
                time.elapsed,
                DOOR_EXIT_DELAY,
                ScheduledAction::Level(LevelRequest::Advance(runner.next.clone())),
                Some(entity),
            );
        } else if hints.is_empty() {
            debug!("door locked, {} keys missing", missing);
            notices.write(GameNotice::DoorLocked { missing });
            let hint = if stats.keys_required > 1 {
                format!("Need {} more key{}!", missing, if missing == 1 { "" } else { "s" })
            } else {
                "Key needed!".to_string()
            };
            let text = spawn_floating_text(
                &mut commands,
                position.pos + Vec2::new(0.0, -50.0),
                hint,
                KEY_HINT_LIFESPAN,
            );
            commands.entity(text).insert(KeyHint);
        }
    }
}

/// Removes chests whose linger time ran out.
pub fn chest_timer_observer(trigger: On<TimerFired>, mut commands: Commands) {
    let event = trigger.event();
    if event.action != ScheduledAction::DespawnChest {
        return;
    }
    if let Some(chest) = event.owner {
        commands.entity(chest).try_despawn();
    }
}

/// Turns a guide block's light back off.
pub fn guide_timer_observer(trigger: On<TimerFired>, mut guides: Query<&mut GuideBlock>) {
    let event = trigger.event();
    if event.action != ScheduledAction::GuideReset {
        return;
    }
    if let Some(mut guide) = event.owner.and_then(|e| guides.get_mut(e).ok()) {
        guide.lit = false;
    }
}
