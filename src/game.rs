//! Game assembly: world, observers and the per-frame schedule.
//!
//! [`Game`] owns a `bevy_ecs` [`World`] and the [`Schedule`] that advances it.
//! The host shell drives it with [`Game::tick`], handing in the frame delta
//! and that frame's [`InputSnapshot`], then drains [`GameNotice`]s and reads
//! render-facing state (positions, [`AnimationState`], [`CameraFollow`],
//! floating text) straight from the world.
//!
//! [`AnimationState`]: crate::components::animation::AnimationState

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use glam::Vec2;
use log::info;

use crate::components::mapposition::MapPosition;
use crate::components::player::PlayerController;
use crate::events::notice::GameNotice;
use crate::resources::boost::BoostState;
use crate::resources::camera::CameraFollow;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputSnapshot, InputState, PendingInput};
use crate::resources::levelrunner::LevelRunner;
use crate::resources::levelstore::LevelStore;
use crate::resources::scheduler::Scheduler;
use crate::resources::shellbridge::setup_shell_bridge;
use crate::resources::stats::PlayerStats;
use crate::resources::worldtime::WorldTime;
use crate::systems::boost::{boost_expiry_observer, booster_observer};
use crate::systems::camera::camera_follow_system;
use crate::systems::collision::{
    collision_detector, death_region_observer, enemy_contact_observer, guide_observer,
    key_pickup_observer, platform_contact_observer,
};
use crate::systems::enemyai::enemy_ai_system;
use crate::systems::falling::{falling_platform_system, platform_fall_observer};
use crate::systems::floatingtext::floating_text_system;
use crate::systems::input::update_input_state;
use crate::systems::interaction::{
    chest_interaction_system, chest_timer_observer, door_interaction_system, guide_timer_observer,
};
use crate::systems::level::{
    apply_pending_level, level_request_observer, level_timer_observer, start_level,
};
use crate::systems::movement::movement;
use crate::systems::movementcontroller::movement_controller;
use crate::systems::scheduler::run_scheduler;
use crate::systems::shell::{forward_notices, update_notice_messages};
use crate::systems::tilecollision::resolve_terrain;
use crate::systems::time::update_world_time;
use crate::systems::ttl::ttl_system;

/// Insert every resource and observer the schedule needs.
///
/// Returns the receiving end of the shell notice channel.
pub fn build_world(world: &mut World, config: GameConfig, levels: LevelStore) -> Receiver<GameNotice> {
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(PendingInput::default());
    world.insert_resource(Scheduler::new());
    world.insert_resource(LevelRunner::default());
    world.insert_resource(PlayerStats::default());
    world.insert_resource(BoostState::default());
    world.insert_resource(config.tuning);
    world.insert_resource(config.boost);
    world.insert_resource(config.enemy);
    world.insert_resource(config.camera);
    world.insert_resource(CameraFollow::new(&config.camera));
    world.insert_resource(config);
    world.insert_resource(levels);
    let notices = setup_shell_bridge(world);

    world.spawn(Observer::new(enemy_contact_observer));
    world.spawn(Observer::new(key_pickup_observer));
    world.spawn(Observer::new(guide_observer));
    world.spawn(Observer::new(platform_contact_observer));
    world.spawn(Observer::new(booster_observer));
    world.spawn(Observer::new(death_region_observer));
    world.spawn(Observer::new(boost_expiry_observer));
    world.spawn(Observer::new(chest_timer_observer));
    world.spawn(Observer::new(guide_timer_observer));
    world.spawn(Observer::new(platform_fall_observer));
    world.spawn(Observer::new(level_timer_observer));
    world.spawn(Observer::new(level_request_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    notices
}

/// The per-frame schedule. Every system is chained: the simulation is
/// single-threaded and deterministic.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            run_scheduler,
            movement_controller,
            movement,
            resolve_terrain,
            collision_detector,
            camera_follow_system,
            enemy_ai_system,
            chest_interaction_system,
            door_interaction_system,
            falling_platform_system,
            floating_text_system,
            ttl_system,
            forward_notices,
            update_notice_messages,
            apply_pending_level,
        )
            .chain(),
    );
    update
}

pub struct Game {
    world: World,
    schedule: Schedule,
    notices: Receiver<GameNotice>,
}

impl Game {
    pub fn new(config: GameConfig, levels: LevelStore) -> Self {
        let mut world = World::new();
        let notices = build_world(&mut world, config, levels);
        Self {
            world,
            schedule: build_schedule(),
            notices,
        }
    }

    /// Start a level by key, or the first loaded level when `key` is `None`.
    pub fn start(&mut self, key: Option<&str>) -> Result<(), String> {
        let key = match key {
            Some(key) => key.to_string(),
            None => self
                .world
                .resource::<LevelStore>()
                .first_key()
                .map(str::to_string)
                .ok_or_else(|| "No levels loaded".to_string())?,
        };
        info!("Starting at level '{}'", key);
        start_level(&mut self.world, &key)
    }

    /// Advance the simulation by one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32, input: InputSnapshot) {
        update_world_time(&mut self.world, dt);
        self.world.resource_mut::<PendingInput>().0 = input;
        self.schedule.run(&mut self.world);
        self.world.clear_trackers(); // Clear changed components for next frame
    }

    /// Every notice forwarded since the last drain.
    pub fn drain_notices(&self) -> Vec<GameNotice> {
        self.notices.try_iter().collect()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player_position(&mut self) -> Option<Vec2> {
        self.world
            .query_filtered::<&MapPosition, With<PlayerController>>()
            .single(&self.world)
            .ok()
            .map(|p| p.pos)
    }

    pub fn current_level(&self) -> Option<&str> {
        self.world.resource::<LevelRunner>().current.as_deref()
    }

    pub fn is_won(&self) -> bool {
        self.world.resource::<LevelRunner>().won
    }

    pub fn stats(&self) -> &PlayerStats {
        self.world.resource::<PlayerStats>()
    }

    pub fn camera(&self) -> &CameraFollow {
        self.world.resource::<CameraFollow>()
    }
}
