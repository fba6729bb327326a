//! Jump-boost activation and expiry.
//!
//! - [`booster_observer`] applies [`BoostState::activate`] when the player
//!   touches the `Booster` layer and schedules the expiry.
//! - [`boost_expiry_observer`] undoes it when that entry fires.
//!
//! Contact while a boost is active is ignored entirely: no new timer, no
//! notice, no text.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::events::collision::{Region, RegionEvent};
use crate::events::notice::GameNotice;
use crate::events::timer::TimerFired;
use crate::resources::boost::{BoostConfig, BoostState};
use crate::resources::camera::CameraFollow;
use crate::resources::scheduler::{ScheduledAction, Scheduler};
use crate::resources::tuning::MovementTuning;
use crate::resources::worldtime::WorldTime;
use crate::systems::floatingtext::spawn_floating_text;

pub fn booster_observer(
    trigger: On<RegionEvent>,
    mut boost: ResMut<BoostState>,
    mut tuning: ResMut<MovementTuning>,
    mut camera: ResMut<CameraFollow>,
    config: Res<BoostConfig>,
    time: Res<WorldTime>,
    mut scheduler: ResMut<Scheduler>,
    positions: Query<&MapPosition>,
    mut notices: MessageWriter<GameNotice>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if event.region != Region::Booster {
        return;
    }
    if !boost.activate(&mut tuning, &mut camera, &config) {
        return;
    }
    let token = scheduler.schedule(
        time.elapsed,
        config.duration,
        ScheduledAction::BoostExpired,
        None,
    );
    boost.timer = Some(token);
    debug!("boost on until {:?}", scheduler.fire_time(token));
    notices.write(GameNotice::BoostActivated);

    if let Ok(position) = positions.get(event.entity) {
        spawn_floating_text(
            &mut commands,
            position.pos + Vec2::new(0.0, -40.0),
            "uppies!",
            1.0,
        );
    }
}

pub fn boost_expiry_observer(
    trigger: On<TimerFired>,
    mut boost: ResMut<BoostState>,
    mut tuning: ResMut<MovementTuning>,
    mut camera: ResMut<CameraFollow>,
    mut notices: MessageWriter<GameNotice>,
) {
    let event = trigger.event();
    if event.action != ScheduledAction::BoostExpired || boost.timer != Some(event.token) {
        return;
    }
    if boost.expire(&mut tuning, &mut camera) {
        debug!("boost expired");
        notices.write(GameNotice::BoostExpired);
    }
}
