//! Scheduler pump.
//!
//! Pops every entry that came due on the logical clock and triggers a
//! [`TimerFired`] for it. Entries whose owner no longer exists are dropped
//! here, so observers can rely on `owner` being alive.
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::timer::TimerFired;
use crate::resources::scheduler::Scheduler;
use crate::resources::worldtime::WorldTime;

pub fn run_scheduler(
    time: Res<WorldTime>,
    mut scheduler: ResMut<Scheduler>,
    alive: Query<Entity>,
    mut commands: Commands,
) {
    for entry in scheduler.pop_due(time.elapsed) {
        if let Some(owner) = entry.owner {
            if !alive.contains(owner) {
                debug!("dropping {:?}: owner {:?} is gone", entry.action, owner);
                continue;
            }
        }
        commands.trigger(TimerFired {
            token: entry.token,
            owner: entry.owner,
            action: entry.action,
        });
    }
}
