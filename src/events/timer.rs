//! Scheduler expiration events.
//!
//! When a [`Scheduler`](crate::resources::scheduler::Scheduler) entry comes
//! due, a [`TimerFired`] event is triggered. Observers match on the action.
//!
//! # Related
//!
//! - [`crate::systems::scheduler::run_scheduler`] – the system that emits these events

use bevy_ecs::prelude::*;

use crate::resources::scheduler::{ScheduledAction, TimerToken};

#[derive(Event, Debug, Clone, PartialEq)]
pub struct TimerFired {
    pub token: TimerToken,
    /// Entity the entry belonged to, if any. Guaranteed to exist when fired.
    pub owner: Option<Entity>,
    pub action: ScheduledAction,
}
