//! Deferred actions on the logical clock.
//!
//! The [`Scheduler`] is a small priority queue of `(fire_at, action, owner)`
//! entries. [`run_scheduler`](crate::systems::scheduler::run_scheduler) pops
//! due entries each frame and triggers a
//! [`TimerFired`](crate::events::timer::TimerFired) event for each.
//!
//! Entries can be cancelled by token, or all at once for an owning entity
//! when that entity is despawned. Level teardown clears the whole queue, so
//! no timer outlives the level that scheduled it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::{Entity, Resource};
use smallvec::SmallVec;

use crate::events::level::LevelRequest;

/// Handle returned by [`Scheduler::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// What happens when an entry fires.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduledAction {
    /// Undo the active jump boost.
    BoostExpired,
    /// Remove an opened chest.
    DespawnChest,
    /// Start dropping an armed platform.
    PlatformFall,
    /// Turn a guide block's light off.
    GuideReset,
    /// Leave the level through its door.
    Level(LevelRequest),
}

#[derive(Debug, Clone)]
pub struct ScheduledEntry {
    pub fire_at: f32,
    pub token: TimerToken,
    pub owner: Option<Entity>,
    pub action: ScheduledAction,
}

impl PartialEq for ScheduledEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScheduledEntry {}

impl PartialOrd for ScheduledEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEntry {
    // Reversed: BinaryHeap is a max-heap and the earliest entry must pop first.
    // Ties fire in scheduling order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .fire_at
            .total_cmp(&self.fire_at)
            .then_with(|| other.token.0.cmp(&self.token.0))
    }
}

#[derive(Resource, Debug, Default)]
pub struct Scheduler {
    heap: BinaryHeap<ScheduledEntry>,
    next_token: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire `delay` seconds after `now`.
    pub fn schedule(
        &mut self,
        now: f32,
        delay: f32,
        action: ScheduledAction,
        owner: Option<Entity>,
    ) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.heap.push(ScheduledEntry {
            fire_at: now + delay.max(0.0),
            token,
            owner,
            action,
        });
        token
    }

    /// Drop a pending entry. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.heap.len();
        self.heap.retain(|e| e.token != token);
        self.heap.len() != before
    }

    /// Drop every pending entry owned by `owner`. Returns how many were dropped.
    pub fn cancel_owned_by(&mut self, owner: Entity) -> usize {
        let before = self.heap.len();
        self.heap.retain(|e| e.owner != Some(owner));
        before - self.heap.len()
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.heap.iter().any(|e| e.token == token)
    }

    /// Logical time at which a pending entry fires.
    pub fn fire_time(&self, token: TimerToken) -> Option<f32> {
        self.heap.iter().find(|e| e.token == token).map(|e| e.fire_at)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Remove and return all entries with `fire_at <= now`, earliest first.
    pub fn pop_due(&mut self, now: f32) -> SmallVec<[ScheduledEntry; 4]> {
        let mut due = SmallVec::new();
        while self.heap.peek().is_some_and(|e| e.fire_at <= now) {
            if let Some(entry) = self.heap.pop() {
                due.push(entry);
            }
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn entries_fire_in_time_order() {
        let mut s = Scheduler::new();
        s.schedule(0.0, 2.0, ScheduledAction::GuideReset, None);
        s.schedule(0.0, 0.5, ScheduledAction::BoostExpired, None);
        s.schedule(0.0, 1.0, ScheduledAction::DespawnChest, None);

        assert!(s.pop_due(0.4).is_empty());
        let due: Vec<_> = s.pop_due(1.0).into_iter().map(|e| e.action).collect();
        assert_eq!(
            due,
            vec![ScheduledAction::BoostExpired, ScheduledAction::DespawnChest]
        );
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut s = Scheduler::new();
        let a = s.schedule(0.0, 1.0, ScheduledAction::GuideReset, None);
        let b = s.schedule(0.0, 1.0, ScheduledAction::GuideReset, None);
        let due = s.pop_due(1.0);
        assert_eq!(due[0].token, a);
        assert_eq!(due[1].token, b);
    }

    #[test]
    fn cancel_by_token() {
        let mut s = Scheduler::new();
        let t = s.schedule(0.0, 1.0, ScheduledAction::BoostExpired, None);
        assert!(s.is_pending(t));
        assert_eq!(s.fire_time(t), Some(1.0));
        assert!(s.cancel(t));
        assert!(!s.cancel(t));
        assert!(s.pop_due(10.0).is_empty());
    }

    #[test]
    fn cancel_by_owner_leaves_other_entries() {
        let mut world = World::new();
        let chest = world.spawn_empty().id();
        let other = world.spawn_empty().id();

        let mut s = Scheduler::new();
        s.schedule(0.0, 1.0, ScheduledAction::DespawnChest, Some(chest));
        s.schedule(0.0, 1.0, ScheduledAction::GuideReset, Some(chest));
        let kept = s.schedule(0.0, 1.0, ScheduledAction::GuideReset, Some(other));

        assert_eq!(s.cancel_owned_by(chest), 2);
        assert_eq!(s.len(), 1);
        assert!(s.is_pending(kept));
    }

    #[test]
    fn negative_delay_fires_immediately() {
        let mut s = Scheduler::new();
        s.schedule(3.0, -1.0, ScheduledAction::BoostExpired, None);
        assert_eq!(s.pop_due(3.0).len(), 1);
    }
}
