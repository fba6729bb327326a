//! TTL (Time-to-live) system.
//!
//! This module provides the [`ttl_system`] that decrements TTL timers and
//! despawns entities when their time runs out.
//!
//! # System Flow
//!
//! Each frame:
//!
//! 1. `ttl_system` iterates all entities with [`Ttl`](crate::components::ttl::Ttl)
//! 2. Decrements `remaining` by the scaled frame delta
//! 3. When `remaining <= 0`, despawns the entity
//!
//! # Time Scaling
//!
//! The countdown respects [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime),
//! so slow-motion effects affect TTL duration.

use bevy_ecs::prelude::*;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Decrements TTL and despawns entities when it reaches zero.
pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining -= dt;
        if ttl.remaining <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_despawns_once_time_runs_out() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.4,
            ..Default::default()
        });
        let e = world.spawn(Ttl::new(1.0)).id();
        let mut schedule = Schedule::default();
        schedule.add_systems(ttl_system);

        schedule.run(&mut world);
        schedule.run(&mut world);
        assert!(world.get_entity(e).is_ok());
        schedule.run(&mut world);
        assert!(world.get_entity(e).is_err());
    }
}
