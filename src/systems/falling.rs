//! Falling platform motion.
//!
//! An armed platform starts falling when its `PlatformFall` entry fires. It
//! shakes sideways for the first [`SHAKE_DURATION`] seconds, drops its full
//! distance with a quadratic ease-in over [`FALL_DURATION`], then goes away.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::fallingplatform::{
    FALL_DURATION, FallingPlatform, PlatformPhase, SHAKE_AMPLITUDE, SHAKE_DURATION,
};
use crate::components::mapposition::MapPosition;
use crate::events::timer::TimerFired;
use crate::resources::scheduler::{ScheduledAction, Scheduler};
use crate::resources::worldtime::WorldTime;

pub fn platform_fall_observer(trigger: On<TimerFired>, mut platforms: Query<&mut FallingPlatform>) {
    let event = trigger.event();
    if event.action != ScheduledAction::PlatformFall {
        return;
    }
    let Some(mut platform) = event.owner.and_then(|e| platforms.get_mut(e).ok()) else {
        return;
    };
    if platform.phase == PlatformPhase::Armed {
        platform.phase = PlatformPhase::Falling { elapsed: 0.0 };
    }
}

pub fn falling_platform_system(
    time: Res<WorldTime>,
    mut platforms: Query<(Entity, &mut FallingPlatform, &mut MapPosition)>,
    mut scheduler: ResMut<Scheduler>,
    mut commands: Commands,
) {
    for (entity, mut platform, mut position) in platforms.iter_mut() {
        let PlatformPhase::Falling { elapsed } = platform.phase else {
            continue;
        };
        let elapsed = elapsed + time.delta;
        platform.phase = PlatformPhase::Falling { elapsed };

        position.pos.y = platform.origin_y + platform.drop_offset(elapsed);
        position.pos.x = if elapsed < SHAKE_DURATION {
            platform.origin_x + fastrand::i32(-SHAKE_AMPLITUDE..=SHAKE_AMPLITUDE) as f32
        } else {
            platform.origin_x
        };

        if elapsed >= FALL_DURATION {
            debug!("platform {:?} finished falling", entity);
            scheduler.cancel_owned_by(entity);
            commands.entity(entity).try_despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falling_platform_drops_and_despawns() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.5,
            ..Default::default()
        });
        world.init_resource::<Scheduler>();
        let mut platform = FallingPlatform::new(100.0, 200.0, 800.0, 0.1);
        platform.phase = PlatformPhase::Falling { elapsed: 0.0 };
        let e = world.spawn((platform, MapPosition::new(100.0, 200.0))).id();
        let mut schedule = Schedule::default();
        schedule.add_systems(falling_platform_system);

        schedule.run(&mut world);
        let pos = world.get::<MapPosition>(e).map(|p| p.pos);
        // quarter of the way through: 800 * 0.25^2
        assert_eq!(pos.map(|p| p.y), Some(250.0));
        assert_eq!(pos.map(|p| p.x), Some(100.0));

        for _ in 0..3 {
            schedule.run(&mut world);
        }
        assert!(world.get_entity(e).is_err());
    }

    #[test]
    fn resting_platforms_stay_put() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.5,
            ..Default::default()
        });
        world.init_resource::<Scheduler>();
        let e = world
            .spawn((
                FallingPlatform::new(0.0, 0.0, 800.0, 0.1),
                MapPosition::new(0.0, 0.0),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(falling_platform_system);
        schedule.run(&mut world);
        assert_eq!(world.get::<MapPosition>(e).map(|p| p.pos.y), Some(0.0));
    }
}
