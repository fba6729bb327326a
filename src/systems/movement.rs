//! Rigid body integration.
//!
//! Every [`RigidBody`] gets its forces, drag and horizontal cap applied.
//! Bodies without a [`GroundContact`] (free-flying things) are also moved
//! here; bodies that collide with terrain are moved by
//! [`resolve_terrain`](crate::systems::tilecollision::resolve_terrain).
use bevy_ecs::prelude::*;

use crate::components::groundcontact::GroundContact;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

pub fn movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody, Has<GroundContact>)>,
    time: Res<WorldTime>,
) {
    for (mut position, mut rigidbody, collides) in query.iter_mut() {
        rigidbody.integrate(time.delta);
        if !collides {
            position.pos += rigidbody.velocity * time.delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn free_bodies_move_and_colliding_bodies_only_accelerate() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.5,
            ..Default::default()
        });
        let free = world
            .spawn((MapPosition::new(0.0, 0.0), RigidBody::with_gravity(10.0)))
            .id();
        let grounded = world
            .spawn((
                MapPosition::new(0.0, 0.0),
                RigidBody::with_gravity(10.0),
                GroundContact::default(),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(movement);
        schedule.run(&mut world);

        assert_eq!(world.get::<MapPosition>(free).map(|p| p.pos), Some(Vec2::new(0.0, 2.5)));
        assert_eq!(world.get::<MapPosition>(grounded).map(|p| p.pos), Some(Vec2::ZERO));
        assert_eq!(
            world.get::<RigidBody>(grounded).map(|b| b.velocity.y),
            Some(5.0)
        );
    }
}
