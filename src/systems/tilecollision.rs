//! Terrain resolution for bodies that stand on things.
//!
//! Bodies carrying a [`GroundContact`] are moved here instead of in
//! [`movement`](crate::systems::movement::movement): the frame's displacement
//! is split into sub-steps no longer than a quarter tile, and each sub-step is
//! applied one axis at a time, pushing the body back out of any tile or
//! [`Solid`] entity it entered. Landing on something sets `GroundContact::down`
//! and zeroes the vertical velocity.
//!
//! The player collides with the `Base`, `Booster` and `Death` layers (the
//! region layers are solid too, touching them is what triggers them). Enemies
//! only collide with `Base`.

use bevy_ecs::prelude::*;
use glam::Vec2;
use smallvec::{SmallVec, smallvec};

use crate::components::boxcollider::BoxCollider;
use crate::components::groundcontact::GroundContact;
use crate::components::interactable::Solid;
use crate::components::mapposition::MapPosition;
use crate::components::player::PlayerController;
use crate::components::rigidbody::RigidBody;
use crate::resources::terrain::{TerrainLayers, TileLayer};
use crate::resources::worldtime::WorldTime;

/// Shrink applied to overlap tests so a body resting exactly on an edge does
/// not count as inside the neighbour.
const SKIN: f32 = 0.01;
/// Sub-step length as a fraction of a tile.
const SUBSTEP_FRACTION: f32 = 0.25;
/// Sub-step length when there is no tile layer to size it from.
const FALLBACK_SUBSTEP: f32 = 8.0;

type Aabb = (Vec2, Vec2);

/// Everything a body can bump into this frame.
pub struct Blockers<'a> {
    pub layers: SmallVec<[&'a TileLayer; 3]>,
    pub solids: &'a [Aabb],
    /// World size; zero disables the bounds clamp.
    pub bounds: Vec2,
}

impl Blockers<'_> {
    fn hits(&self, min: Vec2, max: Vec2) -> SmallVec<[Aabb; 8]> {
        let min = min + Vec2::splat(SKIN);
        let max = max - Vec2::splat(SKIN);
        let mut hits: SmallVec<[Aabb; 8]> = SmallVec::new();
        for layer in &self.layers {
            hits.extend(
                layer
                    .cells_in(min, max)
                    .map(|(cx, cy)| layer.cell_bounds(cx, cy)),
            );
        }
        hits.extend(
            self.solids
                .iter()
                .copied()
                .filter(|(smin, smax)| min.x < smax.x && max.x > smin.x && min.y < smax.y && max.y > smin.y),
        );
        hits
    }

    fn substep(&self) -> f32 {
        self.layers
            .first()
            .map(|l| l.cell_size * SUBSTEP_FRACTION)
            .filter(|s| *s > 0.0)
            .unwrap_or(FALLBACK_SUBSTEP)
    }
}

/// Move a body by `velocity * delta`, resolving against `blockers`.
///
/// Returns whether the body ended the frame standing on something.
pub fn sweep_body(
    pos: &mut Vec2,
    velocity: &mut Vec2,
    collider: &BoxCollider,
    delta: f32,
    blockers: &Blockers,
) -> bool {
    let displacement = *velocity * delta;
    let steps = (displacement.abs().max_element() / blockers.substep())
        .ceil()
        .max(1.0) as u32;
    let mut step = displacement / steps as f32;
    let half = collider.size.abs() * 0.5;
    let mut grounded = false;

    for _ in 0..steps {
        if step.x != 0.0 {
            pos.x += step.x;
            let (min, max) = collider.aabb(*pos);
            let hits = blockers.hits(min, max);
            if !hits.is_empty() {
                pos.x = if step.x > 0.0 {
                    hits.iter().map(|(b, _)| b.x).fold(f32::INFINITY, f32::min) - half.x
                } else {
                    hits.iter().map(|(_, b)| b.x).fold(f32::NEG_INFINITY, f32::max) + half.x
                } - collider.offset.x;
                velocity.x = 0.0;
                step.x = 0.0;
            }
        }
        if step.y != 0.0 {
            pos.y += step.y;
            let (min, max) = collider.aabb(*pos);
            let hits = blockers.hits(min, max);
            if !hits.is_empty() {
                if step.y > 0.0 {
                    pos.y = hits.iter().map(|(b, _)| b.y).fold(f32::INFINITY, f32::min)
                        - half.y
                        - collider.offset.y;
                    grounded = true;
                } else {
                    pos.y = hits.iter().map(|(_, b)| b.y).fold(f32::NEG_INFINITY, f32::max)
                        + half.y
                        - collider.offset.y;
                }
                velocity.y = 0.0;
                step.y = 0.0;
            }
        }
    }

    if blockers.bounds.x > 0.0 && blockers.bounds.y > 0.0 {
        let (min, max) = collider.aabb(*pos);
        if min.x < 0.0 {
            pos.x -= min.x;
            velocity.x = velocity.x.max(0.0);
        } else if max.x > blockers.bounds.x {
            pos.x -= max.x - blockers.bounds.x;
            velocity.x = velocity.x.min(0.0);
        }
        if min.y < 0.0 {
            pos.y -= min.y;
            velocity.y = velocity.y.max(0.0);
        } else if max.y >= blockers.bounds.y {
            pos.y -= max.y - blockers.bounds.y;
            velocity.y = velocity.y.min(0.0);
            grounded = true;
        }
    }

    // Resting probe: covers frames where nothing pushed the body down.
    if !grounded && velocity.y >= 0.0 {
        let (min, max) = collider.aabb(*pos);
        let probe_min = Vec2::new(min.x, max.y);
        let probe_max = Vec2::new(max.x, max.y + 1.0 + SKIN * 2.0);
        grounded = !blockers.hits(probe_min, probe_max).is_empty();
    }

    grounded
}

/// Move colliding bodies and refresh their [`GroundContact`].
pub fn resolve_terrain(
    mut bodies: Query<
        (
            &mut MapPosition,
            &mut RigidBody,
            &BoxCollider,
            &mut GroundContact,
            Has<PlayerController>,
        ),
        Without<Solid>,
    >,
    solids: Query<(&MapPosition, &BoxCollider), With<Solid>>,
    terrain: Option<Res<TerrainLayers>>,
    time: Res<WorldTime>,
) {
    let solid_boxes: SmallVec<[Aabb; 16]> = solids
        .iter()
        .map(|(position, collider)| collider.aabb(position.pos))
        .collect();
    let fallback = TerrainLayers::default();
    let terrain = terrain.as_deref().unwrap_or(&fallback);

    for (mut position, mut body, collider, mut contact, is_player) in bodies.iter_mut() {
        let layers: SmallVec<[&TileLayer; 3]> = if is_player {
            smallvec![&terrain.base, &terrain.booster, &terrain.death]
        } else {
            smallvec![&terrain.base]
        };
        let blockers = Blockers {
            layers,
            solids: &solid_boxes,
            bounds: terrain.bounds,
        };
        let mut pos = position.pos;
        let mut velocity = body.velocity;
        let grounded = sweep_body(&mut pos, &mut velocity, collider, time.delta, &blockers);
        position.pos = pos;
        body.velocity = velocity;
        if contact.down != grounded {
            contact.down = grounded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> TileLayer {
        // Row 10 (y 320..352) solid from x 0 to 320.
        let mut layer = TileLayer::new(32.0);
        for cx in 0..10 {
            layer.insert(cx, 10);
        }
        layer
    }

    #[test]
    fn falling_body_lands_on_floor() {
        let layer = floor();
        let blockers = Blockers {
            layers: smallvec![&layer],
            solids: &[],
            bounds: Vec2::ZERO,
        };
        let collider = BoxCollider::new(24.0, 32.0);
        let mut pos = Vec2::new(100.0, 290.0);
        let mut velocity = Vec2::new(0.0, 1200.0);
        let grounded = sweep_body(&mut pos, &mut velocity, &collider, 1.0 / 60.0, &blockers);
        assert!(grounded);
        assert_eq!(pos.y, 304.0);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn fast_fall_does_not_tunnel() {
        let layer = floor();
        let blockers = Blockers {
            layers: smallvec![&layer],
            solids: &[],
            bounds: Vec2::ZERO,
        };
        let collider = BoxCollider::new(24.0, 32.0);
        let mut pos = Vec2::new(100.0, 250.0);
        let mut velocity = Vec2::new(0.0, 6000.0);
        assert!(sweep_body(&mut pos, &mut velocity, &collider, 1.0 / 60.0, &blockers));
        assert_eq!(pos.y, 304.0);
    }

    #[test]
    fn walking_along_floor_is_not_blocked() {
        let layer = floor();
        let blockers = Blockers {
            layers: smallvec![&layer],
            solids: &[],
            bounds: Vec2::ZERO,
        };
        let collider = BoxCollider::new(24.0, 32.0);
        let mut pos = Vec2::new(100.0, 304.0);
        let mut velocity = Vec2::new(200.0, 0.0);
        let grounded = sweep_body(&mut pos, &mut velocity, &collider, 0.1, &blockers);
        assert!(grounded);
        assert!((pos.x - 120.0).abs() < 1e-4);
        assert_eq!(velocity.x, 200.0);
    }

    #[test]
    fn wall_stops_horizontal_motion() {
        let mut layer = floor();
        layer.insert(5, 9);
        let blockers = Blockers {
            layers: smallvec![&layer],
            solids: &[],
            bounds: Vec2::ZERO,
        };
        let collider = BoxCollider::new(24.0, 32.0);
        let mut pos = Vec2::new(140.0, 304.0);
        let mut velocity = Vec2::new(200.0, 0.0);
        sweep_body(&mut pos, &mut velocity, &collider, 0.5, &blockers);
        // wall cell x 160..192
        assert_eq!(pos.x, 148.0);
        assert_eq!(velocity.x, 0.0);
    }

    #[test]
    fn solids_carry_bodies() {
        let solids = [(Vec2::new(0.0, 100.0), Vec2::new(32.0, 132.0))];
        let blockers = Blockers {
            layers: SmallVec::new(),
            solids: &solids,
            bounds: Vec2::ZERO,
        };
        let collider = BoxCollider::new(24.0, 32.0);
        let mut pos = Vec2::new(16.0, 80.0);
        let mut velocity = Vec2::new(0.0, 100.0);
        assert!(sweep_body(&mut pos, &mut velocity, &collider, 0.1, &blockers));
        assert_eq!(pos.y, 84.0);
    }

    #[test]
    fn world_bounds_keep_body_inside() {
        let blockers = Blockers {
            layers: SmallVec::new(),
            solids: &[],
            bounds: Vec2::new(320.0, 320.0),
        };
        let collider = BoxCollider::new(24.0, 32.0);
        let mut pos = Vec2::new(5.0, 100.0);
        let mut velocity = Vec2::new(-200.0, 0.0);
        sweep_body(&mut pos, &mut velocity, &collider, 0.1, &blockers);
        assert_eq!(pos.x, 12.0);
        assert_eq!(velocity.x, 0.0);
    }
}
