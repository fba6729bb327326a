use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned box centred on the entity's [`MapPosition`](super::mapposition::MapPosition),
/// shifted by `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let centre = position + self.offset;
        let half = self.size.abs() * 0.5;
        (centre - half, centre + half)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Same box grown by `margin` on every side, so resting contact counts as a touch.
    pub fn inflated(&self, margin: f32) -> Self {
        Self {
            size: self.size.abs() + Vec2::splat(margin * 2.0),
            offset: self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_is_centred_on_position() {
        let c = BoxCollider::new(10.0, 20.0);
        let (min, max) = c.aabb(Vec2::new(100.0, 100.0));
        assert_eq!(min, Vec2::new(95.0, 90.0));
        assert_eq!(max, Vec2::new(105.0, 110.0));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(10.0, 0.0)));
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(9.5, 0.0)));
    }

    #[test]
    fn inflated_box_touches_what_the_body_rests_on() {
        let body = BoxCollider::new(24.0, 32.0);
        let ground = BoxCollider::new(32.0, 32.0);
        // body bottom at y=16, ground top at y=16
        assert!(!body.overlaps(Vec2::ZERO, &ground, Vec2::new(0.0, 32.0)));
        assert!(body.inflated(1.0).overlaps(Vec2::ZERO, &ground, Vec2::new(0.0, 32.0)));
    }
}
