//! Kinematic body component with multiple named acceleration forces.
//!
//! The [`RigidBody`] component stores velocity and named acceleration forces
//! for an entity. Gravity and the input-driven movement force live side by
//! side, so the movement controller can rewrite its own force every frame
//! without touching gravity.
//!
//! Drag follows arcade-physics rules: on an axis whose summed acceleration is
//! zero, speed is reduced by `drag * delta` toward zero, never past it.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Name of the world gravity force.
pub const GRAVITY_FORCE: &str = "gravity";
/// Name of the force written by the movement controller.
pub const MOVE_FORCE: &str = "move";

/// A named acceleration force.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelerationForce {
    /// The acceleration vector in world units per second squared.
    pub value: Vec2,
}

impl AccelerationForce {
    pub fn new(value: Vec2) -> Self {
        Self { value }
    }
}

/// Kinematic body storing velocity, named forces, drag and a horizontal cap.
///
/// # Fields
/// - `velocity` - Current velocity in world units per second
/// - `forces` - Named acceleration forces, summed each frame
/// - `drag` - Per-axis drag, applied only while that axis has no acceleration
/// - `max_speed_x` - Optional clamp on the magnitude of `velocity.x`
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    pub velocity: Vec2,
    pub forces: FxHashMap<String, AccelerationForce>,
    pub drag: Vec2,
    pub max_speed_x: Option<f32>,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no forces.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            forces: FxHashMap::default(),
            drag: Vec2::ZERO,
            max_speed_x: None,
        }
    }

    /// Create a RigidBody already pulled down by `gravity`.
    pub fn with_gravity(gravity: f32) -> Self {
        let mut rb = Self::new();
        rb.add_force(GRAVITY_FORCE, Vec2::new(0.0, gravity));
        rb
    }

    /// Add or update a named acceleration force.
    pub fn add_force(&mut self, name: &str, value: Vec2) {
        self.forces
            .insert(name.to_string(), AccelerationForce::new(value));
    }

    /// Get the value of a force by name.
    pub fn get_force(&self, name: &str) -> Option<&AccelerationForce> {
        self.forces.get(name)
    }

    /// Calculate the total acceleration from all forces.
    pub fn total_acceleration(&self) -> Vec2 {
        self.forces
            .values()
            .fold(Vec2::ZERO, |acc, f| acc + f.value)
    }

    /// Clamp `velocity.x` to `max_speed_x`, if a cap is set.
    pub fn clamp_horizontal(&mut self) {
        if let Some(max) = self.max_speed_x {
            self.velocity.x = self.velocity.x.clamp(-max, max);
        }
    }

    /// Advance velocity by `delta` seconds: forces, then drag, then the cap.
    pub fn integrate(&mut self, delta: f32) {
        let accel = self.total_acceleration();
        self.velocity.x = step_axis(self.velocity.x, accel.x, self.drag.x, delta);
        self.velocity.y = step_axis(self.velocity.y, accel.y, self.drag.y, delta);
        self.clamp_horizontal();
    }
}

fn step_axis(velocity: f32, accel: f32, drag: f32, delta: f32) -> f32 {
    if accel != 0.0 {
        velocity + accel * delta
    } else if drag > 0.0 {
        let slowed = velocity.abs() - drag * delta;
        if slowed <= 0.0 {
            0.0
        } else {
            slowed.copysign(velocity)
        }
    } else {
        velocity
    }
}
