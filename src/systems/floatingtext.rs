//! Floating text spawning and drift.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::floatingtext::FloatingText;
use crate::components::group::{Group, TEXT};
use crate::components::levelscoped::LevelScoped;
use crate::components::mapposition::MapPosition;
use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Spawn a piece of floating text at `at` that lives for `lifespan` seconds.
pub fn spawn_floating_text(
    commands: &mut Commands,
    at: Vec2,
    text: impl Into<String>,
    lifespan: f32,
) -> Entity {
    commands
        .spawn((
            FloatingText::new(text),
            MapPosition::new(at.x, at.y),
            Ttl::new(lifespan),
            Group::new(TEXT),
            LevelScoped,
        ))
        .id()
}

/// Move floating text upward.
pub fn floating_text_system(
    time: Res<WorldTime>,
    mut query: Query<(&FloatingText, &mut MapPosition)>,
) {
    for (text, mut position) in query.iter_mut() {
        position.pos.y -= text.rise_speed * time.delta;
    }
}
