use bevy_ecs::prelude::Component;

/// Whether the body rested on solid ground after this frame's terrain resolution.
///
/// Written by [`resolve_terrain`](crate::systems::tilecollision::resolve_terrain).
/// Readers treat a missing component as airborne.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundContact {
    pub down: bool,
}

impl GroundContact {
    /// Ground flag of an optional component; absent means airborne.
    pub fn is_grounded(contact: Option<&GroundContact>) -> bool {
        contact.is_some_and(|c| c.down)
    }
}
