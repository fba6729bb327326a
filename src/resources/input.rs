//! Per-frame input resource.
//!
//! The host shell reads its devices and hands the core an [`InputSnapshot`]
//! of raw "is held" booleans once per frame. [`InputState`] keeps the
//! previous frame to derive `just_pressed` / `just_released` edges, which is
//! what makes the jump edge-triggered.

use bevy_ecs::prelude::*;

/// Raw held state of every action, as sampled by the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    /// Open chests (E on a keyboard shell).
    pub interact: bool,
    /// Use doors (F on a keyboard shell).
    pub door: bool,
}

impl InputSnapshot {
    pub fn left() -> Self {
        Self {
            move_left: true,
            ..Self::default()
        }
    }

    pub fn right() -> Self {
        Self {
            move_right: true,
            ..Self::default()
        }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean action state with edges relative to the previous frame.
pub struct BoolState {
    /// Whether the action is currently held this frame.
    pub active: bool,
    /// Whether the action went from released to held this frame.
    pub just_pressed: bool,
    /// Whether the action went from held to released this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Feed this frame's raw value.
    pub fn update(&mut self, held: bool) {
        self.just_pressed = held && !self.active;
        self.just_released = !held && self.active;
        self.active = held;
    }
}

/// Resource capturing the per-frame action state relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub jump: BoolState,
    pub interact: BoolState,
    pub door: BoolState,
}

impl InputState {
    pub fn apply(&mut self, snapshot: InputSnapshot) {
        self.move_left.update(snapshot.move_left);
        self.move_right.update(snapshot.move_right);
        self.jump.update(snapshot.jump);
        self.interact.update(snapshot.interact);
        self.door.update(snapshot.door);
    }

    /// Horizontal intent: -1 left, +1 right, 0 none. Left wins when both are held.
    pub fn horizontal(&self) -> i8 {
        if self.move_left.active {
            -1
        } else if self.move_right.active {
            1
        } else {
            0
        }
    }
}

/// The snapshot the shell pushed for the frame being simulated.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PendingInput(pub InputSnapshot);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_the_previous_frame() {
        let mut state = BoolState::default();
        state.update(true);
        assert!(state.active && state.just_pressed && !state.just_released);
        state.update(true);
        assert!(state.active && !state.just_pressed);
        state.update(false);
        assert!(!state.active && state.just_released);
        state.update(false);
        assert!(!state.just_released);
    }

    #[test]
    fn left_wins_over_right() {
        let mut input = InputState::default();
        input.apply(InputSnapshot {
            move_left: true,
            move_right: true,
            ..InputSnapshot::default()
        });
        assert_eq!(input.horizontal(), -1);
        input.apply(InputSnapshot::right());
        assert_eq!(input.horizontal(), 1);
        input.apply(InputSnapshot::default());
        assert_eq!(input.horizontal(), 0);
    }
}
