//! Which level is running and what should happen to it next.
//!
//! Observers only record a [`LevelRequest`] here; the exclusive
//! [`apply_pending_level`](crate::systems::level::apply_pending_level) system
//! consumes it at the end of the frame.

use bevy_ecs::prelude::Resource;

use crate::events::level::LevelRequest;

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct LevelRunner {
    /// Key of the running level.
    pub current: Option<String>,
    /// Level the exit door leads to; `None` finishes the game.
    pub next: Option<String>,
    pub pending: Option<LevelRequest>,
    /// Set once the last level's door has been used.
    pub won: bool,
    /// Times the current level has been (re)started.
    pub attempts: u32,
}

impl LevelRunner {
    /// Record a transition. The first request of a frame wins.
    pub fn request(&mut self, request: LevelRequest) -> bool {
        if self.pending.is_some() || self.won {
            return false;
        }
        self.pending = Some(request);
        true
    }

    pub fn take_pending(&mut self) -> Option<LevelRequest> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_wins() {
        let mut runner = LevelRunner::default();
        assert!(runner.request(LevelRequest::Restart));
        assert!(!runner.request(LevelRequest::Advance(None)));
        assert_eq!(runner.take_pending(), Some(LevelRequest::Restart));
        assert_eq!(runner.take_pending(), None);
    }

    #[test]
    fn no_requests_after_winning() {
        let mut runner = LevelRunner {
            won: true,
            ..Default::default()
        };
        assert!(!runner.request(LevelRequest::Restart));
    }
}
