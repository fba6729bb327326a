//! Per-level player progress: health, coins, keys and guide cooldown.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

pub const MAX_HEALTH: i32 = 100;
/// Seconds between two guide messages.
pub const GUIDE_COOLDOWN: f32 = 4.0;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub health: i32,
    pub coins: u32,
    pub collected_keys: FxHashSet<u32>,
    pub keys_required: u32,
    /// Logical time of the last guide message.
    pub last_guide: Option<f32>,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PlayerStats {
    pub fn new(keys_required: u32) -> Self {
        Self {
            health: MAX_HEALTH,
            coins: 0,
            collected_keys: FxHashSet::default(),
            keys_required,
            last_guide: None,
        }
    }

    /// Subtract `amount`, never dropping below zero. Returns the new health.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount).max(0);
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Record a key. Returns false if this key id was already collected.
    pub fn collect_key(&mut self, id: u32) -> bool {
        self.collected_keys.insert(id)
    }

    pub fn keys_collected(&self) -> u32 {
        self.collected_keys.len() as u32
    }

    /// Keys still needed to open the exit.
    pub fn keys_missing(&self) -> u32 {
        self.keys_required.saturating_sub(self.keys_collected())
    }

    /// Whether a guide message may show at `now`; records it when it may.
    pub fn try_trigger_guide(&mut self, now: f32) -> bool {
        match self.last_guide {
            Some(last) if now - last < GUIDE_COOLDOWN => false,
            _ => {
                self.last_guide = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_floors_at_zero() {
        let mut stats = PlayerStats::default();
        for _ in 0..4 {
            stats.take_damage(20);
        }
        assert_eq!(stats.health, 20);
        assert_eq!(stats.take_damage(20), 0);
        assert_eq!(stats.take_damage(20), 0);
        assert!(stats.is_dead());
    }

    #[test]
    fn keys_are_counted_once_per_id() {
        let mut stats = PlayerStats::new(3);
        assert!(stats.collect_key(0));
        assert!(!stats.collect_key(0));
        assert!(stats.collect_key(2));
        assert_eq!(stats.keys_collected(), 2);
        assert_eq!(stats.keys_missing(), 1);
    }

    #[test]
    fn guide_respects_cooldown() {
        let mut stats = PlayerStats::default();
        assert!(stats.try_trigger_guide(1.0));
        assert!(!stats.try_trigger_guide(4.9));
        assert!(stats.try_trigger_guide(5.0));
    }
}
