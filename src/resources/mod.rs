//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, tuning, level
//! data and the outbound shell channel. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `boost` – jump-boost state and its configuration
//! - `camera` – camera follow smoothing state and rates
//! - `enemytuning` – enemy AI ranges and speeds
//! - `gameconfig` – INI-backed base configuration
//! - `input` – per-frame action state with edge detection
//! - `levelrunner` – running level and pending transition
//! - `levelstore` – level definitions loaded from JSON
//! - `scheduler` – deferred actions on the logical clock
//! - `shellbridge` – channel carrying notices to the host shell
//! - `stats` – health, coins, keys and guide cooldown
//! - `terrain` – tile lookups for the running level
//! - `tilemap` – serializable tile layer data
//! - `tuning` – player movement constants
//! - `worldtime` – simulation time and delta
pub mod boost;
pub mod camera;
pub mod enemytuning;
pub mod gameconfig;
pub mod input;
pub mod levelrunner;
pub mod levelstore;
pub mod scheduler;
pub mod shellbridge;
pub mod stats;
pub mod terrain;
pub mod tilemap;
pub mod tuning;
pub mod worldtime;
