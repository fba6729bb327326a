//! Engine systems.
//!
//! This module groups all ECS systems and observers that advance the
//! simulation. The per-frame order is fixed in [`crate::game::build_schedule`].
//!
//! Submodules overview
//! - [`boost`] – jump-boost activation on booster contact and its expiry
//! - [`camera`] – feed player position and input intent into the camera smoother
//! - [`collision`] – player contact detection and per-category reactions
//! - [`enemyai`] – range hysteresis, chase steering and ledge avoidance
//! - [`falling`] – shake and drop of armed falling platforms
//! - [`floatingtext`] – spawn and drift short-lived world text
//! - [`input`] – fold the shell's input snapshot into [`crate::resources::input::InputState`]
//! - [`interaction`] – chests and the exit door
//! - [`level`] – spawn, tear down, restart and advance levels
//! - [`movement`] – integrate rigid bodies
//! - [`movementcontroller`] – translate input into player acceleration and jumps
//! - [`scheduler`] – fire due scheduler entries as events
//! - [`shell`] – forward notices to the host shell
//! - [`tilecollision`] – move bodies through terrain and set their ground contact
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – despawn entities whose time ran out

pub mod boost;
pub mod camera;
pub mod collision;
pub mod enemyai;
pub mod falling;
pub mod floatingtext;
pub mod input;
pub mod interaction;
pub mod level;
pub mod movement;
pub mod movementcontroller;
pub mod scheduler;
pub mod shell;
pub mod tilecollision;
pub mod time;
pub mod ttl;
