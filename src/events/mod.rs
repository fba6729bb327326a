//! Event types exchanged across systems.
//!
//! Observer events (collisions, timers, level requests) are handled in the
//! same frame they are triggered; [`notice::GameNotice`] messages travel out
//! to the host shell.
//!
//! Submodules:
//! - [`collision`] – player contact with entities and region layers
//! - [`level`] – restart/advance requests
//! - [`notice`] – outbound notices for audio and HUD
//! - [`timer`] – scheduler entries coming due
pub mod collision;
pub mod level;
pub mod notice;
pub mod timer;
