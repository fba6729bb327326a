//! Trickbit platformer core.
//!
//! This module exposes the core's ECS components, resources, systems, and events
//! for use in integration tests and by a host shell that draws and plays sound.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod script;
pub mod systems;
