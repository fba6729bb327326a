//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! a running level. Components define data only; systems in
//! [`crate::systems`] give them behavior.
//!
//! Submodules overview:
//! - [`animation`] – clip selection and mirroring for the host renderer
//! - [`boxcollider`] – axis-aligned rectangular collider
//! - [`enemy`] – enemy agent record and targeting state
//! - [`fallingplatform`] – platforms that drop after being stepped on
//! - [`floatingtext`] – short-lived world-space text
//! - [`groundcontact`] – per-frame ground-contact flag
//! - [`group`] – category tag used by collision dispatch
//! - [`interactable`] – keys, chests, doors, guide blocks, solids
//! - [`levelscoped`] – marker for entities torn down with the level
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – movement controller memory for the player body
//! - [`rigidbody`] – kinematic body with named forces, drag and speed cap
//! - [`ttl`] – countdown that despawns the entity

pub mod animation;
pub mod boxcollider;
pub mod enemy;
pub mod fallingplatform;
pub mod floatingtext;
pub mod groundcontact;
pub mod group;
pub mod interactable;
pub mod levelscoped;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
pub mod ttl;
