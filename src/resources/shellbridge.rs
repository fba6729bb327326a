//! Outbound bridge to the host shell.
//!
//! Gameplay systems write [`GameNotice`] messages into the ECS mailbox;
//! [`forward_notices`](crate::systems::shell::forward_notices) copies them into
//! a `crossbeam_channel` so the shell (audio, HUD, particle spawns) can drain
//! them from whichever thread it runs on.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::notice::GameNotice;

#[derive(Resource, Clone)]
pub struct ShellBridge {
    pub tx: Sender<GameNotice>,
}

/// Install the bridge and the notice mailbox; returns the shell's receiving end.
pub fn setup_shell_bridge(world: &mut World) -> Receiver<GameNotice> {
    let (tx, rx) = unbounded();
    world.insert_resource(ShellBridge { tx });
    world.init_resource::<Messages<GameNotice>>();
    rx
}
