//! Notice plumbing toward the host shell.
//!
//! - [`forward_notices`] copies this frame's [`GameNotice`] messages into the
//!   [`ShellBridge`] channel.
//! - [`update_notice_messages`] advances the ECS mailbox.
//!
//! Bevy ECS' [`Messages`] API requires calling `update()` once per frame to
//! rotate its double buffer; without it old notices would pile up.
use bevy_ecs::prelude::*;
use log::{trace, warn};

use crate::events::notice::GameNotice;
use crate::resources::shellbridge::ShellBridge;

pub fn forward_notices(bridge: Res<ShellBridge>, mut reader: MessageReader<GameNotice>) {
    for notice in reader.read() {
        trace!("notice {:?}", notice);
        if bridge.tx.send(notice.clone()).is_err() {
            warn!("shell receiver dropped, notice {:?} lost", notice);
        }
    }
}

pub fn update_notice_messages(mut msgs: ResMut<Messages<GameNotice>>) {
    msgs.update();
}
