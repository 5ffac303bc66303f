use bevy::log::debug;
use bevy::prelude::*;

use crate::state::{CommandEffect, ControlChannel, ExplorerState};

/// Upper bound so a flooded channel cannot stall a frame.
pub const MAX_COMMANDS_PER_FRAME: usize = 64;

/// Drains queued control commands into the explorer state.
pub fn apply_control_commands(channel: Res<ControlChannel>, mut state: ResMut<ExplorerState>) {
    let mut applied = 0usize;
    while applied < MAX_COMMANDS_PER_FRAME {
        let Some(command) = channel.try_recv() else {
            break;
        };
        if state.apply(command) == CommandEffect::Rebuild {
            debug!(?command, "scene rebuild requested");
        }
        applied += 1;
    }
}
