//! Keyboard shortcuts.

use bevy::prelude::*;

use crate::schedule::ExplorerSet;
use crate::state::{ControlChannel, ControlCommand};

pub fn shortcut_plugin(app: &mut App) {
    app.add_systems(Update, shortcut_system.in_set(ExplorerSet::Input));
}

pub fn shortcut_command(key: KeyCode) -> Option<ControlCommand> {
    match key {
        KeyCode::KeyR => Some(ControlCommand::ToggleRotate),
        KeyCode::KeyH => Some(ControlCommand::ToggleHeatmap),
        KeyCode::KeyV => Some(ControlCommand::ToggleView),
        KeyCode::Home => Some(ControlCommand::ResetCamera),
        _ => None,
    }
}

fn shortcut_system(keys: Res<ButtonInput<KeyCode>>, channel: Res<ControlChannel>) {
    for &key in keys.get_just_pressed() {
        if let Some(command) = shortcut_command(key) {
            channel.send(command);
        }
    }
}
