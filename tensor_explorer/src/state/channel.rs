use bevy::log::warn;
use bevy::prelude::Resource;
use crossbeam_channel::{Receiver, Sender};

use crate::state::ControlCommand;

/// Bevy resource carrying control commands into the ECS.
/// Widgets and shortcuts send; `apply_control_commands` drains it each frame.
/// Senders are cloneable, so hosts can also drive the explorer from another
/// thread.
#[derive(Resource, Clone)]
pub struct ControlChannel {
    tx: Sender<ControlCommand>,
    rx: Receiver<ControlCommand>,
}

impl Default for ControlChannel {
    fn default() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }
}

impl ControlChannel {
    pub fn send(&self, command: ControlCommand) {
        if self.tx.send(command).is_err() {
            warn!("control channel closed, dropping {command:?}");
        }
    }

    pub fn sender(&self) -> Sender<ControlCommand> {
        self.tx.clone()
    }

    pub fn try_recv(&self) -> Option<ControlCommand> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_arrive_in_send_order() {
        let channel = ControlChannel::default();
        channel.send(ControlCommand::ToggleHeatmap);
        channel.send(ControlCommand::Zoom(2.0));

        assert_eq!(channel.try_recv(), Some(ControlCommand::ToggleHeatmap));
        assert_eq!(channel.try_recv(), Some(ControlCommand::Zoom(2.0)));
        assert_eq!(channel.try_recv(), None);
    }

    #[test]
    fn external_senders_reach_the_same_queue() {
        let channel = ControlChannel::default();
        let sender = channel.sender();
        std::thread::spawn(move || sender.send(ControlCommand::ResetCamera).unwrap())
            .join()
            .unwrap();

        assert_eq!(channel.try_recv(), Some(ControlCommand::ResetCamera));
    }
}
