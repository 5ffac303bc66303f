//! Per-frame ordering of the explorer systems.

use bevy::prelude::*;

/// Stages of one explorer tick, run in declaration order inside `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplorerSet {
    /// Whether egui owns the pointer this frame.
    Pointer,
    /// Widgets, shortcuts, and pointer input turn into control commands.
    Input,
    Dispatch,
    Rebuild,
    Pick,
    Highlight,
    /// Autorotation.
    Tick,
    Camera,
    /// Overlays drawn on top of the frame (tooltip, cell edges).
    Overlay,
}

pub fn configure_explorer_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            ExplorerSet::Pointer,
            ExplorerSet::Input,
            ExplorerSet::Dispatch,
            ExplorerSet::Rebuild,
            ExplorerSet::Pick,
            ExplorerSet::Highlight,
            ExplorerSet::Tick,
            ExplorerSet::Camera,
            ExplorerSet::Overlay,
        )
            .chain(),
    );
}
