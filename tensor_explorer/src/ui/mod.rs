mod panel;
mod shortcuts;
mod tooltip;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin};

use crate::picking::PointerOverUi;
use crate::schedule::ExplorerSet;

pub use panel::panel_plugin;
pub use shortcuts::{shortcut_command, shortcut_plugin};
pub use tooltip::{format_tooltip, tooltip_plugin};

/// Egui integration shared by the panel and tooltip.
pub fn egui_plugin(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
    app.add_systems(Update, track_pointer_system.in_set(ExplorerSet::Pointer));
}

fn track_pointer_system(mut contexts: EguiContexts, mut pointer: ResMut<PointerOverUi>) {
    let ctx = contexts.ctx_mut();
    let over = ctx.is_pointer_over_area() || ctx.wants_pointer_input();
    pointer.set_if_neq(PointerOverUi(over));
}
