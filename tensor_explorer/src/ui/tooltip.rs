//! Hover tooltip next to the cursor.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{egui, EguiContexts};

use crate::picking::{HoverInfo, HoveredCell};
use crate::schedule::ExplorerSet;

const CURSOR_OFFSET: f32 = 16.0;

pub fn tooltip_plugin(app: &mut App) {
    app.add_systems(Update, tooltip_system.in_set(ExplorerSet::Overlay));
}

/// Indices as `(h, b, s, d)` and the value to five decimals.
pub fn format_tooltip(info: &HoverInfo) -> String {
    format!("{}\nvalue {:.5}", info.index, info.value)
}

fn tooltip_system(
    mut contexts: EguiContexts,
    hovered: Res<HoveredCell>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(info) = hovered.0 else {
        return;
    };
    let Some(cursor) = windows.get_single().ok().and_then(Window::cursor_position) else {
        return;
    };

    egui::Area::new(egui::Id::new("cell_tooltip"))
        .order(egui::Order::Tooltip)
        .fixed_pos(egui::pos2(cursor.x + CURSOR_OFFSET, cursor.y + CURSOR_OFFSET))
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(format_tooltip(&info)).monospace());
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CellIndex;

    fn info(value: f32) -> HoverInfo {
        HoverInfo {
            entity: Entity::from_raw(1),
            index: CellIndex::new(1, 0, 3, 5),
            value,
        }
    }

    #[test]
    fn tooltip_lists_indices_and_value() {
        assert_eq!(format_tooltip(&info(0.5)), "(1, 0, 3, 5)\nvalue 0.50000");
    }

    #[test]
    fn tooltip_rounds_to_five_decimals() {
        assert_eq!(format_tooltip(&info(0.123456789)), "(1, 0, 3, 5)\nvalue 0.12346");
        assert_eq!(format_tooltip(&info(0.0)), "(1, 0, 3, 5)\nvalue 0.00000");
    }
}
