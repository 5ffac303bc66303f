//! Control panel: shape sliders, explode factor, view toggles, scene stats.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::data::Axis;
use crate::scene::SceneSummary;
use crate::schedule::ExplorerSet;
use crate::state::{ControlChannel, ControlCommand, ExplorerState};

const EXPLODE_SLIDER_MAX: f32 = 2.0;

pub fn panel_plugin(app: &mut App) {
    app.add_systems(Update, control_panel_system.in_set(ExplorerSet::Input));
}

fn control_panel_system(
    mut contexts: EguiContexts,
    state: Res<ExplorerState>,
    summary: Res<SceneSummary>,
    channel: Res<ControlChannel>,
) {
    let shape = state.shape();
    let view = *state.view();

    egui::SidePanel::left("tensor_controls")
        .resizable(false)
        .default_width(230.0)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 225))
                .inner_margin(egui::Margin::same(12)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            ui.label(
                egui::RichText::new(summary.shape_label.as_str())
                    .monospace()
                    .size(16.0)
                    .color(egui::Color32::from_rgb(100, 200, 240)),
            );
            ui.label("[H, B, S, D]");
            ui.add_space(6.0);

            for axis in Axis::ALL {
                let mut value = shape.get(axis);
                let slider =
                    egui::Slider::new(&mut value, 1..=axis.slider_max()).text(axis.label());
                if ui.add(slider).changed() {
                    channel.send(ControlCommand::SetAxis(axis, value));
                }
            }

            let mut explode = view.explode;
            let slider = egui::Slider::new(&mut explode, 0.0..=EXPLODE_SLIDER_MAX)
                .text("Explode")
                .fixed_decimals(2);
            if ui.add(slider).changed() {
                channel.send(ControlCommand::SetExplode(explode));
            }

            ui.separator();
            ui.horizontal_wrapped(|ui| {
                if ui.selectable_label(state.autorotate(), "Rotate").clicked() {
                    channel.send(ControlCommand::ToggleRotate);
                }
                if ui.selectable_label(view.heatmap, "Heatmap").clicked() {
                    channel.send(ControlCommand::ToggleHeatmap);
                }
                let mode = if view.is_3d { "3D" } else { "2D" };
                if ui.button(mode).clicked() {
                    channel.send(ControlCommand::ToggleView);
                }
                if ui.button("Reset").clicked() {
                    channel.send(ControlCommand::ResetCamera);
                }
            });

            ui.separator();
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.label(format!("Cells    {}", summary.cells));
            ui.label(format!("Ghosts   {}", summary.ghosts));
            ui.label(format!("Extent   {:.1}", summary.extent));
            ui.label(format!("Rebuilds {}", summary.rebuilds));
            ui.add_space(4.0);
            ui.small("R rotate · H heatmap · V view · Home reset");
        });
}
