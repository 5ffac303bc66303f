//! Wireframe outlines around front-layer cells.

use bevy::prelude::*;

use crate::highlight::Emphasis;
use crate::scene::{CellEmphasis, TensorCell};
use crate::schedule::ExplorerSet;

#[derive(Resource, Clone, Debug)]
pub struct EdgeSettings {
    pub color: Color,
}

impl Default for EdgeSettings {
    fn default() -> Self {
        Self {
            color: Color::srgb(0.85, 0.9, 1.0),
        }
    }
}

pub fn edge_plugin(app: &mut App) {
    app.init_resource::<EdgeSettings>()
        .add_systems(Update, draw_cell_edges.in_set(ExplorerSet::Overlay));
}

/// Outline color for a cell in the given emphasis state.
pub fn edge_color(base: Color, emphasis: Emphasis) -> Color {
    base.with_alpha(emphasis.edge_alpha())
}

fn draw_cell_edges(
    mut gizmos: Gizmos,
    settings: Res<EdgeSettings>,
    cells: Query<(&TensorCell, &CellEmphasis, &GlobalTransform)>,
) {
    for (cell, emphasis, transform) in &cells {
        let outline = Transform::from_translation(transform.translation()).with_scale(cell.size);
        gizmos.cuboid(outline, edge_color(settings.color, emphasis.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_alpha_follows_emphasis() {
        let base = EdgeSettings::default().color;
        assert_eq!(edge_color(base, Emphasis::Highlighted).alpha(), 1.0);
        assert!(
            edge_color(base, Emphasis::Dimmed).alpha()
                < edge_color(base, Emphasis::Baseline).alpha()
        );
    }
}
