//! Cross-section highlighting.
//!
//! Hovering a front cell at `(s, d)` emphasizes that `(s, d)` in every head
//! and dims the rest. Only batch 0 is interactive, so the batch index never
//! takes part in the match.

use bevy::prelude::*;

use crate::data::CellIndex;
use crate::picking::HoveredCell;
use crate::scene::materials::emissive_for;
use crate::scene::{CellEmphasis, CellRegistry, TensorCell};
use crate::schedule::ExplorerSet;
use crate::state::ExplorerState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Emphasis {
    /// Nothing hovered.
    #[default]
    Baseline,
    /// In the hovered cross-section.
    Highlighted,
    /// Something else is hovered.
    Dimmed,
}

impl Emphasis {
    pub fn emissive_intensity(self, heatmap: bool) -> f32 {
        match self {
            Emphasis::Highlighted => 0.9,
            Emphasis::Dimmed => 0.0,
            Emphasis::Baseline if heatmap => 0.25,
            Emphasis::Baseline => 0.1,
        }
    }

    pub fn edge_alpha(self) -> f32 {
        match self {
            Emphasis::Highlighted => 1.0,
            Emphasis::Dimmed => 0.08,
            Emphasis::Baseline => 0.3,
        }
    }
}

pub fn in_cross_section(hovered: CellIndex, cell: CellIndex) -> bool {
    cell.b == 0 && cell.s == hovered.s && cell.d == hovered.d
}

pub fn emphasis_for(hovered: Option<CellIndex>, cell: CellIndex) -> Emphasis {
    match hovered {
        None => Emphasis::Baseline,
        Some(hovered) if in_cross_section(hovered, cell) => Emphasis::Highlighted,
        Some(_) => Emphasis::Dimmed,
    }
}

/// Cells from `cells` sharing the hovered `(s, d)`, in input order.
pub fn cross_section(
    hovered: CellIndex,
    cells: impl IntoIterator<Item = CellIndex>,
) -> Vec<CellIndex> {
    cells
        .into_iter()
        .filter(|&cell| in_cross_section(hovered, cell))
        .collect()
}

pub fn highlight_plugin(app: &mut App) {
    app.add_systems(Update, apply_highlight_system.in_set(ExplorerSet::Highlight));
}

/// Re-evaluates emphasis when the hovered cell or the scene changes and
/// edits the affected materials in place.
pub fn apply_highlight_system(
    hovered: Res<HoveredCell>,
    registry: Res<CellRegistry>,
    state: Res<ExplorerState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut cells: Query<(
        &TensorCell,
        &MeshMaterial3d<StandardMaterial>,
        &mut CellEmphasis,
    )>,
) {
    if !hovered.is_changed() && !registry.is_changed() {
        return;
    }

    let target = hovered.index();
    let heatmap = state.view().heatmap;
    for (cell, material, mut emphasis) in &mut cells {
        let next = emphasis_for(target, cell.index);
        if emphasis.0 == next {
            continue;
        }
        emphasis.0 = next;
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.emissive = emissive_for(cell.base_color, next.emissive_intensity(heatmap));
        }
    }
}
