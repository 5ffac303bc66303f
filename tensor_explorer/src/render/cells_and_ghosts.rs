use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use crate::highlight::Emphasis;
use crate::layout::{BlockLayout, LayoutSettings};
use crate::render::TensorRenderer;
use crate::scene::materials;
use crate::scene::{
    CellEmphasis, CellRegistry, GhostSlab, RegisteredCell, TensorCell, TensorDrawable,
};

#[derive(Clone, Debug)]
pub struct CellRenderSettings {
    /// Single color used while the heatmap is off.
    pub base_color: Color,
    pub heatmap_saturation: f32,
    pub heatmap_lightness: f32,
}

#[derive(Clone, Debug)]
pub struct GhostRenderSettings {
    pub color: Color,
    pub alpha: f32,
    /// Ghosts fade further while the heatmap is on so cell colors stay readable.
    pub heatmap_alpha: f32,
}

#[derive(Clone, Debug)]
pub struct CellsAndGhostsSettings {
    pub layout: LayoutSettings,
    pub cells: CellRenderSettings,
    pub ghosts: GhostRenderSettings,
}

impl Default for CellsAndGhostsSettings {
    fn default() -> Self {
        Self {
            layout: LayoutSettings::default(),
            cells: CellRenderSettings {
                base_color: Color::hsl(200.0, 0.6, 0.5),
                heatmap_saturation: 0.85,
                heatmap_lightness: 0.5,
            },
            ghosts: GhostRenderSettings {
                color: Color::hsl(210.0, 0.3, 0.7),
                alpha: 0.14,
                heatmap_alpha: 0.08,
            },
        }
    }
}

/// Front layers as one cuboid per cell, other batches as translucent slabs.
#[derive(Default)]
pub struct CellsAndGhostsRenderer {
    pub settings: CellsAndGhostsSettings,
}

impl CellsAndGhostsRenderer {
    fn cell_color(&self, value: f32, heatmap: bool) -> Color {
        let cells = &self.settings.cells;
        if heatmap {
            materials::heatmap_color(value, cells.heatmap_saturation, cells.heatmap_lightness)
        } else {
            cells.base_color
        }
    }
}

impl TensorRenderer for CellsAndGhostsRenderer {
    fn layout_settings(&self) -> &LayoutSettings {
        &self.settings.layout
    }

    fn spawn_block(
        &self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials_res: &mut Assets<StandardMaterial>,
        registry: &mut CellRegistry,
        block: &BlockLayout,
        values: &[f32],
        heatmap: bool,
    ) {
        let layout = &self.settings.layout;
        let size = layout.cell_extents();
        let cell_mesh = meshes.add(Cuboid::from_size(size));
        let baseline = Emphasis::Baseline.emissive_intensity(heatmap);

        for (cell, &value) in block.front.cells.iter().zip(values) {
            let base_color = self.cell_color(value, heatmap);
            let material = materials::cell_material(materials_res, base_color, baseline);
            let entity = commands
                .spawn((
                    Mesh3d(cell_mesh.clone()),
                    MeshMaterial3d(material),
                    Transform::from_translation(cell.position),
                    Visibility::Visible,
                    TensorCell {
                        index: cell.index,
                        value,
                        base_color,
                        size,
                    },
                    CellEmphasis::default(),
                    TensorDrawable,
                ))
                .id();
            registry.insert(
                entity,
                RegisteredCell {
                    index: cell.index,
                    value,
                    center: cell.position,
                    half_extents: size / 2.0,
                },
            );
        }

        let Some(first) = block.ghosts.first() else {
            return;
        };
        let ghost_settings = &self.settings.ghosts;
        let alpha = if heatmap {
            ghost_settings.heatmap_alpha
        } else {
            ghost_settings.alpha
        };
        let ghost_mesh = meshes.add(Cuboid::new(
            first.footprint.x,
            first.footprint.y,
            layout.layer_depth,
        ));
        let ghost_material = materials::ghost_material(materials_res, ghost_settings.color, alpha);

        for ghost in &block.ghosts {
            commands.spawn((
                Mesh3d(ghost_mesh.clone()),
                MeshMaterial3d(ghost_material.clone()),
                Transform::from_translation(ghost.position),
                Visibility::Visible,
                NotShadowCaster,
                GhostSlab {
                    head: block.head,
                    batch: ghost.batch,
                },
                TensorDrawable,
            ));
        }
    }
}
