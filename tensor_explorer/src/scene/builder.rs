//! Scene setup and the full rebuild pipeline: layout → renderer → registry.

use bevy::log::debug;
use bevy::prelude::*;

use crate::camera::spawn_camera;
use crate::data::{ActivationSettings, CellIndex};
use crate::layout::{interactive_cell_count, layout, scene_extent};
use crate::picking::HoveredCell;
use crate::render::RendererResource;
use crate::scene::{CellRegistry, SceneSummary, TensorDrawable};
use crate::state::ExplorerState;

pub fn setup_scene(mut commands: Commands, state: Res<ExplorerState>) {
    spawn_camera(&mut commands, state.view());
    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            ..default()
        },
        Transform::from_xyz(8., 14., 10.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });
}

/// Discards every drawable and the registry, then lays out and spawns the
/// current shape from scratch. Runs only on frames where the state is dirty.
#[allow(clippy::too_many_arguments)]
pub fn rebuild_scene(
    mut commands: Commands,
    mut state: ResMut<ExplorerState>,
    renderer: Res<RendererResource>,
    activations: Res<ActivationSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<CellRegistry>,
    mut summary: ResMut<SceneSummary>,
    mut hovered: ResMut<HoveredCell>,
    drawables: Query<Entity, With<TensorDrawable>>,
) {
    if !state.is_dirty() {
        return;
    }
    state.take_dirty();

    for entity in &drawables {
        commands.entity(entity).despawn();
    }

    let shape = state.shape();
    let view = *state.view();
    let settings = renderer.0.layout_settings();
    let blocks = layout(shape, view.explode, settings);
    let values = activations.0.values_for(shape);
    let per_head = shape.cells_per_head();

    let mut next = CellRegistry::with_generation(registry.generation() + 1);
    for block in &blocks {
        let start = CellIndex::new(block.head, 0, 0, 0).front_offset(&shape);
        let head_values = values.get(start..start + per_head).unwrap_or(&[]);
        renderer.0.spawn_block(
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut next,
            block,
            head_values,
            view.heatmap,
        );
    }

    let ghosts = blocks.iter().map(|block| block.ghosts.len()).sum();
    debug!(
        %shape,
        cells = interactive_cell_count(&blocks),
        ghosts,
        generation = next.generation(),
        "scene rebuilt"
    );

    *summary = SceneSummary {
        shape_label: shape.to_string(),
        cells: next.len(),
        ghosts,
        extent: scene_extent(&blocks, settings),
        rebuilds: summary.rebuilds + 1,
    };
    *registry = next;
    hovered.set_if_neq(HoveredCell(None));
}
