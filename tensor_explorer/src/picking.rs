//! Pointer picking against front-layer cells.
//!
//! Uses a ray/AABB test over the cell registry instead of Bevy's mesh
//! picking: ghost layers are never registered, so they can't occlude or be
//! hit, and egui panels keep the pointer to themselves.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::ExplorerCamera;
use crate::data::CellIndex;
use crate::scene::CellRegistry;
use crate::schedule::ExplorerSet;

/// The cell under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverInfo {
    pub entity: Entity,
    pub index: CellIndex,
    pub value: f32,
}

#[derive(Resource, Default, Clone, Copy, Debug, PartialEq)]
pub struct HoveredCell(pub Option<HoverInfo>);

impl HoveredCell {
    pub fn index(&self) -> Option<CellIndex> {
        self.0.map(|info| info.index)
    }
}

/// Set while the pointer is over a UI panel; picking and orbiting pause.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerOverUi(pub bool);

pub fn picking_plugin(app: &mut App) {
    app.add_systems(Update, hover_pick_system.in_set(ExplorerSet::Pick));
}

/// Nearest registered cell hit by the ray, if any.
pub fn pick(origin: Vec3, direction: Vec3, registry: &CellRegistry) -> Option<HoverInfo> {
    registry
        .iter()
        .filter_map(|(entity, cell)| {
            ray_aabb_intersect(origin, direction, cell.min(), cell.max())
                .map(|distance| (entity, cell, distance))
        })
        .min_by(|a, b| a.2.total_cmp(&b.2).then_with(|| a.1.index.cmp(&b.1.index)))
        .map(|(entity, cell, _)| HoverInfo {
            entity,
            index: cell.index,
            value: cell.value,
        })
}

/// Slab test. Returns the entry distance along `dir`, or 0 when the origin is
/// inside the box.
pub fn ray_aabb_intersect(origin: Vec3, dir: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Option<f32> {
    let inv_dir = 1.0 / dir;
    let t1 = (aabb_min - origin) * inv_dir;
    let t2 = (aabb_max - origin) * inv_dir;
    let t_min = t1.min(t2);
    let t_max = t1.max(t2);
    let t_enter = t_min.x.max(t_min.y).max(t_min.z);
    let t_exit = t_max.x.min(t_max.y).min(t_max.z);
    if t_enter <= t_exit && t_exit > 0.0 {
        Some(t_enter.max(0.0))
    } else {
        None
    }
}

fn hover_pick_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<ExplorerCamera>>,
    pointer: Res<PointerOverUi>,
    registry: Res<CellRegistry>,
    mut hovered: ResMut<HoveredCell>,
) {
    let hit = if pointer.0 {
        None
    } else {
        cursor_ray(&windows, &cameras)
            .and_then(|ray| pick(ray.origin, *ray.direction, &registry))
    };
    hovered.set_if_neq(HoveredCell(hit));
}

fn cursor_ray(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform), With<ExplorerCamera>>,
) -> Option<Ray3d> {
    let window = windows.get_single().ok()?;
    let cursor = window.cursor_position()?;
    let (camera, transform) = cameras.get_single().ok()?;
    camera.viewport_to_world(transform, cursor).ok()
}
