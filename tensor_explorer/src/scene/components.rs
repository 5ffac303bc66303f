//! Components stored on spawned cell and ghost entities.

use bevy::prelude::*;

use crate::data::CellIndex;
use crate::highlight::Emphasis;

/// Everything a rebuild spawns; despawned wholesale by the next one.
#[derive(Component)]
pub struct TensorDrawable;

/// A front-layer cell.
#[derive(Component, Debug)]
pub struct TensorCell {
    pub index: CellIndex,
    pub value: f32,
    /// Unlit color before emphasis; emissive is derived from it.
    pub base_color: Color,
    pub size: Vec3,
}

/// Current emphasis of a front-layer cell.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CellEmphasis(pub Emphasis);

/// Coarse volume standing in for batch `batch` of head `head`.
#[derive(Component, Debug)]
pub struct GhostSlab {
    pub head: u32,
    pub batch: u32,
}
