//! Renderer traits and default implementations.

mod cells_and_ghosts;

use bevy::prelude::*;

use crate::layout::{BlockLayout, LayoutSettings};
use crate::scene::CellRegistry;

pub use cells_and_ghosts::{
    CellRenderSettings, CellsAndGhostsRenderer, CellsAndGhostsSettings, GhostRenderSettings,
};

/// Turns one laid-out head into entities.
///
/// Implementations must register every front-layer cell they spawn and tag
/// every entity with `TensorDrawable` so the next rebuild can remove it.
pub trait TensorRenderer: Send + Sync + 'static {
    fn setup(&self, _app: &mut App) {}

    fn layout_settings(&self) -> &LayoutSettings;

    /// `values` holds the head's `S×D` activations in row-major order.
    #[allow(clippy::too_many_arguments)]
    fn spawn_block(
        &self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        registry: &mut CellRegistry,
        block: &BlockLayout,
        values: &[f32],
        heatmap: bool,
    );
}

#[derive(Resource)]
pub struct RendererResource(pub Box<dyn TensorRenderer>);

impl RendererResource {
    pub fn new(renderer: impl TensorRenderer) -> Self {
        Self(Box::new(renderer))
    }
}
