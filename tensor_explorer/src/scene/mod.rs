//! Entities making up the tensor scene and the registry that indexes them.

mod builder;
mod components;
mod edges;
pub(crate) mod materials;
mod registry;

pub use builder::{rebuild_scene, setup_scene};
pub use components::{CellEmphasis, GhostSlab, TensorCell, TensorDrawable};
pub use edges::{edge_color, edge_plugin, EdgeSettings};
pub use registry::{CellRegistry, RegisteredCell, SceneSummary};
