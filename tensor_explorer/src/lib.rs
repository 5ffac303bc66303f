//! Tensor shape explorer: 3D visualization of `[H, B, S, D]` attention tensors.
//!
//! Heads become blocks, the first batch slice becomes a grid of hoverable
//! cells, and the remaining batches trail behind as translucent layers.

pub mod camera;
pub mod config;
pub mod data;
pub mod error;
pub mod highlight;
pub mod layout;
pub mod picking;
pub mod render;
pub mod scene;
pub mod schedule;
pub mod state;
mod ui;

pub mod prelude;
pub mod sdk;

pub use data::{ActivationFixture, ActivationSource, Axis, CellIndex, TensorShape};
pub use error::ExplorerError;
pub use sdk::TensorExplorerBuilder;
pub use state::{ControlChannel, ControlCommand, ExplorerState};
pub use ui::{format_tooltip, shortcut_command};
