//! Minimal prelude for SDK consumers.

pub use crate::config::{explorer_config, ExplorerConfig};
pub use crate::data::{ActivationFixture, ActivationSource, Axis, CellIndex, TensorShape};
pub use crate::layout::{layout, BlockLayout, LayoutSettings};
pub use crate::render::{CellsAndGhostsRenderer, TensorRenderer};
pub use crate::sdk::TensorExplorerBuilder;
pub use crate::state::{ControlChannel, ControlCommand};
