mod activations;
mod shape;

pub use activations::{ActivationFixture, ActivationSettings, ActivationSource};
pub use shape::{Axis, CellIndex, TensorShape};
