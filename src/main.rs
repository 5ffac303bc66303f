//! Tensorscope: interactive 3D view of an `[H, B, S, D]` tensor.

use bevy::prelude::*;
use tensor_explorer::TensorExplorerBuilder;

fn main() {
    let _ = dotenvy::dotenv();

    TensorExplorerBuilder::new()
        .env_config()
        .clear_color(Color::srgb(0.04, 0.05, 0.08))
        .build()
        .run();
}
