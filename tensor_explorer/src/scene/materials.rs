//! Shared material and color helpers for cells and ghost layers.

use bevy::prelude::*;

/// Hue of the blue end of the heatmap sweep, in degrees.
const HEATMAP_COLD_HUE: f32 = 240.0;

/// Blue (0) → red (1) hue sweep at fixed saturation and lightness.
/// Values outside `[0, 1]` clamp; NaN reads as 0.
pub fn heatmap_color(value: f32, saturation: f32, lightness: f32) -> Color {
    let t = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    };
    Color::hsl(HEATMAP_COLD_HUE * (1.0 - t), saturation, lightness)
}

/// Emissive term for `base` at the given emphasis intensity.
pub fn emissive_for(base: Color, intensity: f32) -> LinearRgba {
    let lin = base.to_linear();
    LinearRgba::rgb(
        lin.red * intensity,
        lin.green * intensity,
        lin.blue * intensity,
    )
}

/// Each cell gets its own material so emphasis can be edited in place.
pub fn cell_material(
    materials: &mut Assets<StandardMaterial>,
    base: Color,
    intensity: f32,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: base,
        emissive: emissive_for(base, intensity),
        perceptual_roughness: 0.6,
        ..default()
    })
}

pub fn ghost_material(
    materials: &mut Assets<StandardMaterial>,
    color: Color,
    alpha: f32,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: color.with_alpha(alpha),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    })
}
