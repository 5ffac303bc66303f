//! Orbit model: azimuth `x`, elevation `y`, distance from the origin.

use std::f32::consts::TAU;

use bevy::math::{Vec2, Vec3};
use bevy::prelude::Transform;

pub const MIN_ELEVATION: f32 = -1.5;
pub const MAX_ELEVATION: f32 = 1.5;
pub const MIN_DISTANCE: f32 = 5.0;
pub const MAX_DISTANCE: f32 = 100.0;

pub const DEFAULT_AZIMUTH: f32 = 0.6;
pub const DEFAULT_ELEVATION: f32 = 0.4;
pub const DEFAULT_DISTANCE: f32 = 30.0;

/// Radians per pixel of drag.
pub const AZIMUTH_SENSITIVITY: f32 = 0.01;
pub const ELEVATION_SENSITIVITY: f32 = 0.01;
/// Distance per wheel unit, for pixel and line scroll devices.
pub const ZOOM_PER_PIXEL: f32 = 0.05;
pub const ZOOM_PER_LINE: f32 = 1.0;
/// Radians added to the azimuth per frame while autorotating.
pub const AUTOROTATE_STEP: f32 = 0.005;

/// Where the orthographic camera sits on +Z.
pub const ORTHO_DISTANCE: f32 = 50.0;
/// Vertical extent of the orthographic view at the default distance.
pub const ORTHO_FIELD: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    pub x: f32,
    pub y: f32,
    pub distance: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            x: DEFAULT_AZIMUTH,
            y: DEFAULT_ELEVATION,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl OrbitState {
    /// Applies a pointer drag in pixels. Non-finite deltas are ignored.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.x -= dx * AZIMUTH_SENSITIVITY;
        self.y = clamp_elevation(self.y + dy * ELEVATION_SENSITIVITY);
    }

    /// Moves the camera by `delta` world units along its distance.
    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.distance = clamp_distance(self.distance + delta);
    }

    pub fn rotate(&mut self, step: f32) {
        self.x = (self.x + step).rem_euclid(TAU);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn position(&self) -> Vec3 {
        let (sin_x, cos_x) = self.x.sin_cos();
        let (sin_y, cos_y) = self.y.sin_cos();
        Vec3::new(
            self.distance * sin_x * cos_y,
            self.distance * sin_y,
            self.distance * cos_x * cos_y,
        )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

pub fn clamp_elevation(y: f32) -> f32 {
    y.clamp(MIN_ELEVATION, MAX_ELEVATION)
}

pub fn clamp_distance(distance: f32) -> f32 {
    distance.clamp(MIN_DISTANCE, MAX_DISTANCE)
}

/// Half-width and half-height of the orthographic frustum.
///
/// The field scales with the orbit distance so wheel zoom also works in 2D.
/// A degenerate aspect (minimised window) falls back to square.
pub fn ortho_half_extents(aspect: f32, distance: f32) -> Vec2 {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };
    let half_height = ORTHO_FIELD / 2.0 * (clamp_distance(distance) / DEFAULT_DISTANCE);
    Vec2::new(half_height * aspect, half_height)
}

pub fn ortho_transform() -> Transform {
    Transform::from_xyz(0.0, 0.0, ORTHO_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y)
}
