mod controller;
mod orbit;

pub use controller::{camera_plugin, camera_pose, spawn_camera, wheel_zoom, ExplorerCamera};
pub use orbit::{
    clamp_distance, clamp_elevation, ortho_half_extents, OrbitState, AUTOROTATE_STEP,
    DEFAULT_AZIMUTH, DEFAULT_DISTANCE, DEFAULT_ELEVATION, MAX_DISTANCE, MAX_ELEVATION,
    MIN_DISTANCE, MIN_ELEVATION,
};
