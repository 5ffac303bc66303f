//! Explorer state: the tensor shape, view settings, and camera orbit.
//!
//! All mutation goes through [`ExplorerState::apply`], which reports whether
//! the scene has to be rebuilt or only the camera moved.

mod channel;
mod dispatch;

use bevy::prelude::Resource;

use crate::camera::OrbitState;
use crate::data::{Axis, TensorShape};
use crate::layout::sanitize_explode;

pub use channel::ControlChannel;
pub use dispatch::{apply_control_commands, MAX_COMMANDS_PER_FRAME};

pub const DEFAULT_EXPLODE: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub explode: f32,
    pub is_3d: bool,
    pub heatmap: bool,
    pub orbit: OrbitState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            explode: DEFAULT_EXPLODE,
            is_3d: true,
            heatmap: false,
            orbit: OrbitState::default(),
        }
    }
}

/// A discrete input, produced by widgets, shortcuts, or the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlCommand {
    SetAxis(Axis, u32),
    SetShape(TensorShape),
    SetExplode(f32),
    ToggleView,
    ToggleHeatmap,
    ToggleRotate,
    ResetCamera,
    Orbit { dx: f32, dy: f32 },
    Zoom(f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandEffect {
    Ignored,
    Camera,
    Rebuild,
}

#[derive(Resource, Debug)]
pub struct ExplorerState {
    shape: TensorShape,
    view: ViewState,
    autorotate: bool,
    dirty: bool,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new(TensorShape::default(), DEFAULT_EXPLODE)
    }
}

impl ExplorerState {
    /// Starts dirty so the first frame builds the scene.
    pub fn new(shape: TensorShape, explode: f32) -> Self {
        Self {
            shape: shape.normalized(),
            view: ViewState {
                explode: sanitize_explode(explode),
                ..ViewState::default()
            },
            autorotate: false,
            dirty: true,
        }
    }

    pub fn shape(&self) -> TensorShape {
        self.shape
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn autorotate(&self) -> bool {
        self.autorotate
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears and returns the rebuild flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn apply(&mut self, command: ControlCommand) -> CommandEffect {
        match command {
            ControlCommand::SetAxis(axis, value) => {
                self.shape = self.shape.with_axis(axis, value);
                self.mark_dirty()
            }
            ControlCommand::SetShape(shape) => {
                self.shape = shape.normalized();
                self.mark_dirty()
            }
            ControlCommand::SetExplode(explode) => {
                if explode.is_nan() {
                    return CommandEffect::Ignored;
                }
                self.view = ViewState {
                    explode: sanitize_explode(explode),
                    ..self.view
                };
                self.mark_dirty()
            }
            ControlCommand::ToggleView => {
                self.view = ViewState {
                    is_3d: !self.view.is_3d,
                    ..self.view
                };
                self.mark_dirty()
            }
            ControlCommand::ToggleHeatmap => {
                self.view = ViewState {
                    heatmap: !self.view.heatmap,
                    ..self.view
                };
                self.mark_dirty()
            }
            ControlCommand::ToggleRotate => {
                self.autorotate = !self.autorotate;
                CommandEffect::Camera
            }
            ControlCommand::ResetCamera => {
                self.update_orbit(OrbitState::reset);
                CommandEffect::Camera
            }
            ControlCommand::Orbit { dx, dy } => {
                // Orthographic mode is a fixed front view.
                if !self.view.is_3d {
                    return CommandEffect::Ignored;
                }
                self.update_orbit(|orbit| orbit.drag(dx, dy));
                CommandEffect::Camera
            }
            ControlCommand::Zoom(delta) => {
                if !delta.is_finite() {
                    return CommandEffect::Ignored;
                }
                self.update_orbit(|orbit| orbit.zoom(delta));
                CommandEffect::Camera
            }
        }
    }

    /// Whether autorotation moves the camera this frame. The orthographic
    /// view is a fixed front view, so it holds still there.
    pub fn is_rotating(&self) -> bool {
        self.autorotate && self.view.is_3d
    }

    /// One frame of autorotation. Returns whether the camera moved.
    pub fn tick_autorotate(&mut self, step: f32) -> bool {
        if !self.is_rotating() {
            return false;
        }
        self.update_orbit(|orbit| orbit.rotate(step));
        true
    }

    fn update_orbit(&mut self, f: impl FnOnce(&mut OrbitState)) {
        let mut orbit = self.view.orbit;
        f(&mut orbit);
        self.view = ViewState {
            orbit,
            ..self.view
        };
    }

    fn mark_dirty(&mut self) -> CommandEffect {
        self.dirty = true;
        CommandEffect::Rebuild
    }
}
