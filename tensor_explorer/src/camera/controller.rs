//! Orbit camera entity: drag/wheel input, autorotation, and projection sync.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::camera::orbit::{
    ortho_half_extents, ortho_transform, AUTOROTATE_STEP, ZOOM_PER_LINE, ZOOM_PER_PIXEL,
};
use crate::picking::PointerOverUi;
use crate::schedule::ExplorerSet;
use crate::state::{ControlChannel, ControlCommand, ExplorerState, ViewState};

/// Marker for the camera driven by the explorer state.
#[derive(Component)]
pub struct ExplorerCamera;

pub fn camera_plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            orbit_input_system.in_set(ExplorerSet::Input),
            autorotate_system.in_set(ExplorerSet::Tick),
            sync_camera_system.in_set(ExplorerSet::Camera),
        ),
    );
}

pub fn spawn_camera(commands: &mut Commands, view: &ViewState) -> Entity {
    let (transform, projection) = camera_pose(view, 1.0);
    commands
        .spawn((Camera3d::default(), projection, transform, ExplorerCamera))
        .id()
}

/// Transform and projection for the current view mode.
pub fn camera_pose(view: &ViewState, aspect: f32) -> (Transform, Projection) {
    if view.is_3d {
        return (
            view.orbit.transform(),
            Projection::Perspective(PerspectiveProjection::default()),
        );
    }
    let half = ortho_half_extents(aspect, view.orbit.distance);
    let projection = OrthographicProjection {
        scaling_mode: ScalingMode::Fixed {
            width: half.x * 2.0,
            height: half.y * 2.0,
        },
        ..OrthographicProjection::default_3d()
    };
    (ortho_transform(), Projection::Orthographic(projection))
}

/// Wheel distance delta; scrolling up moves the camera closer.
pub fn wheel_zoom(event: &MouseWheel) -> f32 {
    let per_unit = match event.unit {
        MouseScrollUnit::Line => ZOOM_PER_LINE,
        MouseScrollUnit::Pixel => ZOOM_PER_PIXEL,
    };
    -event.y * per_unit
}

fn orbit_input_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    pointer: Res<PointerOverUi>,
    channel: Res<ControlChannel>,
) {
    let drag: Vec2 = motion.read().map(|event| event.delta).sum();
    let scroll: f32 = wheel.read().map(wheel_zoom).sum();

    if pointer.0 {
        return;
    }
    if mouse.pressed(MouseButton::Left) && drag != Vec2::ZERO {
        channel.send(ControlCommand::Orbit {
            dx: drag.x,
            dy: drag.y,
        });
    }
    if scroll != 0.0 {
        channel.send(ControlCommand::Zoom(scroll));
    }
}

fn autorotate_system(mut state: ResMut<ExplorerState>) {
    if state.is_rotating() {
        state.tick_autorotate(AUTOROTATE_STEP);
    }
}

fn sync_camera_system(
    state: Res<ExplorerState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut resized: EventReader<WindowResized>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<ExplorerCamera>>,
) {
    let window_resized = resized.read().count() > 0;
    let Ok((mut transform, mut projection)) = cameras.get_single_mut() else {
        return;
    };

    let view = state.view();
    let aspect = windows
        .get_single()
        .map(|window| window.width() / window.height())
        .unwrap_or(1.0);
    let (target_transform, target_projection) = camera_pose(view, aspect);

    if *transform != target_transform {
        *transform = target_transform;
    }

    let mode_changed = matches!(*projection, Projection::Perspective(_)) != view.is_3d;
    let ortho_stale = !view.is_3d && (window_resized || state.is_changed());
    if mode_changed || ortho_stale {
        *projection = target_projection;
    }
}
