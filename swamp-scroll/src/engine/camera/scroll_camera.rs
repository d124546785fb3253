use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::camera::{FAR_PLANE, FOV_DEGREES, INITIAL_POSITION, INITIAL_TARGET, NEAR_PLANE};

use crate::engine::animation::camera_binding::CameraValuesChanged;
use crate::engine::systems::resize::ViewportSize;

/// Marks the camera the timeline drives.
#[derive(Component)]
pub struct SceneCamera;

/// Look-at target shared between the timeline binding (writer) and the
/// per-frame aim system (reader).
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraRig {
    pub target: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            target: INITIAL_TARGET,
        }
    }
}

pub fn spawn_scene_camera(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) {
    if let Ok(window) = windows.single() {
        *viewport = ViewportSize {
            width: window.width(),
            height: window.height(),
        };
    }

    commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            aspect_ratio: viewport.aspect_ratio().unwrap_or(1.0),
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }),
        Transform::from_translation(INITIAL_POSITION).looking_at(INITIAL_TARGET, Vec3::Y),
    ));
}

/// Copy the latest timeline values into the camera translation and the rig target.
pub fn apply_camera_values(
    mut changes: EventReader<CameraValuesChanged>,
    mut rig: ResMut<CameraRig>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
) {
    let Some(CameraValuesChanged(values)) = changes.read().last() else {
        return;
    };

    for mut transform in &mut cameras {
        transform.translation = values.position;
    }
    rig.target = values.target;
}

/// Runs every frame: point the camera at the last timeline target.
pub fn aim_camera_at_target(
    rig: Res<CameraRig>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
) {
    for mut transform in &mut cameras {
        transform.look_at(rig.target, Vec3::Y);
    }
}
