use bevy::prelude::*;

use crate::engine::camera::scroll_camera::{CameraRig, SceneCamera};

const LOG_CAMERA_KEY: KeyCode = KeyCode::KeyC;

/// Log camera position and target on `C`, for authoring new keyframes.
pub fn log_camera_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    rig: Res<CameraRig>,
    cameras: Query<&Transform, With<SceneCamera>>,
) {
    if !keyboard.just_pressed(LOG_CAMERA_KEY) {
        return;
    }

    for transform in &cameras {
        let position = transform.translation;
        info!(
            "Camera position: ({:.3}, {:.3}, {:.3})",
            position.x, position.y, position.z
        );
    }
    info!(
        "Camera target: ({:.3}, {:.3}, {:.3})",
        rig.target.x, rig.target.y, rig.target.z
    );
}
