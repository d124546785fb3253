use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::engine::animation::camera_binding::{CameraValuesChanged, Timeline, emit_camera_values};
use crate::engine::camera::scroll_camera::{
    CameraRig, aim_camera_at_target, apply_camera_values, spawn_scene_camera,
};
use crate::engine::scroll::page_scroll::{
    PageScrolled, ScrollQueue, apply_scroll_to_sequence, drain_scroll_queue,
};
use crate::engine::systems::render_loop::{RenderLoopHandle, stop_when_cancelled};
use crate::engine::systems::resize::{ViewportSize, handle_window_resize};

/// Frame order: scroll input, then timeline, then camera.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollCameraSet {
    Input,
    Timeline,
    Camera,
}

/// Scroll samples drive the timeline, the timeline drives the camera.
///
/// Uses an existing `Timeline` resource if one was inserted before the
/// plugin; otherwise restores the bundled state.
pub struct ScrollCameraPlugin;

impl Plugin for ScrollCameraPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<Timeline>() {
            app.insert_resource(Timeline::from_bundled_state());
        }

        app.add_event::<PageScrolled>()
            .add_event::<CameraValuesChanged>()
            .add_event::<WindowResized>()
            .init_resource::<ScrollQueue>()
            .init_resource::<CameraRig>()
            .init_resource::<ViewportSize>()
            .init_resource::<RenderLoopHandle>()
            .configure_sets(
                Update,
                (
                    ScrollCameraSet::Input,
                    ScrollCameraSet::Timeline,
                    ScrollCameraSet::Camera,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_scene_camera)
            .add_systems(Update, drain_scroll_queue.in_set(ScrollCameraSet::Input))
            .add_systems(
                Update,
                (apply_scroll_to_sequence, emit_camera_values)
                    .chain()
                    .in_set(ScrollCameraSet::Timeline),
            )
            .add_systems(
                Update,
                (apply_camera_values, aim_camera_at_target)
                    .chain()
                    .in_set(ScrollCameraSet::Camera),
            )
            .add_systems(Update, (handle_window_resize, stop_when_cancelled));
    }
}
