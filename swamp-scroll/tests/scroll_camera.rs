use bevy::prelude::*;
use bevy::window::WindowResized;

use swamp_scroll::engine::animation::camera_binding::{CameraValues, CameraValuesChanged, Timeline};
use swamp_scroll::engine::camera::scroll_camera::{CameraRig, SceneCamera};
use swamp_scroll::engine::core::plugin::ScrollCameraPlugin;
use swamp_scroll::engine::scroll::page_scroll::{ScrollMetrics, ScrollQueue};
use swamp_scroll::engine::systems::render_loop::RenderLoopHandle;
use swamp_scroll::engine::systems::resize::ViewportSize;

// Linear easing: position.x runs 0 -> 10 and target.z runs 0 -> -10 over the sequence.
const LINEAR_STATE: &str = r#"{
    "sheetsById": {
        "Main": {
            "sequence": {
                "type": "PositionalSequence",
                "length": 10,
                "subUnitsPerUnit": 30,
                "tracksByObject": {
                    "Camera": {
                        "trackIdByPropPath": {
                            "[\"position\",\"x\"]": "px",
                            "[\"target\",\"z\"]": "tz"
                        },
                        "trackData": {
                            "px": {
                                "type": "BasicKeyframedTrack",
                                "keyframes": [
                                    { "id": "p0", "position": 0, "value": 0, "connectedRight": true,
                                      "handles": [0.5, 1, 0.3333333333333333, 0.3333333333333333] },
                                    { "id": "p1", "position": 10, "value": 10, "connectedRight": false,
                                      "handles": [0.6666666666666666, 0.6666666666666666, 0.5, 0] }
                                ]
                            },
                            "tz": {
                                "type": "BasicKeyframedTrack",
                                "keyframes": [
                                    { "id": "t0", "position": 0, "value": 0, "connectedRight": true,
                                      "handles": [0.5, 1, 0.3333333333333333, 0.3333333333333333] },
                                    { "id": "t1", "position": 10, "value": -10, "connectedRight": false,
                                      "handles": [0.6666666666666666, 0.6666666666666666, 0.5, 0] }
                                ]
                            }
                        }
                    }
                }
            }
        }
    }
}"#;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Timeline::from_state_json(LINEAR_STATE).unwrap())
        .add_plugins(ScrollCameraPlugin);
    app.update();
    app
}

fn scroll_to(app: &mut App, scroll_y: f64, scroll_height: f64, viewport_height: f64) {
    app.world().resource::<ScrollQueue>().push(ScrollMetrics {
        scroll_y,
        scroll_height,
        viewport_height,
    });
    app.update();
}

fn sequence_position(app: &App) -> f64 {
    app.world()
        .resource::<Timeline>()
        .sequence()
        .unwrap()
        .position()
}

fn camera_transform(app: &mut App) -> Transform {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&Transform, With<SceneCamera>>();
    *query.iter(world).next().unwrap()
}

#[test]
fn test_top_of_page_is_sequence_start() {
    let mut app = test_app();
    scroll_to(&mut app, 0.0, 5000.0, 1000.0);

    assert_eq!(sequence_position(&app), 0.0);
    let transform = camera_transform(&mut app);
    assert_eq!(transform.translation, Vec3::new(0.0, 5.0, 20.0));
}

#[test]
fn test_bottom_of_page_is_sequence_end() {
    let mut app = test_app();
    scroll_to(&mut app, 4000.0, 5000.0, 1000.0);

    assert_eq!(sequence_position(&app), 10.0);
    let transform = camera_transform(&mut app);
    assert!((transform.translation.x - 10.0).abs() < 1e-4);
    assert!((app.world().resource::<CameraRig>().target.z + 10.0).abs() < 1e-4);
}

#[test]
fn test_overscroll_is_clamped() {
    let mut app = test_app();
    scroll_to(&mut app, 4100.0, 5000.0, 1000.0);
    assert_eq!(sequence_position(&app), 10.0);

    scroll_to(&mut app, -50.0, 5000.0, 1000.0);
    assert_eq!(sequence_position(&app), 0.0);
}

#[test]
fn test_scrolling_down_advances_monotonically() {
    let mut app = test_app();
    let mut previous = -1.0;
    for scroll_y in [0.0, 400.0, 1250.0, 2000.0, 3999.0, 4000.0] {
        scroll_to(&mut app, scroll_y, 5000.0, 1000.0);
        let position = sequence_position(&app);
        assert!(position >= previous);
        previous = position;
    }

    // Same scroll offset, same position.
    scroll_to(&mut app, 1000.0, 5000.0, 1000.0);
    let first = sequence_position(&app);
    scroll_to(&mut app, 1000.0, 5000.0, 1000.0);
    assert_eq!(sequence_position(&app), first);
    assert_eq!(first, 2.5);
}

#[test]
fn test_unscrollable_page_keeps_position() {
    let mut app = test_app();
    scroll_to(&mut app, 2000.0, 5000.0, 1000.0);
    assert_eq!(sequence_position(&app), 5.0);

    scroll_to(&mut app, 0.0, 1000.0, 1000.0);
    assert_eq!(sequence_position(&app), 5.0);
    scroll_to(&mut app, 0.0, 600.0, 1000.0);
    assert_eq!(sequence_position(&app), 5.0);
}

#[test]
fn test_value_change_moves_camera_and_retargets() {
    let mut app = test_app();
    let values = CameraValues {
        position: Vec3::new(3.0, 4.0, 5.0),
        target: Vec3::new(-1.0, 0.0, -2.0),
    };
    app.world_mut().send_event(CameraValuesChanged(values));
    app.update();

    let transform = camera_transform(&mut app);
    assert_eq!(transform.translation, values.position);
    assert_eq!(app.world().resource::<CameraRig>().target, values.target);

    let expected = (values.target - values.position).normalize();
    assert!(transform.forward().dot(expected) > 0.9999);
}

#[test]
fn test_camera_faces_target_every_frame() {
    let mut app = test_app();
    scroll_to(&mut app, 2000.0, 5000.0, 1000.0);
    app.update();

    let transform = camera_transform(&mut app);
    let target = app.world().resource::<CameraRig>().target;
    let expected = (target - transform.translation).normalize();
    assert!(transform.forward().dot(expected) > 0.9999);
}

#[test]
fn test_resize_updates_aspect_only() {
    let mut app = test_app();
    scroll_to(&mut app, 1000.0, 5000.0, 1000.0);
    let before = camera_transform(&mut app);
    let target_before = app.world().resource::<CameraRig>().target;

    let window = app.world_mut().spawn_empty().id();
    for (width, height) in [(800.0, 600.0), (1200.0, 900.0)] {
        app.world_mut().send_event(WindowResized {
            window,
            width,
            height,
        });
        app.update();
    }

    let world = app.world_mut();
    let mut query = world.query_filtered::<&Projection, With<SceneCamera>>();
    let Projection::Perspective(perspective) = query.iter(world).next().unwrap() else {
        panic!("scene camera should use a perspective projection");
    };
    assert!((perspective.aspect_ratio - 1200.0 / 900.0).abs() < 1e-6);
    assert_eq!(
        *app.world().resource::<ViewportSize>(),
        ViewportSize {
            width: 1200.0,
            height: 900.0
        }
    );

    let after = camera_transform(&mut app);
    assert_eq!(after.translation, before.translation);
    assert_eq!(app.world().resource::<CameraRig>().target, target_before);
}

#[test]
fn test_zero_height_resize_is_ignored() {
    let mut app = test_app();
    let window = app.world_mut().spawn_empty().id();
    app.world_mut().send_event(WindowResized {
        window,
        width: 800.0,
        height: 600.0,
    });
    app.update();
    app.world_mut().send_event(WindowResized {
        window,
        width: 800.0,
        height: 0.0,
    });
    app.update();

    assert_eq!(app.world().resource::<ViewportSize>().height, 600.0);
}

#[test]
fn test_cancelled_render_loop_exits() {
    let mut app = test_app();
    let handle = app.world().resource::<RenderLoopHandle>().clone();
    app.update();
    assert!(app.should_exit().is_none());

    handle.cancel();
    app.update();
    assert!(app.should_exit().is_some());
}
