//! Bevy plugins, resources and systems for the scroll scene.

/// Timeline resource and the camera object bound to it.
pub mod animation;

/// Scene camera, its look-at target and the per-frame aim system.
pub mod camera;

/// App construction, plugin wiring and window configuration.
pub mod core;

/// Asynchronous glTF model loading.
pub mod loading;

/// Background and lighting.
pub mod scene;

/// Page scroll sampling and the scroll-to-timeline driver.
pub mod scroll;

/// Resize handling, render loop control and debug output.
pub mod systems;
