//! Timeline resource and the camera binding published from it.
//!
//! The camera object is declared on the main sheet with `position` and
//! `target` compounds. Whenever the sequence moves, `emit_camera_values`
//! re-evaluates the object and writes a `CameraValuesChanged` event for the
//! camera systems to consume.

/// Timeline resource, camera object declaration and value observer.
pub mod camera_binding;
