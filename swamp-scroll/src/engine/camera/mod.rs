//! Scene camera driven by timeline values.
//!
//! The binding system is the only writer of camera translation and look-at
//! target; the aim system only rotates the camera towards that target.

/// Camera spawn, timeline value application and per-frame aiming.
pub mod scroll_camera;
