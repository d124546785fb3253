//! Scroll-driven camera flythrough of a glTF scene.
//!
//! Page scroll progress scrubs a keyframed timeline; the timeline drives the
//! camera position and look-at target; Bevy renders the loaded model every
//! frame. Builds natively (mouse wheel drives a virtual page) and for
//! `wasm32` (browser scroll events).

pub mod engine;
pub mod timeline;

pub use engine::core::app_setup::create_app;
