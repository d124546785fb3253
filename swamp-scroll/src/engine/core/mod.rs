//! Application setup and plugin wiring.
//!
//! Handles app construction, the ordering of the scroll-to-camera pipeline,
//! and window configuration for both native and WASM targets.

/// App construction with default plugins, scene setup and model loading.
pub mod app_setup;

/// Resources, events and ordered systems of the scroll-driven camera.
///
/// Runs without a window or renderer, so it can be exercised headless.
pub mod plugin;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration and pixel ratio for web targets.
pub mod window_config;
