//! Window and lifecycle systems that run alongside the camera pipeline.

/// Keyboard-triggered camera position and target logging.
pub mod debug_camera;

/// Cancellable handle over the frame loop for non-browser embeddings.
pub mod render_loop;

/// Camera aspect and draw size updates on window resize.
pub mod resize;
