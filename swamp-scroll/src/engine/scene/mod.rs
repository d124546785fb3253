//! Scene background and lighting.

/// Sky colour, ambient light and the single directional light.
pub mod lighting;
