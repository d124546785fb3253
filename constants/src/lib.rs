//! Fixed configuration shared by the scroll scene crates.

/// Camera defaults, projection and timeline prop ranges.
pub mod camera;

/// Asset and canvas locations.
pub mod path;

/// Background, lighting and model placement.
pub mod scene;

/// Timeline project, sheet and object identifiers.
pub mod timeline;
