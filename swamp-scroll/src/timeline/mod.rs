//! Keyframed timeline restored from saved authoring state.
//!
//! A [`Project`] holds named sheets. Each [`Sheet`] owns a [`Sequence`]
//! (playhead position and length) and the objects bound to it. Binding an
//! object declares its number props; their values at the playhead come from
//! keyframed tracks, static overrides or the declared defaults, in that order.
//!
//! ```text
//! Project "SwampScroll"
//!   └─ Sheet "Main"
//!        ├─ Sequence { position, length }
//!        └─ Object "Camera"
//!             ├─ position { x, y, z }
//!             └─ target   { x, y, z }
//! ```

/// Unit cubic bezier used to ease between keyframes.
pub mod bezier;

pub mod error;

/// Project, sheet and bound object types.
pub mod project;

/// Prop declarations, paths and evaluated values.
pub mod props;

pub mod sequence;

/// Serde mirror of the saved state document.
pub mod state;

/// Keyframe evaluation for a single number prop.
pub mod track;

pub use error::TimelineError;
pub use project::{Project, Sheet, SheetObject};
pub use props::{NumberProp, ObjectConfig, PropPath, PropValues};
pub use sequence::Sequence;
pub use state::ProjectState;
