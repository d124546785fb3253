use bevy::math::Vec3;

/// Starting camera position, also the default of the timeline `position` prop.
pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 5.0, 20.0);

/// Starting look-at target, also the default of the timeline `target` prop.
pub const INITIAL_TARGET: Vec3 = Vec3::ZERO;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 70.0;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Range hint attached to every camera axis prop. Informational only.
pub const AXIS_RANGE: (f64, f64) = (-100.0, 100.0);

/// Upper bound on the device pixel ratio used for the draw buffer.
pub const MAX_PIXEL_RATIO: f64 = 2.0;
