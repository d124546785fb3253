use bevy::math::Vec3;

/// Sky blue (#87ceeb).
pub const BACKGROUND_RGB: [u8; 3] = [0x87, 0xce, 0xeb];

pub const AMBIENT_BRIGHTNESS: f32 = 750.0;

pub const DIRECTIONAL_ILLUMINANCE: f32 = 4_000.0;
pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(10.0, 20.0, 10.0);

/// Uniform scale applied to the loaded model root.
pub const MODEL_SCALE: f32 = 0.5;
pub const MODEL_POSITION: Vec3 = Vec3::ZERO;

/// Height of the virtual page used for wheel scrolling on native builds,
/// in multiples of the window height. Matches the page height in `index.html`.
pub const VIRTUAL_PAGE_VIEWPORTS: f32 = 5.0;

/// Pixels scrolled per wheel line on native builds.
pub const WHEEL_LINE_PIXELS: f32 = 100.0;
