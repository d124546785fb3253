pub const PROJECT_ID: &str = "SwampScroll";
pub const MAIN_SHEET: &str = "Main";
pub const CAMERA_OBJECT: &str = "Camera";

/// Sequence length used when the saved state has no sequence for a sheet.
pub const DEFAULT_SEQUENCE_LENGTH: f64 = 10.0;

pub const DEFAULT_SUB_UNITS_PER_UNIT: u32 = 30;

/// Bezier handles given to keyframes saved without any.
pub const DEFAULT_KEYFRAME_HANDLES: [f64; 4] = [0.5, 1.0, 0.5, 0.0];
