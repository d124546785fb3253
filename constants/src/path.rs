/// glTF model loaded into the scene, relative to the asset root.
pub const MODEL_PATH: &str = "swamp_location.glb";

/// CSS selector of the canvas the renderer draws into on the web.
pub const CANVAS_SELECTOR: &str = "#swamp-canvas";
