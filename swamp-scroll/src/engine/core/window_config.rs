use bevy::prelude::*;
use bevy::window::PresentMode;
#[cfg(target_arch = "wasm32")]
use bevy::window::WindowResolution;
use constants::camera::MAX_PIXEL_RATIO;

const WINDOW_TITLE: &str = "Swamp Scroll";

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        use constants::path::CANVAS_SELECTOR;

        let pixel_ratio = web_sys::window()
            .map(|window| window.device_pixel_ratio())
            .unwrap_or(1.0);

        Window {
            title: WINDOW_TITLE.into(),
            canvas: Some(CANVAS_SELECTOR.into()),
            fit_canvas_to_parent: true,
            // Page scroll must reach the document.
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            resolution: WindowResolution::default()
                .with_scale_factor_override(cap_pixel_ratio(pixel_ratio) as f32),
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: WINDOW_TITLE.into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Device pixel ratio limited to `MAX_PIXEL_RATIO`; unusable ratios become 1.
pub fn cap_pixel_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_ratio_is_capped() {
        assert_eq!(cap_pixel_ratio(1.0), 1.0);
        assert_eq!(cap_pixel_ratio(1.5), 1.5);
        assert_eq!(cap_pixel_ratio(3.0), 2.0);
        assert_eq!(cap_pixel_ratio(0.0), 1.0);
        assert_eq!(cap_pixel_ratio(f64::NAN), 1.0);
    }
}
