use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::scene::{VIRTUAL_PAGE_VIEWPORTS, WHEEL_LINE_PIXELS};

use super::page_scroll::{ScrollMetrics, ScrollQueue};

/// Stand-in for the browser page on native builds: a document
/// `VIRTUAL_PAGE_VIEWPORTS` windows tall, scrolled with the mouse wheel.
#[derive(Resource, Debug, Default)]
pub struct VirtualPage {
    pub scroll_y: f64,
}

impl VirtualPage {
    /// Scroll by `delta` pixels, clamped to the page like a browser does.
    pub fn scroll_by(&mut self, delta: f64, viewport_height: f64) -> ScrollMetrics {
        let scroll_height = viewport_height * f64::from(VIRTUAL_PAGE_VIEWPORTS);
        let max_scroll = (scroll_height - viewport_height).max(0.0);
        self.scroll_y = (self.scroll_y + delta).clamp(0.0, max_scroll);

        ScrollMetrics {
            scroll_y: self.scroll_y,
            scroll_height,
            viewport_height,
        }
    }
}

pub fn scroll_virtual_page(
    mut wheel: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut page: ResMut<VirtualPage>,
    queue: Res<ScrollQueue>,
) {
    // Wheel up (positive y) moves towards the top of the page.
    let delta: f32 = wheel
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => -event.y * WHEEL_LINE_PIXELS,
            MouseScrollUnit::Pixel => -event.y,
        })
        .sum();

    if delta == 0.0 {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };

    let metrics = page.scroll_by(f64::from(delta), f64::from(window.height()));
    queue.push(metrics);
}
