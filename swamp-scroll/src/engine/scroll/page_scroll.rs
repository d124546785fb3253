use bevy::prelude::*;
use std::sync::{Arc, Mutex};

use crate::engine::animation::camera_binding::Timeline;

/// Page geometry read at the moment of a scroll event, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        self.scroll_height - self.viewport_height
    }

    /// `scroll_y / max_scroll`, unclamped.
    ///
    /// `None` when the page is not taller than the viewport, where the
    /// division has no finite answer.
    pub fn progress(&self) -> Option<f64> {
        let max_scroll = self.max_scroll();
        if max_scroll <= 0.0 {
            return None;
        }
        let progress = self.scroll_y / max_scroll;
        progress.is_finite().then_some(progress)
    }
}

/// Scroll samples waiting for the next frame, shared with input callbacks.
#[derive(Resource, Clone, Default)]
pub struct ScrollQueue(Arc<Mutex<Vec<ScrollMetrics>>>);

impl ScrollQueue {
    pub fn push(&self, metrics: ScrollMetrics) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(metrics);
        }
    }

    pub fn drain(&self) -> Vec<ScrollMetrics> {
        if let Ok(mut queue) = self.0.lock() {
            std::mem::take(&mut *queue)
        } else {
            Vec::new()
        }
    }
}

/// One scroll sample, in arrival order.
#[derive(Event, Debug, Clone, Copy)]
pub struct PageScrolled(pub ScrollMetrics);

pub fn drain_scroll_queue(queue: Res<ScrollQueue>, mut scrolled: EventWriter<PageScrolled>) {
    for metrics in queue.drain() {
        scrolled.write(PageScrolled(metrics));
    }
}

/// Map each scroll sample to an absolute sequence position.
///
/// Samples from a page that cannot scroll leave the position unchanged.
pub fn apply_scroll_to_sequence(
    mut scrolled: EventReader<PageScrolled>,
    mut timeline: ResMut<Timeline>,
) {
    for PageScrolled(metrics) in scrolled.read() {
        let Some(progress) = metrics.progress() else {
            debug!(
                "Page not scrollable (scroll height {}, viewport {}), keeping sequence position",
                metrics.scroll_height, metrics.viewport_height
            );
            continue;
        };

        let sequence = timeline.main_sheet_mut().sequence_mut();
        let length = sequence.length();
        sequence.set_position(progress * length);
    }
}
