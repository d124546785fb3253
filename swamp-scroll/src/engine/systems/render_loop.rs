use bevy::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle returned to the embedding code. Cancelling it stops the frame loop
/// after the current frame. Clones share the same flag.
#[derive(Resource, Debug, Clone, Default)]
pub struct RenderLoopHandle {
    cancelled: Arc<AtomicBool>,
}

impl RenderLoopHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

pub fn stop_when_cancelled(handle: Res<RenderLoopHandle>, mut exit: EventWriter<AppExit>) {
    if handle.is_cancelled() {
        info!("Render loop cancelled, exiting");
        exit.write(AppExit::Success);
    }
}
