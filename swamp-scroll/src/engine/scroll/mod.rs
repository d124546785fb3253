//! Page scroll sampling and the scroll-to-timeline driver.
//!
//! ## Sample Flow
//!
//! ```text
//! browser "scroll" listener (wasm32)  ─┐
//! mouse wheel on a virtual page (native)┴─> ScrollQueue ─> PageScrolled ─> Sequence position
//! ```
//!
//! The queue is shared with the JavaScript closure, the same way incoming
//! messages are buffered between the browser and the ECS.

/// Scroll metrics, queue, events and the sequence driver.
pub mod page_scroll;

/// Browser scroll listener feeding the queue on `wasm32`.
#[cfg(target_arch = "wasm32")]
pub mod web_listener;

/// Mouse wheel scrolling of a virtual page on native builds.
#[cfg(not(target_arch = "wasm32"))]
pub mod wheel;

use bevy::prelude::*;

/// Connects the platform's scroll input to the scroll queue.
pub struct PageInputPlugin;

impl Plugin for PageInputPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, web_listener::setup_scroll_listener);

        #[cfg(not(target_arch = "wasm32"))]
        {
            use crate::engine::core::plugin::ScrollCameraSet;

            app.init_resource::<wheel::VirtualPage>().add_systems(
                Update,
                wheel::scroll_virtual_page.before(ScrollCameraSet::Input),
            );
        }
    }
}
