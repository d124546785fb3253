use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::engine::camera::scroll_camera::SceneCamera;

/// Logical size of the draw buffer, tracked from window resizes.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    /// `None` while the height is zero, e.g. for a minimised window.
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.height > 0.0).then(|| self.width / self.height)
    }
}

/// Update camera aspect and the tracked draw size. Camera translation and
/// target are left alone.
pub fn handle_window_resize(
    mut resized: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut cameras: Query<&mut Projection, With<SceneCamera>>,
) {
    for event in resized.read() {
        let size = ViewportSize {
            width: event.width,
            height: event.height,
        };
        let Some(aspect_ratio) = size.aspect_ratio() else {
            debug!("Ignoring resize to {}x{}", event.width, event.height);
            continue;
        };

        *viewport = size;
        for mut projection in &mut cameras {
            if let Projection::Perspective(perspective) = &mut *projection {
                perspective.aspect_ratio = aspect_ratio;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        let size = ViewportSize {
            width: 1200.0,
            height: 900.0,
        };
        assert_eq!(size.aspect_ratio(), Some(1200.0 / 900.0));
        assert_eq!(ViewportSize::default().aspect_ratio(), None);
    }
}
