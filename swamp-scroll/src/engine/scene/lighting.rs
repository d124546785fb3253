use bevy::prelude::*;
use constants::scene::{
    AMBIENT_BRIGHTNESS, BACKGROUND_RGB, DIRECTIONAL_ILLUMINANCE, DIRECTIONAL_POSITION,
};

pub fn background_colour() -> ClearColor {
    let [r, g, b] = BACKGROUND_RGB;
    ClearColor(Color::srgb_u8(r, g, b))
}

pub fn ambient_light() -> AmbientLight {
    AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    }
}

/// White directional light shining from above and to the side onto the origin.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
