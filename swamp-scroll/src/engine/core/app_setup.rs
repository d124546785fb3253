use bevy::asset::AssetMetaCheck;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::engine::core::plugin::ScrollCameraPlugin;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::model_loader::{ModelLoader, attach_model_when_loaded, start_model_load};
use crate::engine::scene::lighting::{ambient_light, background_colour, spawn_lighting};
use crate::engine::scroll::PageInputPlugin;
use crate::engine::systems::debug_camera::log_camera_info;
use crate::engine::systems::render_loop::RenderLoopHandle;

const LOG_FILTER: &str = "wgpu=error,naga=warn,swamp_scroll=info";

/// Build the app and return it with the handle that can stop its frame loop.
pub fn create_app() -> (App, RenderLoopHandle) {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .insert_resource(background_colour())
        .insert_resource(ambient_light())
        .add_plugins(ScrollCameraPlugin)
        .add_plugins(PageInputPlugin)
        .init_resource::<ModelLoader>();

    // The model loads in the background; rendering starts without it.
    app.add_systems(Startup, (setup, start_model_load))
        .add_systems(Update, (attach_model_when_loaded, log_camera_info));

    let render_loop = app.world().resource::<RenderLoopHandle>().clone();
    (app, render_loop)
}

fn setup(mut commands: Commands) {
    info!("=== SWAMP SCROLL ===");
    spawn_lighting(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
