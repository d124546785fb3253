use bevy::asset::RecursiveDependencyLoadState;
use bevy::prelude::*;
use constants::path::MODEL_PATH;
use constants::scene::{MODEL_POSITION, MODEL_SCALE};

/// Root of the loaded swamp model.
#[derive(Component)]
pub struct SwampModel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModelLoadStatus {
    #[default]
    Idle,
    Pending,
    Attached,
    Failed,
}

/// What to do with the model on this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelLoadStep {
    Wait,
    Attach,
    Fail,
}

#[derive(Resource, Default)]
pub struct ModelLoader {
    handle: Option<Handle<Scene>>,
    status: ModelLoadStatus,
}

impl ModelLoader {
    pub fn status(&self) -> ModelLoadStatus {
        self.status
    }

    fn begin(&mut self, handle: Handle<Scene>) {
        self.handle = Some(handle);
        self.status = ModelLoadStatus::Pending;
    }

    /// Advance on the latest load state. Attach and Fail are each returned at
    /// most once; every later call waits.
    pub fn advance(&mut self, state: &RecursiveDependencyLoadState) -> ModelLoadStep {
        if self.status != ModelLoadStatus::Pending {
            return ModelLoadStep::Wait;
        }

        match state {
            RecursiveDependencyLoadState::Loaded => {
                self.status = ModelLoadStatus::Attached;
                ModelLoadStep::Attach
            }
            RecursiveDependencyLoadState::Failed(_) => {
                self.status = ModelLoadStatus::Failed;
                ModelLoadStep::Fail
            }
            _ => ModelLoadStep::Wait,
        }
    }
}

/// Fixed placement of the model root.
pub fn model_transform() -> Transform {
    Transform::from_translation(MODEL_POSITION).with_scale(Vec3::splat(MODEL_SCALE))
}

pub fn start_model_load(mut loader: ResMut<ModelLoader>, asset_server: Res<AssetServer>) {
    info!("Loading model from: {}", MODEL_PATH);
    loader.begin(asset_server.load(GltfAssetLabel::Scene(0).from_asset(MODEL_PATH)));
}

/// Attach the model to the scene once it and its dependencies are loaded.
/// A failed load is logged and otherwise left alone.
pub fn attach_model_when_loaded(
    mut commands: Commands,
    mut loader: ResMut<ModelLoader>,
    asset_server: Res<AssetServer>,
) {
    if loader.status() != ModelLoadStatus::Pending {
        return;
    }
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };

    let state = asset_server.recursive_dependency_load_state(handle);
    step_model_load(&mut commands, &mut loader, &state);
}

/// Act on one frame's load state: spawn the model root, log the failure, or wait.
pub fn step_model_load(
    commands: &mut Commands,
    loader: &mut ModelLoader,
    state: &RecursiveDependencyLoadState,
) -> ModelLoadStep {
    let step = loader.advance(state);
    match step {
        ModelLoadStep::Attach => {
            if let Some(handle) = loader.handle.clone() {
                commands.spawn((SwampModel, SceneRoot(handle), model_transform()));
                info!("✓ Model attached to scene");
            }
        }
        ModelLoadStep::Fail => {
            if let RecursiveDependencyLoadState::Failed(err) = state {
                error!("Failed to load {}: {}", MODEL_PATH, err);
            }
        }
        ModelLoadStep::Wait => {}
    }
    step
}
