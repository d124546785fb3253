use bevy::prelude::*;
use constants::camera::{AXIS_RANGE, INITIAL_POSITION, INITIAL_TARGET};
use constants::timeline::{CAMERA_OBJECT, MAIN_SHEET, PROJECT_ID};

use crate::timeline::{
    ObjectConfig, Project, ProjectState, PropValues, Sequence, Sheet, TimelineError,
};

/// Saved timeline state, bundled into the binary at build time.
pub const BUNDLED_PROJECT_STATE: &str = include_str!("../../../assets/state.json");

/// Timeline project with the camera object bound on its main sheet.
#[derive(Resource, Debug, Clone)]
pub struct Timeline {
    project: Project,
}

impl Timeline {
    /// Restore the project from saved state and bind the camera object.
    pub fn from_state_json(json: &str) -> Result<Self, TimelineError> {
        let mut project = Project::from_json(PROJECT_ID, json)?;
        project
            .sheet(MAIN_SHEET)
            .object(CAMERA_OBJECT, camera_object_config())?;
        Ok(Self { project })
    }

    /// Project without saved state. The camera sits at its declared defaults.
    pub fn empty() -> Self {
        let mut project = Project::new(PROJECT_ID, ProjectState::default());
        if let Err(err) = project
            .sheet(MAIN_SHEET)
            .object(CAMERA_OBJECT, camera_object_config())
        {
            error!("Failed to bind camera to empty timeline: {}", err);
        }
        Self { project }
    }

    /// Bundled state, or an empty project if it cannot be restored.
    pub fn from_bundled_state() -> Self {
        match Self::from_state_json(BUNDLED_PROJECT_STATE) {
            Ok(timeline) => {
                info!(
                    "✓ Timeline {} restored (sequence length {:.2})",
                    timeline.project.id(),
                    timeline.sequence().map_or(0.0, Sequence::length)
                );
                timeline
            }
            Err(err) => {
                error!("{}; falling back to default camera values", err);
                Self::empty()
            }
        }
    }

    pub fn main_sheet(&self) -> Option<&Sheet> {
        self.project.get_sheet(MAIN_SHEET)
    }

    pub fn main_sheet_mut(&mut self) -> &mut Sheet {
        self.project.sheet(MAIN_SHEET)
    }

    pub fn sequence(&self) -> Option<&Sequence> {
        self.main_sheet().map(Sheet::sequence)
    }

    /// Camera values at the current sequence position.
    pub fn camera_values(&self) -> Option<CameraValues> {
        self.main_sheet()?
            .values(CAMERA_OBJECT)
            .and_then(|values| CameraValues::from_values(&values))
    }
}

/// Camera object props: `position` and `target` compounds, one number per axis.
pub fn camera_object_config() -> ObjectConfig {
    let range = Some(AXIS_RANGE);
    ObjectConfig::new()
        .compound(
            "position",
            &[
                ("x", f64::from(INITIAL_POSITION.x)),
                ("y", f64::from(INITIAL_POSITION.y)),
                ("z", f64::from(INITIAL_POSITION.z)),
            ],
            range,
        )
        .compound(
            "target",
            &[
                ("x", f64::from(INITIAL_TARGET.x)),
                ("y", f64::from(INITIAL_TARGET.y)),
                ("z", f64::from(INITIAL_TARGET.z)),
            ],
            range,
        )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraValues {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraValues {
    pub fn from_values(values: &PropValues) -> Option<Self> {
        let axis = |key: &str, field: &str| values.get(&[key, field]).map(|value| value as f32);
        Some(Self {
            position: Vec3::new(
                axis("position", "x")?,
                axis("position", "y")?,
                axis("position", "z")?,
            ),
            target: Vec3::new(
                axis("target", "x")?,
                axis("target", "y")?,
                axis("target", "z")?,
            ),
        })
    }
}

/// Fired when the camera object's evaluated values change.
#[derive(Event, Debug, Clone, Copy)]
pub struct CameraValuesChanged(pub CameraValues);

/// Observe the timeline and publish camera values whenever they change.
/// The first evaluation is always published so the camera starts on the path.
pub fn emit_camera_values(
    timeline: Res<Timeline>,
    mut last_emitted: Local<Option<CameraValues>>,
    mut changes: EventWriter<CameraValuesChanged>,
) {
    if last_emitted.is_some() && !timeline.is_changed() {
        return;
    }

    let Some(values) = timeline.camera_values() else {
        return;
    };

    if *last_emitted == Some(values) {
        return;
    }

    *last_emitted = Some(values);
    changes.write(CameraValuesChanged(values));
}
