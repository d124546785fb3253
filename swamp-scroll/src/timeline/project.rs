use std::collections::HashMap;

use bevy::log::debug;

use super::error::TimelineError;
use super::props::{ObjectConfig, PropPath, PropValues};
use super::sequence::Sequence;
use super::state::{ProjectState, SheetState};
use super::track::KeyframedTrack;

/// Named collection of sheets restored from saved state.
#[derive(Debug, Clone)]
pub struct Project {
    id: String,
    state: ProjectState,
    sheets: HashMap<String, Sheet>,
}

impl Project {
    pub fn new(id: impl Into<String>, state: ProjectState) -> Self {
        Self {
            id: id.into(),
            state,
            sheets: HashMap::new(),
        }
    }

    pub fn from_json(id: impl Into<String>, json: &str) -> Result<Self, TimelineError> {
        Ok(Self::new(id, ProjectState::from_json(json)?))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sheet by name, created from saved state on first access.
    pub fn sheet(&mut self, name: &str) -> &mut Sheet {
        let state = &self.state;
        self.sheets.entry(name.to_string()).or_insert_with(|| {
            let sheet_state = state.sheets_by_id.get(name).cloned().unwrap_or_default();
            Sheet::new(name, sheet_state)
        })
    }

    pub fn get_sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }
}

#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    state: SheetState,
    sequence: Sequence,
    objects: HashMap<String, SheetObject>,
}

impl Sheet {
    fn new(name: &str, state: SheetState) -> Self {
        let sequence = Sequence::from_state(state.sequence.as_ref());
        Self {
            name: name.to_string(),
            state,
            sequence,
            objects: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn sequence_mut(&mut self) -> &mut Sequence {
        &mut self.sequence
    }

    /// Bind an object to this sheet, resolving its tracks and static overrides.
    /// Binding the same key again replaces the previous declaration.
    pub fn object(
        &mut self,
        key: &str,
        config: ObjectConfig,
    ) -> Result<&SheetObject, TimelineError> {
        let object_tracks = self
            .state
            .sequence
            .as_ref()
            .and_then(|sequence| sequence.tracks_by_object.get(key));

        let mut tracks = HashMap::new();
        if let Some(object_tracks) = object_tracks {
            for prop in config.props() {
                let prop_key = prop.path.track_key();
                let Some(track_id) = object_tracks.track_id_by_prop_path.get(&prop_key) else {
                    continue;
                };
                let data = object_tracks.track_data.get(track_id).ok_or_else(|| {
                    TimelineError::MissingTrack {
                        object: key.to_string(),
                        prop_path: prop_key.clone(),
                        track_id: track_id.clone(),
                    }
                })?;
                let track = KeyframedTrack::from_state(track_id, data)?;
                if !track.is_empty() {
                    tracks.insert(prop.path.clone(), track);
                }
            }
        }

        let overrides = self
            .state
            .static_overrides
            .by_object
            .get(key)
            .cloned()
            .unwrap_or(serde_json::Value::Null);

        debug!(
            "Bound object {} on sheet {} ({} of {} props keyframed)",
            key,
            self.name,
            tracks.len(),
            config.props().len()
        );

        let object = SheetObject {
            config,
            tracks,
            overrides,
        };
        self.objects.insert(key.to_string(), object);
        Ok(&self.objects[key])
    }

    /// Values of a bound object at the current sequence position.
    pub fn values(&self, key: &str) -> Option<PropValues> {
        self.objects
            .get(key)
            .map(|object| object.values_at(self.sequence.position()))
    }
}

/// Object bound to a sheet: declared props plus the tracks animating them.
#[derive(Debug, Clone)]
pub struct SheetObject {
    config: ObjectConfig,
    tracks: HashMap<PropPath, KeyframedTrack>,
    overrides: serde_json::Value,
}

impl SheetObject {
    pub fn is_keyframed(&self, path: &PropPath) -> bool {
        self.tracks.contains_key(path)
    }

    /// Keyframed value, else static override, else the declared default.
    pub fn values_at(&self, position: f64) -> PropValues {
        let mut values = PropValues::default();
        for prop in self.config.props() {
            let value = self
                .tracks
                .get(&prop.path)
                .and_then(|track| track.value_at(position))
                .or_else(|| prop.path.lookup(&self.overrides))
                .unwrap_or(prop.default);
            values.insert(prop.path.clone(), value);
        }
        values
    }
}
