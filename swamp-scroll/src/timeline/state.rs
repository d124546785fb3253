use serde::Deserialize;
use std::collections::HashMap;

use constants::timeline::{DEFAULT_KEYFRAME_HANDLES, DEFAULT_SUB_UNITS_PER_UNIT};

/// Serialized project as written by the timeline authoring tool.
/// Mirrors the JSON layout; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    #[serde(default)]
    pub sheets_by_id: HashMap<String, SheetState>,
    #[serde(default)]
    pub definition_version: Option<String>,
    #[serde(default)]
    pub revision_history: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetState {
    #[serde(default)]
    pub static_overrides: StaticOverrides,
    #[serde(default)]
    pub sequence: Option<SequenceState>,
}

/// Values set on object props outside of any keyframed track.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticOverrides {
    #[serde(default)]
    pub by_object: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceState {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub length: f64,
    #[serde(default = "default_sub_units")]
    pub sub_units_per_unit: u32,
    #[serde(default)]
    pub tracks_by_object: HashMap<String, ObjectTracks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTracks {
    /// Keys are prop paths encoded as JSON arrays, e.g. `["position","x"]`.
    #[serde(default)]
    pub track_id_by_prop_path: HashMap<String, String>,
    #[serde(default)]
    pub track_data: HashMap<String, TrackData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackData {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub keyframes: Vec<KeyframeState>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyframeState {
    pub id: String,
    pub position: f64,
    pub value: serde_json::Value,
    #[serde(default)]
    pub connected_right: bool,
    #[serde(default = "default_handles")]
    pub handles: [f64; 4],
    #[serde(rename = "type", default)]
    pub kind: KeyframeKind,
}

/// Interpolation towards the next keyframe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyframeKind {
    #[default]
    Bezier,
    Hold,
}

fn default_sub_units() -> u32 {
    DEFAULT_SUB_UNITS_PER_UNIT
}

fn default_handles() -> [f64; 4] {
    DEFAULT_KEYFRAME_HANDLES
}

impl ProjectState {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document() {
        let state = ProjectState::from_json("{}").unwrap();
        assert!(state.sheets_by_id.is_empty());
        assert!(state.definition_version.is_none());
    }

    #[test]
    fn test_keyframe_defaults() {
        let json = r#"{
            "sheetsById": {
                "Main": {
                    "sequence": {
                        "length": 4,
                        "tracksByObject": {
                            "Camera": {
                                "trackIdByPropPath": { "[\"position\",\"x\"]": "t1" },
                                "trackData": {
                                    "t1": {
                                        "type": "BasicKeyframedTrack",
                                        "__debugName": "Camera:[\"position\",\"x\"]",
                                        "keyframes": [ { "id": "k1", "position": 0, "value": 3 } ]
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }"#;

        let state = ProjectState::from_json(json).unwrap();
        let sequence = state.sheets_by_id["Main"].sequence.as_ref().unwrap();
        assert_eq!(sequence.length, 4.0);
        assert_eq!(sequence.sub_units_per_unit, 30);

        let tracks = &sequence.tracks_by_object["Camera"];
        let keyframe = &tracks.track_data["t1"].keyframes[0];
        assert_eq!(keyframe.kind, KeyframeKind::Bezier);
        assert_eq!(keyframe.handles, DEFAULT_KEYFRAME_HANDLES);
        assert!(!keyframe.connected_right);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(ProjectState::from_json("{\"sheetsById\": [").is_err());
    }
}
