use bevy::log::warn;

use super::bezier::UnitBezier;
use super::error::TimelineError;
use super::state::{KeyframeKind, TrackData};

const KEYFRAMED_TRACK: &str = "BasicKeyframedTrack";

#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    pub position: f64,
    pub value: f64,
    pub connected_right: bool,
    pub handles: [f64; 4],
    pub kind: KeyframeKind,
}

/// Numeric keyframes of one prop, ordered by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyframedTrack {
    keyframes: Vec<Keyframe>,
}

impl KeyframedTrack {
    pub fn new(mut keyframes: Vec<Keyframe>) -> Self {
        keyframes.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { keyframes }
    }

    /// Build a track from saved data. Keyframes with non-numeric values are skipped.
    pub fn from_state(track_id: &str, data: &TrackData) -> Result<Self, TimelineError> {
        if data.kind != KEYFRAMED_TRACK {
            return Err(TimelineError::UnsupportedTrack {
                track_id: track_id.to_string(),
                kind: data.kind.clone(),
            });
        }

        let keyframes = data
            .keyframes
            .iter()
            .filter_map(|keyframe| match keyframe.value.as_f64() {
                Some(value) => Some(Keyframe {
                    position: keyframe.position,
                    value,
                    connected_right: keyframe.connected_right,
                    handles: keyframe.handles,
                    kind: keyframe.kind,
                }),
                None => {
                    warn!(
                        "Skipping non-numeric keyframe {} in track {}",
                        keyframe.id, track_id
                    );
                    None
                }
            })
            .collect();

        Ok(Self::new(keyframes))
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Track value at `position`, or `None` for a track without keyframes.
    pub fn value_at(&self, position: f64) -> Option<f64> {
        let first = self.keyframes.first()?;
        if position < first.position {
            return Some(first.value);
        }

        // Last keyframe at or before the position.
        let index = self
            .keyframes
            .partition_point(|keyframe| keyframe.position <= position)
            .saturating_sub(1);
        let left = &self.keyframes[index];

        let Some(right) = self.keyframes.get(index + 1) else {
            return Some(left.value);
        };
        if !left.connected_right || left.kind == KeyframeKind::Hold {
            return Some(left.value);
        }

        let span = right.position - left.position;
        if span <= 0.0 {
            return Some(left.value);
        }
        let progression = (position - left.position) / span;
        let curve = UnitBezier::new(
            left.handles[2],
            left.handles[3],
            right.handles[0],
            right.handles[1],
        );

        Some(left.value + (right.value - left.value) * curve.solve(progression))
    }
}
