use super::state::SequenceState;
use constants::timeline::DEFAULT_SEQUENCE_LENGTH;

/// Scrubbable playhead of a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    length: f64,
    position: f64,
}

impl Default for Sequence {
    fn default() -> Self {
        Self {
            length: DEFAULT_SEQUENCE_LENGTH,
            position: 0.0,
        }
    }
}

impl Sequence {
    pub fn from_state(state: Option<&SequenceState>) -> Self {
        match state {
            Some(state) if state.length.is_finite() && state.length > 0.0 => Self {
                length: state.length,
                position: 0.0,
            },
            _ => Self::default(),
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Move the playhead, clamped into `[0, length]`.
    ///
    /// Non-finite requests leave the playhead where it is and return `false`.
    pub fn set_position(&mut self, requested: f64) -> bool {
        if !requested.is_finite() {
            return false;
        }
        self.position = requested.clamp(0.0, self.length);
        true
    }
}
