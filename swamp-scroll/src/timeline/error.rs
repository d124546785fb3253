use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("failed to parse timeline state: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("object `{object}` maps prop {prop_path} to unknown track `{track_id}`")]
    MissingTrack {
        object: String,
        prop_path: String,
        track_id: String,
    },

    #[error("track `{track_id}` has unsupported type `{kind}`")]
    UnsupportedTrack { track_id: String, kind: String },
}
