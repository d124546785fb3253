//! Asynchronous loading of the scene model.
//!
//! The frame loop does not wait for the model; it is attached on whichever
//! frame its load completes.

/// glTF scene load request and one-shot attach on completion.
pub mod model_loader;
