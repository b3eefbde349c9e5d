use std::path::PathBuf;

/// Message returned for every prediction while no model is loaded.
pub const MODEL_UNAVAILABLE_MESSAGE: &str = "Model not loaded properly.";

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("cannot identify image file: upload is empty")]
    Empty,
    #[error("cannot identify image file: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to read image bytes: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("input tensor has shape {actual:?}, expected {expected:?}")]
    InputShape {
        expected: [usize; 4],
        actual: Vec<usize>,
    },
    #[error("model execution failed: {0}")]
    Runtime(String),
    #[error("model produced no outputs")]
    NoOutput,
    #[error("model returned {actual} scores, expected {expected}")]
    ScoreCount { expected: usize, actual: usize },
    #[error("model returned a non-finite score at index {0}")]
    NonFinite(usize),
    #[error("inference task failed: {0}")]
    Task(String),
}

#[derive(Debug, thiserror::Error)]
#[error("failed to load model '{}': {message}", .path.display())]
pub struct ModelLoadError {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{}", MODEL_UNAVAILABLE_MESSAGE)]
    ModelUnavailable,
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}
