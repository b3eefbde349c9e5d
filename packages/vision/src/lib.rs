//! Image classification pipeline for the Medicinal Plant Classifier
//!
//! Uploaded bytes flow through four stages:
//! - [`decode`]: bytes to an RGB pixel grid
//! - [`preprocess`]: resize to 128x128, scale to `[0, 1]`, add the batch axis
//! - [`inference`]: run the loaded model once and validate its scores
//! - [`classification`]: argmax, label lookup and percentage confidence
//!
//! [`Pipeline`] composes them against a shared [`ModelHandle`] and [`LabelCatalog`].

pub mod catalog;
pub mod classification;
pub mod decode;
pub mod error;
pub mod inference;
pub mod model;
pub mod onnx;
pub mod pipeline;
pub mod preprocess;

pub use catalog::{LabelCatalog, PLANT_CLASSES};
pub use classification::Classification;
pub use error::{DecodeError, InferenceError, ModelLoadError, PipelineError};
pub use inference::{Classifier, ScoreVector};
pub use model::ModelHandle;
pub use onnx::OnnxClassifier;
pub use pipeline::Pipeline;
pub use preprocess::{BatchTensor, CHANNELS, INPUT_SIZE};
