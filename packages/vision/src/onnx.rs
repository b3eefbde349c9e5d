//! # ONNX Classifier
//! Pure-Rust execution of the exported plant classification network
use crate::{
    error::{InferenceError, ModelLoadError},
    inference::{Classifier, ScoreVector},
    preprocess::{BatchTensor, input_shape},
};
use std::path::Path;
use tract_onnx::prelude::*;

/// ONNX model optimized once for a fixed `f32` NHWC input of `(1, 128, 128, 3)`.
pub struct OnnxClassifier {
    plan: TypedRunnableModel<TypedModel>,
}

impl OnnxClassifier {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let load_err = |e: TractError| ModelLoadError {
            path: path.to_path_buf(),
            message: format!("{e:#}"),
        };

        let [n, h, w, c] = input_shape();
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(load_err)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(n, h, w, c)),
            )
            .map_err(load_err)?
            .into_optimized()
            .map_err(load_err)?
            .into_runnable()
            .map_err(load_err)?;

        Ok(Self { plan })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, batch: &BatchTensor) -> Result<ScoreVector, InferenceError> {
        let data = batch
            .as_slice()
            .ok_or_else(|| InferenceError::Runtime("input tensor is not contiguous".to_string()))?;
        let tensor = Tensor::from_shape(batch.shape(), data)
            .map_err(|e| InferenceError::Runtime(e.to_string()))?;

        let outputs = self
            .plan
            .run(tvec!(tensor.into()))
            .map_err(|e| InferenceError::Runtime(e.to_string()))?;

        let first = outputs.first().ok_or(InferenceError::NoOutput)?;
        let view = first
            .to_array_view::<f32>()
            .map_err(|e| InferenceError::Runtime(format!("output is not f32: {e}")))?;

        Ok(view.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = match OnnxClassifier::load("does/not/exist.onnx") {
            Ok(_) => panic!("loading a missing model must fail"),
            Err(e) => e,
        };
        assert_eq!(err.path, Path::new("does/not/exist.onnx"));
        assert!(err.to_string().starts_with("failed to load model 'does/not/exist.onnx'"));
    }

    #[test]
    fn garbage_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("medica-garbage-{}.onnx", std::process::id()));
        std::fs::write(&path, b"not a protobuf model").unwrap();
        let result = OnnxClassifier::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
