use crate::{
    error::InferenceError,
    preprocess::{BatchTensor, input_shape},
};

/// Per-class scores, index-aligned with the [`LabelCatalog`](crate::LabelCatalog).
pub type ScoreVector = Vec<f32>;

/// A loaded image classification model.
///
/// Implementations are shared across concurrent requests and must not keep
/// per-call mutable state.
pub trait Classifier: Send + Sync {
    fn predict(&self, batch: &BatchTensor) -> Result<ScoreVector, InferenceError>;
}

/// Run the model once on a preprocessed batch.
///
/// The batch is passed through untouched. The returned scores are checked to
/// contain exactly `expected_classes` finite values.
pub fn infer(
    classifier: &dyn Classifier,
    batch: &BatchTensor,
    expected_classes: usize,
) -> Result<ScoreVector, InferenceError> {
    let expected = input_shape();
    if batch.shape() != expected {
        return Err(InferenceError::InputShape {
            expected,
            actual: batch.shape().to_vec(),
        });
    }

    let scores = classifier.predict(batch)?;

    if scores.len() != expected_classes {
        return Err(InferenceError::ScoreCount {
            expected: expected_classes,
            actual: scores.len(),
        });
    }
    if let Some(idx) = scores.iter().position(|s| !s.is_finite()) {
        return Err(InferenceError::NonFinite(idx));
    }

    Ok(scores)
}
