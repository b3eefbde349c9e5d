use crate::{
    error::PipelineError,
    inference::Classifier,
    onnx::OnnxClassifier,
};
use std::{fmt, path::Path, sync::Arc};

/// Process-wide model reference, set once at startup and never reloaded.
#[derive(Clone)]
pub enum ModelHandle {
    Loaded(Arc<dyn Classifier>),
    Unavailable { reason: String },
}

impl ModelHandle {
    pub fn loaded(classifier: impl Classifier + 'static) -> Self {
        Self::Loaded(Arc::new(classifier))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Load an ONNX model, falling back to [`ModelHandle::Unavailable`] so the
    /// service can keep answering requests with an explanatory error.
    pub fn load_onnx(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match OnnxClassifier::load(path) {
            Ok(classifier) => {
                tracing::info!(path = %path.display(), "Model loaded successfully");
                Self::loaded(classifier)
            }
            Err(e) => {
                tracing::error!(path = %path.display(), "Error loading model: {}", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn classifier(&self) -> Result<&dyn Classifier, PipelineError> {
        match self {
            Self::Loaded(classifier) => Ok(classifier.as_ref()),
            Self::Unavailable { .. } => Err(PipelineError::ModelUnavailable),
        }
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(_) => f.write_str("ModelHandle::Loaded"),
            Self::Unavailable { reason } => f
                .debug_struct("ModelHandle::Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}
