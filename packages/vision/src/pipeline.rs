use crate::{
    catalog::LabelCatalog,
    classification::{self, Classification},
    decode::decode_rgb,
    error::PipelineError,
    inference,
    model::ModelHandle,
    preprocess::preprocess,
};

/// Decode, preprocess, infer and format in one synchronous call.
///
/// Cheap to clone; the model and catalog are shared. The call is CPU-bound and
/// should run off the async executor.
#[derive(Debug, Clone)]
pub struct Pipeline {
    model: ModelHandle,
    catalog: LabelCatalog,
}

impl Pipeline {
    pub fn new(model: ModelHandle, catalog: LabelCatalog) -> Self {
        Self { model, catalog }
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    pub fn catalog(&self) -> &LabelCatalog {
        &self.catalog
    }

    #[tracing::instrument(name = "classify", skip_all, fields(bytes = bytes.len()))]
    pub fn classify(&self, bytes: &[u8]) -> Result<Classification, PipelineError> {
        let classifier = self.model.classifier()?;

        let image = decode_rgb(bytes)?;
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            "decoded upload"
        );

        let batch = preprocess(&image);
        drop(image);

        let scores = inference::infer(classifier, &batch, self.catalog.len())?;
        tracing::debug!(classes = scores.len(), "model returned scores");

        let result = classification::format(&scores, &self.catalog)?;
        tracing::debug!(
            predicted_class = %result.predicted_class,
            confidence = result.confidence,
            "classified upload"
        );
        Ok(result)
    }
}
