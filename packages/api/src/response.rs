use medica_vision::{Classification, LabelCatalog};
use serde::Serialize;
use utoipa::ToSchema;

pub const WELCOME_MESSAGE: &str = "Welcome to the Medicinal Plant Classifier API!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassesResponse {
    pub status: ResponseStatus,
    #[schema(value_type = Vec<String>)]
    pub classes: LabelCatalog,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PredictionResponse {
    pub status: ResponseStatus,
    pub predicted_class: String,
    pub confidence: f64,
    #[schema(value_type = Vec<String>)]
    pub classes: LabelCatalog,
}

impl From<Classification> for PredictionResponse {
    fn from(result: Classification) -> Self {
        Self {
            status: ResponseStatus::Success,
            predicted_class: result.predicted_class,
            confidence: result.confidence,
            classes: result.classes,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub version: &'static str,
}

/// Multipart upload accepted by `POST /predict`.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
