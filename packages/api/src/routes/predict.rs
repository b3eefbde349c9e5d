use crate::error::ApiError;
use crate::response::{ErrorResponse, PredictionResponse, UploadForm};
use crate::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use medica_vision::{InferenceError, PipelineError};
use std::time::Instant;

/// Multipart field carrying the image.
pub const UPLOAD_FIELD: &str = "file";

#[utoipa::path(
    post,
    path = "/predict",
    tag = "classification",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Predicted plant class", body = PredictionResponse),
        (status = 500, description = "Model unavailable, undecodable upload or inference failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(name = "POST /predict", skip(state, multipart))]
pub async fn predict(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let started = Instant::now();
    let outcome = classify_upload(&state, multipart).await;

    let label = if outcome.is_ok() { "success" } else { "error" };
    metrics::counter!("predictions_total", "outcome" => label).increment(1);
    metrics::histogram!("prediction_duration_seconds").record(started.elapsed().as_secs_f64());

    outcome
        .map(Json)
        .map_err(|e| e.with_policy(state.status_policy))
}

async fn classify_upload(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<PredictionResponse, ApiError> {
    if !state.pipeline.model().is_loaded() {
        return Err(PipelineError::ModelUnavailable.into());
    }

    let mut multipart = multipart?;
    let bytes = read_upload(&mut multipart).await?;
    tracing::debug!(bytes = bytes.len(), "received upload");

    let pipeline = state.pipeline.clone();
    let result = tokio::task::spawn_blocking(move || pipeline.classify(&bytes))
        .await
        .map_err(|e| PipelineError::Inference(InferenceError::Task(e.to_string())))??;

    tracing::info!(
        predicted_class = %result.predicted_class,
        confidence = result.confidence,
        "prediction complete"
    );
    Ok(result.into())
}

/// The `file` field, or else the first field that carries a file name.
async fn read_upload(multipart: &mut Multipart) -> Result<Bytes, ApiError> {
    let mut fallback = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            return Ok(field.bytes().await?);
        }
        if fallback.is_none() && field.file_name().is_some() {
            fallback = Some(field.bytes().await?);
        }
    }
    fallback.ok_or_else(|| ApiError::bad_request("No file uploaded"))
}
