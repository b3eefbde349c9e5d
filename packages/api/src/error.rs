use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use medica_vision::{PipelineError, error::MODEL_UNAVAILABLE_MESSAGE};

use crate::response::{ErrorResponse, ResponseStatus};

/// How failures map to HTTP status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Every failure is a 500, whatever the cause.
    #[default]
    Uniform,
    /// Client mistakes are 4xx, a missing model is 503.
    Strict,
}

/// Every failure leaves the service as `{"status": "error", "message": ...}`.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::error!("Internal error: {}", msg);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Bad request: {}", msg);
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg)
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::error!("Service unavailable: {}", msg);
        Self::new(StatusCode::SERVICE_UNAVAILABLE, msg)
    }

    /// Collapse the status to 500 unless the policy is [`StatusPolicy::Strict`].
    pub fn with_policy(mut self, policy: StatusPolicy) -> Self {
        if policy == StatusPolicy::Uniform && self.status != StatusCode::NOT_FOUND {
            self.status = StatusCode::INTERNAL_SERVER_ERROR;
        }
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                status: ResponseStatus::Error,
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::ModelUnavailable => Self::service_unavailable(MODEL_UNAVAILABLE_MESSAGE),
            PipelineError::Decode(e) => Self::bad_request(e.to_string()),
            PipelineError::Inference(e) => Self::internal(e.to_string()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        let status = err.status();
        let msg = err.body_text();
        tracing::warn!("Multipart error ({}): {}", status, msg);
        Self::new(status, msg)
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(err: MultipartRejection) -> Self {
        let status = err.status();
        let msg = err.body_text();
        tracing::warn!("Multipart rejected ({}): {}", status, msg);
        Self::new(status, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medica_vision::{DecodeError, InferenceError};

    #[test]
    fn uniform_policy_collapses_to_500() {
        let err = ApiError::from(PipelineError::Decode(DecodeError::Empty))
            .with_policy(StatusPolicy::Uniform);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::from(PipelineError::ModelUnavailable).with_policy(StatusPolicy::Uniform);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Model not loaded properly.");
    }

    #[test]
    fn strict_policy_differentiates() {
        let decode = ApiError::from(PipelineError::Decode(DecodeError::Empty))
            .with_policy(StatusPolicy::Strict);
        assert_eq!(decode.status(), StatusCode::BAD_REQUEST);

        let missing = ApiError::from(PipelineError::ModelUnavailable).with_policy(StatusPolicy::Strict);
        assert_eq!(missing.status(), StatusCode::SERVICE_UNAVAILABLE);

        let infer = ApiError::from(PipelineError::Inference(InferenceError::NoOutput))
            .with_policy(StatusPolicy::Strict);
        assert_eq!(infer.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(infer.message(), "model produced no outputs");
    }

    #[test]
    fn not_found_survives_uniform_policy() {
        let err = ApiError::not_found("Not Found").with_policy(StatusPolicy::Uniform);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
