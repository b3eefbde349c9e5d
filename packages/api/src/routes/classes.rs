use crate::response::{ClassesResponse, ResponseStatus};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;

#[utoipa::path(
    get,
    path = "/classes",
    tag = "classification",
    responses(
        (status = 200, description = "Class labels in model output order", body = ClassesResponse)
    )
)]
#[tracing::instrument(name = "GET /classes", skip(state))]
pub async fn list_classes(State(state): State<AppState>) -> Json<ClassesResponse> {
    Json(ClassesResponse {
        status: ResponseStatus::Success,
        classes: state.pipeline.catalog().clone(),
    })
}
