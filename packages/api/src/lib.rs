use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use error::ApiError;
use state::AppState;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

pub mod error;
pub mod response;
mod routes;
pub mod state;

pub use axum;
pub use routes::predict::UPLOAD_FIELD;

#[derive(OpenApi)]
#[openapi(
    info(title = "Medicinal Plant Classifier API"),
    paths(
        routes::root::welcome,
        routes::classes::list_classes,
        routes::predict::predict,
        routes::health::health,
    ),
    tags(
        (name = "classification", description = "Plant image classification"),
        (name = "info", description = "Service information"),
        (name = "health", description = "Liveness and model status"),
    )
)]
pub struct ApiDoc;

pub fn construct_router(state: AppState) -> Router {
    let body_limit = state.body_limit;

    Router::new()
        .route("/", get(routes::root::welcome))
        .route("/classes", get(routes::classes::list_classes))
        .route("/predict", post(routes::predict::predict))
        .route("/health", get(routes::health::health))
        .route("/openapi.json", get(openapi))
        .fallback(not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}
