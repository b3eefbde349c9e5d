use crate::response::{WELCOME_MESSAGE, WelcomeResponse};
use axum::Json;

#[utoipa::path(
    get,
    path = "/",
    tag = "info",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    )
)]
#[tracing::instrument(name = "GET /")]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}
