use crate::models::WelcomeMessage;
use crate::routes;
use axum::Json;

/// `/` handler - Welcome message
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Welcome message", body = WelcomeMessage)
    ),
    tag = "info"
)]
pub async fn root_handler() -> Json<WelcomeMessage> {
    Json(WelcomeMessage {
        message: "Go Bunny, Go!".to_string(),
        version: "1.0.0".to_string(),
    })
}
