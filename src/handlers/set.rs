use crate::error::ApiError;
use crate::models::{SetRequest, SetResult};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

/// `POST /set` handler - Store a value
///
/// The body is decoded by hand so that every malformed payload maps to
/// 400 rather than the Json extractor's 422 for shape mismatches.
#[utoipa::path(
    post,
    path = "/set",
    request_body = SetRequest,
    responses(
        (status = 200, description = "Value stored", body = SetResult),
        (status = 400, description = "Malformed JSON or empty key", body = String),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Store unreachable or erroring", body = String)
    ),
    tag = "kv"
)]
pub async fn set_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SetResult>), ApiError> {
    let payload: SetRequest = serde_json::from_slice(&body)?;

    if payload.key.is_empty() {
        return Err(ApiError::EmptyKey);
    }

    // Values written through the API never carry an expiry.
    state
        .store
        .set(&payload.key, &payload.value, None)
        .await
        .map_err(ApiError::SetFailed)?;

    tracing::info!("Stored value for key: {}", payload.key);
    Ok((
        StatusCode::OK,
        Json(SetResult {
            status: "success".to_string(),
            key: payload.key,
        }),
    ))
}
