use crate::error::ApiError;
use crate::models::{GetQuery, GetResult};
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// `GET /get?key=...` handler - Retrieve a value
#[utoipa::path(
    get,
    path = "/get",
    params(
        ("key" = String, Query, description = "Key to look up")
    ),
    responses(
        (status = 200, description = "Value found", body = GetResult),
        (status = 400, description = "Missing key parameter", body = String),
        (status = 404, description = "Key not found", body = String),
        (status = 500, description = "Store unreachable or erroring", body = String)
    ),
    tag = "kv"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Query(query): Query<GetQuery>,
) -> Result<(StatusCode, Json<GetResult>), ApiError> {
    // An empty key= is treated the same as an absent parameter.
    let key = query
        .key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or(ApiError::MissingKey)?;

    match state.store.get(key).await.map_err(ApiError::GetFailed)? {
        Some(value) => {
            tracing::info!("Retrieved value for key: {}", key);
            Ok((
                StatusCode::OK,
                Json(GetResult {
                    key: key.to_string(),
                    value,
                }),
            ))
        }
        None => Err(ApiError::KeyNotFound(key.to_string())),
    }
}
