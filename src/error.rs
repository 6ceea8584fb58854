use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Custom error type for API endpoints
///
/// Maps each failure to its HTTP status code and a plain-text body.
/// Store failures are logged server-side with the underlying error;
/// the client only sees a generic message.
#[derive(Debug)]
pub enum ApiError {
    /// Request body did not decode as set-request JSON
    InvalidJson(serde_json::Error),
    /// Set request carried an empty key
    EmptyKey,
    /// Get request arrived without a key query parameter
    MissingKey,
    /// Key absent in the store
    KeyNotFound(String),
    /// Store SET round-trip failed
    SetFailed(anyhow::Error),
    /// Store GET round-trip failed
    GetFailed(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidJson(err) => {
                (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", err))
            }
            ApiError::EmptyKey => (StatusCode::BAD_REQUEST, "Key is required".to_string()),
            ApiError::MissingKey => (
                StatusCode::BAD_REQUEST,
                "Key parameter is required".to_string(),
            ),
            ApiError::KeyNotFound(key) => {
                tracing::debug!("Key not found: {}", key);
                (StatusCode::NOT_FOUND, "Key not found".to_string())
            }
            ApiError::SetFailed(err) => {
                tracing::error!("Redis SET error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to set value".to_string(),
                )
            }
            ApiError::GetFailed(err) => {
                tracing::error!("Redis GET error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to get value".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidJson(err)
    }
}
