use serde::{Deserialize, Serialize};

/// Response type for the welcome endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct WelcomeMessage {
    pub message: String,
    pub version: String,
}

/// Response type for the health endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthStatus {
    pub status: String,
    /// RFC 3339 timestamp taken when the request was handled
    pub timestamp: String,
}

/// Instance metadata reported by the metadata endpoint
///
/// Captured from the `BUNNYNET_MC_*` environment variables once at
/// startup. Unset variables surface as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InstanceMetadata {
    pub app_id: String,
    pub pod_id: String,
    pub region: String,
    pub zone: String,
    pub public_endpoints: String,
    pub pod_ip: String,
    pub host_ip: String,
}

/// Request body for the set endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SetRequest {
    pub key: String,
    pub value: String,
}

/// Response type for successful set operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SetResult {
    pub status: String,
    pub key: String,
}

/// Response type for successful get operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GetResult {
    pub key: String,
    pub value: String,
}

/// Query parameters for the get endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct GetQuery {
    pub key: Option<String>,
}
