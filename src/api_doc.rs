use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    GetResult, HealthStatus, InstanceMetadata, SetRequest, SetResult, WelcomeMessage,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "bunny-redis-kv API",
        version = "1.0.0",
        description = "A minimal key-value HTTP service backed by Redis"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::metadata::metadata_handler,
        handlers::set::set_handler,
        handlers::get::get_handler
    ),
    components(
        schemas(
            WelcomeMessage,
            HealthStatus,
            InstanceMetadata,
            SetRequest,
            SetResult,
            GetResult
        )
    ),
    tags(
        (name = "info", description = "Service information"),
        (name = "health", description = "Health check operations"),
        (name = "kv", description = "Key-value store operations")
    )
)]
pub struct ApiDoc;
