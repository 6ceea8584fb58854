use crate::models::InstanceMetadata;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, Json};

/// `/metadata` handler - Instance metadata
///
/// Reports the values captured into the configuration at startup.
#[utoipa::path(
    get,
    path = routes::METADATA,
    responses(
        (status = 200, description = "Instance metadata", body = InstanceMetadata)
    ),
    tag = "info"
)]
pub async fn metadata_handler(State(state): State<AppState>) -> Json<InstanceMetadata> {
    Json(state.config.metadata.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::{MemoryBackend, StoreClient};
    use axum::{body::Body, http::Request, http::StatusCode, routing::any, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(metadata: InstanceMetadata) -> Router {
        let config = Config {
            redis_addr: "localhost:6379".to_string(),
            port: 8080,
            metadata,
        };
        let state = AppState {
            store: StoreClient::with_backend(MemoryBackend::new()),
            config: Arc::new(config),
        };
        Router::new()
            .route(crate::routes::METADATA, any(metadata_handler))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_metadata_reflects_config() {
        let metadata = InstanceMetadata {
            app_id: "bunny-app".to_string(),
            pod_id: "pod-7".to_string(),
            region: "de".to_string(),
            zone: "fsn1".to_string(),
            public_endpoints: "203.0.113.10:8080".to_string(),
            pod_ip: "10.0.0.7".to_string(),
            host_ip: "192.0.2.1".to_string(),
        };

        let response = test_app(metadata)
            .oneshot(
                Request::builder()
                    .uri("/metadata")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let reported: InstanceMetadata = serde_json::from_slice(&body).unwrap();
        assert_eq!(reported.app_id, "bunny-app");
        assert_eq!(reported.pod_id, "pod-7");
        assert_eq!(reported.region, "de");
        assert_eq!(reported.zone, "fsn1");
        assert_eq!(reported.public_endpoints, "203.0.113.10:8080");
        assert_eq!(reported.pod_ip, "10.0.0.7");
        assert_eq!(reported.host_ip, "192.0.2.1");
    }

    #[tokio::test]
    async fn test_metadata_unset_fields_are_empty() {
        let response = test_app(InstanceMetadata::default())
            .oneshot(
                Request::builder()
                    .uri("/metadata")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let reported: InstanceMetadata = serde_json::from_slice(&body).unwrap();
        assert_eq!(reported.app_id, "");
        assert_eq!(reported.public_endpoints, "");
        assert_eq!(reported.host_ip, "");
    }
}
