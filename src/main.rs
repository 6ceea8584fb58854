mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{any, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use state::AppState;
use store::StoreClient;

/// Build the application router with all routes and middleware attached.
fn app(state: AppState) -> Router {
    Router::new()
        .route(routes::ROOT, any(handlers::root_handler))
        .route(routes::HEALTH, any(handlers::health_handler))
        .route(routes::METADATA, any(handlers::metadata_handler))
        .route(routes::SET, post(handlers::set_handler))
        .route(routes::GET, any(handlers::get_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("bunny-redis-kv starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = StoreClient::from_config(&config)?;

    // Advisory probe only; an unreachable store must not block startup.
    match store.ping().await {
        Ok(()) => tracing::info!("Successfully connected to Redis at {}", config.redis_addr),
        Err(e) => tracing::warn!(
            "Could not connect to Redis at {}: {:#}",
            config.redis_addr,
            e
        ),
    }

    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server starting on port {}", state.config.port);
    axum::serve(listener, app(state)).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InstanceMetadata;
    use crate::store::MemoryBackend;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            store: StoreClient::with_backend(MemoryBackend::new()),
            config: Arc::new(Config {
                redis_addr: "localhost:6379".to_string(),
                port: 8080,
                metadata: InstanceMetadata::default(),
            }),
        }
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn all_routes_mounted() {
        let app = app(test_state());

        for path in ["/", "/health", "/metadata"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {} should be 200", path);
        }

        let set_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/set")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"key":"a","value":"b"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(set_response.status(), StatusCode::OK);

        let get_response = app
            .oneshot(
                Request::builder()
                    .uri("/get?key=a")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(get_response.status(), StatusCode::OK);
    }
}
