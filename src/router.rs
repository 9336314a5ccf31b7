use crate::app_state::AppState;
use crate::handlers::{note, pages};
use crate::middleware::rate_limit::create_rate_limit_middleware;
use crate::middleware::request_id::request_id_middleware;
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

/// Builds the application router: the four note routes, a health probe, and
/// the middleware stack. Rate limiting applies only to note creation; the
/// request-id stamp and the transport timeout apply to everything.
pub fn create_app_router(state: AppState) -> Router {
    let create_routes = Router::new()
        .route("/api/notes", post(note::create_note))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            create_rate_limit_middleware,
        ))
        .with_state(state.clone());

    let read_routes = Router::new()
        .route("/", get(pages::index))
        .route("/api/notes", get(note::list_notes))
        .route("/api/stats", get(note::stats))
        .with_state(state);

    Router::new()
        .merge(health_routes())
        .merge(create_routes)
        .merge(read_routes)
        .layer(
            // Request-id stamping sits outside the timeout so even a 408
            // carries the header.
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TimeoutLayer::new(Duration::from_secs(30))),
        )
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
