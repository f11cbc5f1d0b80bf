use crate::{
    AppState, create_sprint, delete_sprint, get_sprint, get_sprint_burndown, health,
    list_sprints, request_logging, sample_burndown, update_sprint,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(health::health_check))
        // Sprint records
        .route("/api/sprint", post(create_sprint))
        .route("/api/sprints", get(list_sprints))
        .route(
            "/api/sprint/{id}",
            get(get_sprint).put(update_sprint).delete(delete_sprint),
        )
        .route("/api/sprint/{id}/burndown", get(get_sprint_burndown))
        // Synthetic data
        .route("/api/burndown/sample", get(sample_burndown))
        .with_state(state)
        .layer(middleware::from_fn(request_logging::log_requests))
        // CORS middleware (browser clients on any origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
