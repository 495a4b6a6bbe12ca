pub mod routes;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Build the HTTP surface. Shared by `main` and the route tests.
pub fn build_router(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .route("/analyze", post(routes::post_analyze))
        .route("/health", get(routes::health))
        .route("/api/counters", get(routes::get_counters))
        .layer(tower_http::trace::TraceLayer::new_for_http());

    if state.config.cors_permissive {
        app = app.layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        );
    }

    app.with_state(state)
}
