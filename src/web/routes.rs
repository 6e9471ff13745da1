//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Router for the document-QA service.
///
/// `/api/agent` accepts POST only; every other method gets a JSON 405
/// instead of axum's bare default.
pub fn qa_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/agent",
            post(handlers::qa_agent).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .layer(cors())
        .with_state(state)
}

/// Router for the search-coordinator service
pub fn search_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/agent",
            post(handlers::search_agent).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .layer(cors())
        .with_state(state)
}
