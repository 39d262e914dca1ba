//! API Router configuration

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the main router
pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/generate", post(handlers::generate))
        .route("/explain/:concept", get(handlers::explain))
        .route("/review", post(handlers::review))
        .route("/analyze", post(handlers::analyze))
        .route("/context", get(handlers::context))
        .route("/templates", get(handlers::list_templates));

    let router = Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http());

    let router = if enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}
