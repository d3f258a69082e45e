pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::taxonomy::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/domain/:hs_code", get(handlers::handle_classify))
        .route(
            "/api/v1/reference/:hs_code",
            get(handlers::handle_get_reference),
        )
        .route(
            "/api/v1/attributes/generate",
            post(handlers::handle_generate),
        )
        .with_state(state)
}
