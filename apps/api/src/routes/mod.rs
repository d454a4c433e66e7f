pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::evaluation::handlers;
use crate::state::AppState;

/// Method-router fallback so non-POST requests get our 405 body instead of
/// Axum's default empty response.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/evaluate",
            post(handlers::handle_evaluate).fallback(method_not_allowed),
        )
        .with_state(state)
}
