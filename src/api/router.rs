//! HTTP route table

use std::time::Duration;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::health;
use super::state::AppState;
use super::users;

/// Create the application router with application state.
///
/// `request_timeout` bounds every request; requests past it answer 408
/// and the in-flight handler future is dropped, abandoning any pending
/// gateway calls.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User endpoints
        .route("/users", post(users::create_user))
        .route("/users/{id}", get(users::get_user))
        .route("/users/{id}", put(users::update_user))
        // Add state and middleware
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
