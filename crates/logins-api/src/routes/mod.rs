//! Route definitions
//!
//! Login routes are mounted under /api/v1; health routes sit at the root.

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::{health, logins};
use crate::state::AppState;

/// Create the main API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/login", put(logins::create_login))
        .route("/login/:login", get(logins::get_login_by_name))
        .route(
            "/uuid/:uuid",
            get(logins::get_login_by_uuid)
                .post(logins::update_login)
                .delete(logins::ban_login),
        )
        .route("/count", get(logins::count_logins))
        .route("/logins", get(logins::list_logins))
}
