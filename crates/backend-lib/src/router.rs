// ============================
// crates/backend-lib/src/router.rs
// ============================
//! Route table and middleware assembly.
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/validate", get(handlers::auth::validate))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/change-password", post(handlers::auth::change_password))
        .route("/api/courses", get(handlers::catalog::list_courses))
        .route("/api/courses/{course_id}", get(handlers::catalog::get_course))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
