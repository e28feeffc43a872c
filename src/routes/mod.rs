//! API and page route handlers.

pub mod auth;
pub mod dashboard;

use crate::auth::middleware::AppState;
use crate::error::AppError;
use axum::{routing::get, routing::post, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Reject blank form fields.
pub fn require_field(value: &str, label: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", label)));
    }
    Ok(())
}

/// Build the router with all endpoints.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Auth endpoints
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/admin/login", post(auth::admin_login))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::current_session))
        // Standard area
        .route("/dashboard", get(dashboard::user_home))
        .route("/dashboard/{section}", get(dashboard::user_section))
        // Admin area
        .route("/admin/dashboard", get(dashboard::admin_home))
        .route("/admin/dashboard/{section}", get(dashboard::admin_section))
}

/// Static frontend for every path the API does not claim.
///
/// Unknown paths, including the `/login` and `/admin/login` redirect targets,
/// get `index.html` so the client-side router can take over.
pub fn frontend(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")))
}
