//! Auth API endpoints.

use super::require_field;
use crate::auth::middleware::AppState;
use crate::error::AppError;
use crate::models::{CurrentSessionResponse, LoginRequest, Role, SessionResponse, SignupRequest};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

async fn login_as(
    state: &AppState,
    req: &LoginRequest,
    role: Role,
) -> Result<SessionResponse, AppError> {
    require_field(&req.email, "Email")?;
    require_field(&req.password, "Password")?;

    match state
        .auth
        .login_session(&req.email, &req.password, role)
        .await?
    {
        Some(user) => {
            tracing::info!(action = "auth_success", user_id = %user.id, role = %role, "User authenticated");
            Ok(SessionResponse { user })
        }
        None => {
            // Unknown email, wrong secret and wrong role all look the same
            tracing::warn!(action = "auth_failed", role = %role, "Invalid credentials");
            Err(AppError::Unauthorized("Invalid credentials".to_string()))
        }
    }
}

/// POST /api/auth/login: Log in with the requested role (default `user`)
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let role = req.role.unwrap_or_default();
    Ok(Json(login_as(&state, &req, role).await?))
}

/// POST /api/auth/admin/login: Log in to the admin area
pub async fn admin_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(login_as(&state, &req, Role::Administrator).await?))
}

/// POST /api/auth/signup: Create a standard account session
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_field(&req.email, "Email")?;
    require_field(&req.password, "Password")?;
    require_field(&req.name, "Name")?;

    let user = state
        .auth
        .signup_session(&req.email, &req.password, &req.name)
        .await?;

    tracing::info!(action = "user_registered", user_id = %user.id, "New account session created");

    Ok(Json(SessionResponse { user }))
}

/// POST /api/auth/logout: End the current session
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let user_id = state.auth.sessions().current().map(|s| s.id);
    state.auth.logout().await?;

    if let Some(user_id) = user_id {
        tracing::info!(action = "logout", user_id = %user_id, "User logged out");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/session: Current session, if any
pub async fn current_session(State(state): State<AppState>) -> Json<CurrentSessionResponse> {
    Json(CurrentSessionResponse::from(state.auth.sessions().current()))
}
