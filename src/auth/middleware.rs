//! Axum extractors that apply the route guard.

use super::guard::{Area, GuardDecision};
use super::Authenticator;
use crate::error::AppError;
use crate::models::Session;
use crate::storage::FieldBackend;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<Authenticator<FieldBackend>>,
}

fn guarded(state: &AppState, area: Area) -> Result<Session, AppError> {
    let session = state.auth.sessions().current();
    match (area.check(session.as_ref()), session) {
        (GuardDecision::Allow, Some(session)) => Ok(session),
        _ => {
            tracing::debug!(area = area.name(), "Guard redirected to login");
            Err(AppError::RedirectToLogin(area.login_path()))
        }
    }
}

/// Session allowed into the standard dashboard.
///
/// Rejects with a redirect to `/login` when no session exists.
pub struct UserSession(pub Session);

impl FromRequestParts<AppState> for UserSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        guarded(state, Area::Standard).map(UserSession)
    }
}

/// Session allowed into the admin area.
///
/// Rejects with a redirect to `/admin/login` when no session exists or the
/// session is not an administrator.
pub struct AdminSession(pub Session);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        guarded(state, Area::Administrator).map(AdminSession)
    }
}
