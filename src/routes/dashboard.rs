//! Guarded dashboard areas.
//!
//! Every request re-evaluates the route guard through the extractors; a
//! denied navigation is a redirect to the area's login page.

use crate::auth::guard::Area;
use crate::auth::middleware::{AdminSession, UserSession};
use crate::error::AppError;
use crate::models::{AreaResponse, Session};
use axum::{extract::Path, Json};

fn area_response(area: Area, section: &str, user: Session) -> Result<Json<AreaResponse>, AppError> {
    if !section.is_empty() && !area.sections().contains(&section) {
        return Err(AppError::NotFound("Page not found".to_string()));
    }
    Ok(Json(AreaResponse {
        area: area.name(),
        section: section.to_string(),
        user,
    }))
}

/// GET /dashboard
pub async fn user_home(UserSession(user): UserSession) -> Result<Json<AreaResponse>, AppError> {
    area_response(Area::Standard, "", user)
}

/// GET /dashboard/{section}
pub async fn user_section(
    UserSession(user): UserSession,
    Path(section): Path<String>,
) -> Result<Json<AreaResponse>, AppError> {
    area_response(Area::Standard, &section, user)
}

/// GET /admin/dashboard
pub async fn admin_home(AdminSession(user): AdminSession) -> Result<Json<AreaResponse>, AppError> {
    area_response(Area::Administrator, "", user)
}

/// GET /admin/dashboard/{section}
pub async fn admin_section(
    AdminSession(user): AdminSession,
    Path(section): Path<String>,
) -> Result<Json<AreaResponse>, AppError> {
    area_response(Area::Administrator, &section, user)
}
