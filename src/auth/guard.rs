//! Route guard for the two protected areas.

use crate::models::Session;

/// Outcome of a navigation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Decide whether `session` may enter an area.
///
/// A missing session and a standard session entering the admin area both
/// redirect to login; there is no separate "forbidden" outcome.
pub fn evaluate(session: Option<&Session>, requires_admin: bool) -> GuardDecision {
    match session {
        None => GuardDecision::RedirectToLogin,
        Some(session) if requires_admin && !session.is_admin() => GuardDecision::RedirectToLogin,
        Some(_) => GuardDecision::Allow,
    }
}

/// Protected partitions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Standard,
    Administrator,
}

impl Area {
    pub fn requires_admin(&self) -> bool {
        matches!(self, Area::Administrator)
    }

    /// Where a denied navigation is sent.
    pub fn login_path(&self) -> &'static str {
        match self {
            Area::Standard => "/login",
            Area::Administrator => "/admin/login",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Area::Standard => "dashboard",
            Area::Administrator => "admin",
        }
    }

    /// Sections reachable under the area root.
    pub fn sections(&self) -> &'static [&'static str] {
        match self {
            Area::Standard => &["extensions", "analytics", "subscription", "settings", "admin"],
            Area::Administrator => &["users", "websites", "analytics", "settings"],
        }
    }

    pub fn check(&self, session: Option<&Session>) -> GuardDecision {
        evaluate(session, self.requires_admin())
    }
}
