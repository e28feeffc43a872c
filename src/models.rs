//! Request, response and session models.
//!
//! All models use serde for serialization/deserialization.
//! `Session` doubles as the persisted `user_data` payload.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

// ============================================================================
// Session Models
// ============================================================================

/// Access level carried by a session.
///
/// Serialized as `"user"` / `"admin"`, the values stored in `user_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "user")]
    Standard,
    #[serde(rename = "admin")]
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Standard => "user",
            Role::Administrator => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::Standard),
            "admin" => Ok(Role::Administrator),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// The currently authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Administrator
    }
}

/// Allow-list entry used to validate login attempts.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub id: &'static str,
    pub email: &'static str,
    pub secret: &'static str,
    pub name: &'static str,
    pub role: Role,
}

impl CredentialRecord {
    pub fn to_session(&self) -> Session {
        Session {
            id: self.id.to_string(),
            email: self.email.to_string(),
            name: self.name.to_string(),
            role: self.role,
        }
    }
}

// ============================================================================
// Auth Models
// ============================================================================

/// Login form submission.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Zeroizing<String>,
    /// Requested role. Defaults to `user`.
    #[serde(default)]
    pub role: Option<Role>,
}

/// Signup form submission.
#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: Zeroizing<String>,
    pub name: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

/// Response after a successful login or signup.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Session,
}

/// Snapshot of the session store for the front-end.
#[derive(Debug, Serialize)]
pub struct CurrentSessionResponse {
    pub user: Option<Session>,
    pub is_authenticated: bool,
    pub is_admin: bool,
}

impl From<Option<Session>> for CurrentSessionResponse {
    fn from(user: Option<Session>) -> Self {
        let is_authenticated = user.is_some();
        let is_admin = user.as_ref().is_some_and(Session::is_admin);
        Self {
            user,
            is_authenticated,
            is_admin,
        }
    }
}

// ============================================================================
// Dashboard Models
// ============================================================================

/// Response for an allowed navigation into a guarded area.
#[derive(Debug, Serialize)]
pub struct AreaResponse {
    pub area: &'static str,
    pub section: String,
    pub user: Session,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_values() {
        assert_eq!(serde_json::to_string(&Role::Standard).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Administrator).unwrap(),
            "\"admin\""
        );
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Administrator);
        assert_eq!("user".parse::<Role>().unwrap(), Role::Standard);
        assert!("trusted".parse::<Role>().is_err());
        assert_eq!(Role::default(), Role::Standard);
    }

    #[test]
    fn test_session_payload_shape() {
        let session = Session {
            id: "1".to_string(),
            email: "user@example.com".to_string(),
            name: "John Doe".to_string(),
            role: Role::Standard,
        };
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "1",
                "email": "user@example.com",
                "name": "John Doe",
                "role": "user"
            })
        );
    }

    #[test]
    fn test_session_rejects_unknown_role() {
        let result = serde_json::from_str::<Session>(
            r#"{"id":"1","email":"a@b.c","name":"A","role":"superuser"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_login_request_role_defaults_to_none() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"email":"user@example.com","password":"password"}"#).unwrap();
        assert_eq!(req.role, None);
        assert_eq!(req.password.as_str(), "password");
        let debug = format!("{:?}", req);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("\"password\""));
    }

    #[test]
    fn test_current_session_flags() {
        let empty = CurrentSessionResponse::from(None);
        assert!(!empty.is_authenticated);
        assert!(!empty.is_admin);

        let admin = CurrentSessionResponse::from(Some(Session {
            id: "2".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin User".to_string(),
            role: Role::Administrator,
        }));
        assert!(admin.is_authenticated);
        assert!(admin.is_admin);
    }
}
