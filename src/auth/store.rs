//! The process-wide session store.
//!
//! Holds at most one [`Session`]. Readers get a clone; only the
//! [`Authenticator`](super::Authenticator) mutates it.

use crate::models::Session;
use crate::storage::{FieldStore, StoreError, AUTH_TOKEN_KEY, USER_DATA_KEY};
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the store from the persisted fields.
    ///
    /// Adopts the stored session when both `auth_token` and `user_data` are
    /// present and non-empty and the payload parses. A payload that does not parse is
    /// discarded together with its token and the store starts empty.
    pub async fn restore<F>(fields: &F) -> Result<Self, StoreError>
    where
        F: FieldStore,
    {
        let token = fields.get(AUTH_TOKEN_KEY).await?.filter(|t| !t.is_empty());
        let payload = fields.get(USER_DATA_KEY).await?.filter(|p| !p.is_empty());

        let (Some(_token), Some(payload)) = (token, payload) else {
            return Ok(Self::new());
        };

        match serde_json::from_str::<Session>(&payload) {
            Ok(session) => {
                tracing::info!(action = "session_restored", user_id = %session.id, role = %session.role, "Restored persisted session");
                Ok(Self::with_session(session))
            }
            Err(e) => {
                tracing::warn!(action = "session_discarded", error = %e, "Persisted session is malformed");
                fields.remove_pair([AUTH_TOKEN_KEY, USER_DATA_KEY]).await?;
                Ok(Self::new())
            }
        }
    }

    fn with_session(session: Session) -> Self {
        Self {
            current: RwLock::new(Some(session)),
        }
    }

    /// The active session, if any.
    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .is_some_and(Session::is_admin)
    }

    pub(crate) fn install(&self, session: Session) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(session);
    }

    pub(crate) fn clear(&self) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::storage::{MemoryFieldStore, DEFAULT_FIELD_TTL};

    fn sample_session() -> Session {
        Session {
            id: "1".to_string(),
            email: "user@example.com".to_string(),
            name: "John Doe".to_string(),
            role: Role::Standard,
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = SessionStore::new();
        assert_eq!(store.current(), None);
        assert!(!store.is_authenticated());
        assert!(!store.is_admin());
    }

    #[test]
    fn test_install_and_clear() {
        let store = SessionStore::new();
        store.install(sample_session());
        assert_eq!(store.current(), Some(sample_session()));
        assert!(store.is_authenticated());
        assert!(!store.is_admin());

        store.clear();
        assert_eq!(store.current(), None);
    }

    #[tokio::test]
    async fn test_restore_from_empty_fields() {
        let fields = MemoryFieldStore::new();
        let store = SessionStore::restore(&fields).await.unwrap();
        assert_eq!(store.current(), None);
    }

    #[tokio::test]
    async fn test_restore_valid_session() {
        let fields = MemoryFieldStore::new();
        let payload = serde_json::to_string(&sample_session()).unwrap();
        fields
            .set(AUTH_TOKEN_KEY, "tok", DEFAULT_FIELD_TTL)
            .await
            .unwrap();
        fields
            .set(USER_DATA_KEY, &payload, DEFAULT_FIELD_TTL)
            .await
            .unwrap();

        let store = SessionStore::restore(&fields).await.unwrap();
        assert_eq!(store.current(), Some(sample_session()));
    }

    #[tokio::test]
    async fn test_restore_discards_malformed_payload() {
        let fields = MemoryFieldStore::new();
        fields
            .set(AUTH_TOKEN_KEY, "tok", DEFAULT_FIELD_TTL)
            .await
            .unwrap();
        fields
            .set(USER_DATA_KEY, "{not json", DEFAULT_FIELD_TTL)
            .await
            .unwrap();

        let store = SessionStore::restore(&fields).await.unwrap();
        assert_eq!(store.current(), None);
        assert_eq!(fields.get(AUTH_TOKEN_KEY).await.unwrap(), None);
        assert_eq!(fields.get(USER_DATA_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_restore_discards_wrong_shape() {
        let fields = MemoryFieldStore::new();
        fields
            .set(AUTH_TOKEN_KEY, "tok", DEFAULT_FIELD_TTL)
            .await
            .unwrap();
        fields
            .set(USER_DATA_KEY, r#"{"id":"1","role":"owner"}"#, DEFAULT_FIELD_TTL)
            .await
            .unwrap();

        let store = SessionStore::restore(&fields).await.unwrap();
        assert_eq!(store.current(), None);
        assert_eq!(fields.get(AUTH_TOKEN_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_restore_requires_token() {
        let fields = MemoryFieldStore::new();
        let payload = serde_json::to_string(&sample_session()).unwrap();
        fields
            .set(USER_DATA_KEY, &payload, DEFAULT_FIELD_TTL)
            .await
            .unwrap();

        let store = SessionStore::restore(&fields).await.unwrap();
        assert_eq!(store.current(), None);
        // Nothing is discarded when a field is simply missing
        assert_eq!(
            fields.get(USER_DATA_KEY).await.unwrap().as_deref(),
            Some(payload.as_str())
        );
    }

    #[tokio::test]
    async fn test_restore_treats_empty_token_as_missing() {
        let fields = MemoryFieldStore::new();
        let payload = serde_json::to_string(&sample_session()).unwrap();
        fields
            .set_pair(
                [(AUTH_TOKEN_KEY, ""), (USER_DATA_KEY, payload.as_str())],
                DEFAULT_FIELD_TTL,
            )
            .await
            .unwrap();

        let store = SessionStore::restore(&fields).await.unwrap();
        assert_eq!(store.current(), None);
        assert!(!store.is_authenticated());

        // Same for an empty payload next to a real token
        fields
            .set_pair(
                [(AUTH_TOKEN_KEY, "tok"), (USER_DATA_KEY, "")],
                DEFAULT_FIELD_TTL,
            )
            .await
            .unwrap();
        let store = SessionStore::restore(&fields).await.unwrap();
        assert_eq!(store.current(), None);
    }
}
