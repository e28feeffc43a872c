//! Login, signup and logout.
//!
//! Every successful login or signup writes `auth_token` and `user_data`
//! together and then installs the session. Logout removes both and clears
//! the store. Operations are serialized so the two fields never diverge.
//!
//! A failed write leaves the store as it was. Logout clears the store even
//! when the fields could not be removed.

use super::credentials::{CredentialRepository, StaticCredentials};
use super::store::SessionStore;
use super::token::generate_session_token;
use crate::models::{Role, Session};
use crate::storage::{FieldStore, StoreError, AUTH_TOKEN_KEY, DEFAULT_FIELD_TTL, USER_DATA_KEY};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub struct Authenticator<F, R = StaticCredentials> {
    fields: F,
    credentials: R,
    sessions: Arc<SessionStore>,
    ttl: Duration,
    op_lock: Mutex<()>,
}

impl<F, R> Authenticator<F, R>
where
    F: FieldStore,
    R: CredentialRepository,
{
    pub fn new(fields: F, credentials: R, sessions: Arc<SessionStore>) -> Self {
        Self {
            fields,
            credentials,
            sessions,
            ttl: DEFAULT_FIELD_TTL,
            op_lock: Mutex::new(()),
        }
    }

    /// Override the lifetime of the persisted fields.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Check `email`, `secret` and `role` against the allow-list.
    ///
    /// Returns `Ok(false)` on any mismatch and leaves the store untouched.
    pub async fn login(&self, email: &str, secret: &str, role: Role) -> Result<bool, StoreError> {
        Ok(self.login_session(email, secret, role).await?.is_some())
    }

    /// Like [`login`](Self::login) but returns the installed session.
    pub async fn login_session(
        &self,
        email: &str,
        secret: &str,
        role: Role,
    ) -> Result<Option<Session>, StoreError> {
        let Some(record) = self
            .credentials
            .find_credential(email, role)
            .filter(|record| record.secret == secret)
        else {
            return Ok(None);
        };

        let session = record.to_session();
        let _guard = self.op_lock.lock().await;
        self.persist_and_install(session.clone()).await?;
        Ok(Some(session))
    }

    /// Create a standard account session. Never rejects its input.
    pub async fn signup(&self, email: &str, secret: &str, name: &str) -> Result<bool, StoreError> {
        self.signup_session(email, secret, name).await?;
        Ok(true)
    }

    /// Like [`signup`](Self::signup) but returns the installed session.
    pub async fn signup_session(
        &self,
        email: &str,
        _secret: &str,
        name: &str,
    ) -> Result<Session, StoreError> {
        let session = Session {
            id: nanoid::nanoid!(12),
            email: email.to_string(),
            name: name.to_string(),
            role: Role::Standard,
        };

        let _guard = self.op_lock.lock().await;
        self.persist_and_install(session.clone()).await?;
        Ok(session)
    }

    /// Remove the persisted fields and clear the store. Idempotent.
    ///
    /// The store is cleared before any storage error is returned.
    pub async fn logout(&self) -> Result<(), StoreError> {
        let _guard = self.op_lock.lock().await;
        let removed = self
            .fields
            .remove_pair([AUTH_TOKEN_KEY, USER_DATA_KEY])
            .await;
        self.sessions.clear();
        removed
    }

    async fn persist_and_install(&self, session: Session) -> Result<(), StoreError> {
        let token = generate_session_token();
        let payload = serde_json::to_string(&session)?;

        self.fields
            .set_pair(
                [(AUTH_TOKEN_KEY, token.as_str()), (USER_DATA_KEY, payload.as_str())],
                self.ttl,
            )
            .await?;
        self.sessions.install(session);
        Ok(())
    }
}
