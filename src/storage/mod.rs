//! Persisted session fields.
//!
//! The session survives restarts as two string entries, `auth_token` and
//! `user_data`, each written with an expiry. They are always written together
//! and removed together.
//!
//! Two backends implement [`FieldStore`]: an in-process map with deadlines
//! ([`memory::MemoryFieldStore`]) and Redis ([`remote::RedisFieldStore`]).
//! [`FieldBackend`] picks one at startup.

pub mod memory;
pub mod remote;

use std::future::Future;
use std::time::Duration;

pub use memory::MemoryFieldStore;
pub use remote::RedisFieldStore;

/// Key holding the opaque session token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Key holding the serialized session.
pub const USER_DATA_KEY: &str = "user_data";

/// Default lifetime of both persisted fields (7 days).
pub const DEFAULT_FIELD_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key/value string storage with per-entry expiry.
///
/// Expired entries read as absent. `remove` on a missing key is a no-op.
pub trait FieldStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Write two entries with the same TTL. Either both land or neither does.
    fn set_pair(
        &self,
        entries: [(&str, &str); 2],
        ttl: Duration,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Remove two entries together.
    fn remove_pair(&self, keys: [&str; 2]) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Backend selected from configuration.
#[derive(Clone)]
pub enum FieldBackend {
    Memory(MemoryFieldStore),
    Redis(RedisFieldStore),
}

impl FieldBackend {
    pub fn name(&self) -> &'static str {
        match self {
            FieldBackend::Memory(_) => "memory",
            FieldBackend::Redis(_) => "redis",
        }
    }
}

impl FieldStore for FieldBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            FieldBackend::Memory(store) => store.get(key).await,
            FieldBackend::Redis(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        match self {
            FieldBackend::Memory(store) => store.set(key, value, ttl).await,
            FieldBackend::Redis(store) => store.set(key, value, ttl).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match self {
            FieldBackend::Memory(store) => store.remove(key).await,
            FieldBackend::Redis(store) => store.remove(key).await,
        }
    }

    async fn set_pair(
        &self,
        entries: [(&str, &str); 2],
        ttl: Duration,
    ) -> Result<(), StoreError> {
        match self {
            FieldBackend::Memory(store) => store.set_pair(entries, ttl).await,
            FieldBackend::Redis(store) => store.set_pair(entries, ttl).await,
        }
    }

    async fn remove_pair(&self, keys: [&str; 2]) -> Result<(), StoreError> {
        match self {
            FieldBackend::Memory(store) => store.remove_pair(keys).await,
            FieldBackend::Redis(store) => store.remove_pair(keys).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_seven_days() {
        assert_eq!(DEFAULT_FIELD_TTL.as_secs(), 604_800);
    }

    #[tokio::test]
    async fn test_backend_dispatches_to_memory() {
        let backend = FieldBackend::Memory(MemoryFieldStore::new());
        assert_eq!(backend.name(), "memory");

        backend
            .set(AUTH_TOKEN_KEY, "token", DEFAULT_FIELD_TTL)
            .await
            .unwrap();
        assert_eq!(
            backend.get(AUTH_TOKEN_KEY).await.unwrap().as_deref(),
            Some("token")
        );

        backend.remove(AUTH_TOKEN_KEY).await.unwrap();
        assert_eq!(backend.get(AUTH_TOKEN_KEY).await.unwrap(), None);

        backend
            .set_pair([(AUTH_TOKEN_KEY, "t"), (USER_DATA_KEY, "{}")], DEFAULT_FIELD_TTL)
            .await
            .unwrap();
        assert_eq!(backend.get(USER_DATA_KEY).await.unwrap().as_deref(), Some("{}"));

        backend
            .remove_pair([AUTH_TOKEN_KEY, USER_DATA_KEY])
            .await
            .unwrap();
        assert_eq!(backend.get(AUTH_TOKEN_KEY).await.unwrap(), None);
        assert_eq!(backend.get(USER_DATA_KEY).await.unwrap(), None);
    }
}
