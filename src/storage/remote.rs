//! Redis-backed field store.
//!
//! Redis key pattern: `{prefix}{field}`, e.g. `predictor:auth_token`.
//! Expiry is delegated to Redis via `SET EX`.

use super::{FieldStore, StoreError};
use redis::AsyncCommands;
use std::time::Duration;

#[derive(Clone)]
pub struct RedisFieldStore {
    client: redis::Client,
    prefix: String,
}

impl RedisFieldStore {
    pub fn new(client: redis::Client, prefix: impl Into<String>) -> Self {
        Self {
            client,
            prefix: prefix.into(),
        }
    }

    fn key(&self, field: &str) -> String {
        format!("{}{}", self.prefix, field)
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StoreError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

impl FieldStore for RedisFieldStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut con = self.connection().await?;
        let value: Option<String> = con.get(self.key(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        let mut con = self.connection().await?;
        // SET EX rejects a zero expiry
        let secs = ttl.as_secs().max(1);
        con.set_ex::<_, _, ()>(self.key(key), value, secs).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut con = self.connection().await?;
        con.del::<_, ()>(self.key(key)).await?;
        Ok(())
    }

    async fn set_pair(
        &self,
        entries: [(&str, &str); 2],
        ttl: Duration,
    ) -> Result<(), StoreError> {
        let mut con = self.connection().await?;
        let secs = ttl.as_secs().max(1);
        let mut pipe = redis::pipe();
        pipe.atomic();
        for (key, value) in entries {
            pipe.set_ex(self.key(key), value, secs).ignore();
        }
        let _: () = pipe.query_async(&mut con).await?;
        Ok(())
    }

    async fn remove_pair(&self, keys: [&str; 2]) -> Result<(), StoreError> {
        let mut con = self.connection().await?;
        let mut pipe = redis::pipe();
        pipe.atomic();
        for key in keys {
            pipe.del(self.key(key)).ignore();
        }
        let _: () = pipe.query_async(&mut con).await?;
        Ok(())
    }
}
