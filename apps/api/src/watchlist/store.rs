//! Key-value backends for watchlist persistence.
//!
//! Values are opaque JSON strings; the watchlist layer owns the format.
//! Read-modify-write goes through [`KeyValueStore::compare_and_swap`] so
//! concurrent writers, in this process or another one sharing Redis, never
//! overwrite each other.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::AsyncCommands;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Could not encode stored value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Gave up writing `{key}` after {attempts} conflicting updates")]
    Contended { key: String, attempts: u32 },
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Writes `new` (or deletes the key when `None`) only if the stored value
    /// still equals `expected`. Returns `false` when another writer got there first.
    async fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        new: Option<String>,
    ) -> Result<bool, StorageError>;
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        new: Option<String>,
    ) -> Result<bool, StorageError> {
        let mut entries = self.entries.write().await;
        if entries.get(key).map(String::as_str) != expected {
            return Ok(false);
        }
        match new {
            Some(value) => entries.insert(key.to_string(), value),
            None => entries.remove(key),
        };
        Ok(true)
    }
}

/// Compare-and-swap as one Redis script. ARGV: has_expected, expected, has_new, new.
/// A missing key reads as `false` in Lua.
const COMPARE_AND_SWAP_SCRIPT: &str = r#"
local current = redis.call('GET', KEYS[1])
if ARGV[1] == '1' then
  if current ~= ARGV[2] then return 0 end
elseif current then
  return 0
end
if ARGV[3] == '1' then
  redis.call('SET', KEYS[1], ARGV[4])
else
  redis.call('DEL', KEYS[1])
end
return 1
"#;

/// Redis-backed store sharing one multiplexed connection.
pub struct RedisStore {
    connection: redis::aio::MultiplexedConnection,
    compare_and_swap: redis::Script,
}

impl RedisStore {
    pub async fn connect(redis_url: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(redis_url)?;
        let connection = client.get_multiplexed_async_connection().await?;
        info!("Redis watchlist store connected");
        Ok(Self {
            connection,
            compare_and_swap: redis::Script::new(COMPARE_AND_SWAP_SCRIPT),
        })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.connection.clone();
        Ok(conn.get(key).await?)
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.connection.clone();
        conn.del::<_, ()>(key).await?;
        Ok(())
    }

    async fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        new: Option<String>,
    ) -> Result<bool, StorageError> {
        let mut conn = self.connection.clone();
        let swapped: i32 = self
            .compare_and_swap
            .key(key)
            .arg(flag(expected.is_some()))
            .arg(expected.unwrap_or_default())
            .arg(flag(new.is_some()))
            .arg(new.unwrap_or_default())
            .invoke_async(&mut conn)
            .await?;
        Ok(swapped == 1)
    }
}

fn flag(set: bool) -> &'static str {
    if set {
        "1"
    } else {
        "0"
    }
}
