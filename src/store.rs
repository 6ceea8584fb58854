use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::AsyncCommands;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::Config;

/// Backend contract for the external key-value store.
///
/// `get` uses `None` as the not-found sentinel so callers can tell a
/// missing key apart from a transport failure. The store contract
/// supports an optional expiry on writes; values written through the
/// HTTP API never carry one.
#[async_trait]
pub trait KvBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()>;
    async fn ping(&self) -> Result<()>;
}

/// Store backend speaking the Redis protocol.
///
/// The client is opened lazily: no connection is made until the first
/// operation, so an unreachable store does not block startup. Each
/// operation acquires a multiplexed connection with transport-default
/// timeouts; there is no pooling or retry logic on top.
#[derive(Debug)]
pub struct RedisBackend {
    client: redis::Client,
}

impl RedisBackend {
    /// Create a backend for the given `host:port` address.
    ///
    /// # Errors
    /// Returns an error if the address does not form a valid Redis URL.
    pub fn connect(addr: &str) -> Result<Self> {
        let client = redis::Client::open(format!("redis://{}", addr))
            .with_context(|| format!("Invalid Redis address: {}", addr))?;
        Ok(Self { client })
    }

    async fn conn(&self) -> Result<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .context("Failed to connect to Redis")
    }
}

#[async_trait]
impl KvBackend for RedisBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn().await?;
        let value: Option<String> = conn.get(key).await.context("Redis GET failed")?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.conn().await?;
        match ttl {
            Some(ttl) => {
                let _: () = conn
                    .set_ex(key, value, ttl.as_secs())
                    .await
                    .context("Redis SETEX failed")?;
            }
            None => {
                let _: () = conn.set(key, value).await.context("Redis SET failed")?;
            }
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn().await?;
        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("Redis PING failed")?;
        anyhow::ensure!(reply == "PONG", "Unexpected PING reply: {}", reply);
        Ok(())
    }
}

/// In-process backend for tests and embedding.
///
/// Honors the expiry contract: entries written with a TTL are dropped
/// on the first read past their deadline.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, MemoryEntry>>,
}

struct MemoryEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.entries.lock().expect("kv map lock poisoned");
        let expired = entries
            .get(key)
            .is_some_and(|entry| entry.expires_at.is_some_and(|at| Instant::now() >= at));
        if expired {
            entries.remove(key);
            return Ok(None);
        }
        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let entry = MemoryEntry {
            value: value.to_string(),
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.entries
            .lock()
            .expect("kv map lock poisoned")
            .insert(key.to_string(), entry);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Shareable store client for use across async handlers
#[derive(Clone)]
pub struct StoreClient {
    inner: Arc<dyn KvBackend>,
}

impl StoreClient {
    /// Create a client for the Redis store named in the configuration.
    ///
    /// Opening is lazy, so this succeeds even when the store is down;
    /// callers that want to know run [`StoreClient::ping`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = RedisBackend::connect(&config.redis_addr)?;
        Ok(Self {
            inner: Arc::new(backend),
        })
    }

    /// Wrap an arbitrary backend. Used to inject a fake store in tests.
    pub fn with_backend(backend: impl KvBackend + 'static) -> Self {
        Self {
            inner: Arc::new(backend),
        }
    }

    /// Read a value by key.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Key found
    /// * `Ok(None)` - Key not present in the store
    /// * `Err(_)` - Store round-trip failed
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    /// Write a value, optionally with an expiry.
    pub async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        self.inner.set(key, value, ttl).await
    }

    /// Connectivity probe used by the startup check.
    pub async fn ping(&self) -> Result<()> {
        self.inner.ping().await
    }
}
