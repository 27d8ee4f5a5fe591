use async_trait::async_trait;
use burrow_core::error::{Result, StorageError};
use burrow_core::repository::{ensure_alias, ensure_target, Repository, UrlRecord};
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace, warn};

pub const DEFAULT_KEY_PREFIX: &str = "burrow:url:";

/// Redis implementation of the repository contract.
///
/// Each record is a plain string key `<prefix><alias>` holding the target
/// URL. Creation uses `SETNX`, which is atomic on the server, so two
/// writers racing for the same alias cannot both succeed.
#[derive(Debug)]
pub struct RedisRepository {
    conn: MultiplexedConnection,
    key_prefix: String,
    closed: AtomicBool,
}

impl RedisRepository {
    /// Creates a repository over an existing multiplexed connection.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self::with_prefix(conn, DEFAULT_KEY_PREFIX)
    }

    /// Creates a repository with a custom key prefix (e.g. "myapp:url:").
    pub fn with_prefix(conn: MultiplexedConnection, key_prefix: impl Into<String>) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
            closed: AtomicBool::new(false),
        }
    }

    /// Opens a connection to `redis_url` and checks it with `PING`.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> Result<Self> {
        let client = redis::Client::open(redis_url).map_err(map_redis_error)?;
        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(map_redis_error)?;

        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;

        debug!(endpoint = redis_endpoint(redis_url), "connected to redis");
        Ok(Self::with_prefix(conn, key_prefix))
    }

    fn key(&self, alias: &str) -> String {
        format!("{}{}", self.key_prefix, alias)
    }

    fn connection(&self) -> Result<MultiplexedConnection> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StorageError::Unavailable(
                "redis repository is closed".to_string(),
            ));
        }
        Ok(self.conn.clone())
    }
}

/// Host and port of a connection URL, without scheme, credentials or path.
fn redis_endpoint(redis_url: &str) -> &str {
    let Some((_, rest)) = redis_url.split_once("://") else {
        return "";
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    match authority.rsplit_once('@') {
        Some((_, host)) => host,
        None => authority,
    }
}

fn map_redis_error(err: redis::RedisError) -> StorageError {
    let message = err.to_string();

    if err.is_timeout() {
        StorageError::Timeout(message)
    } else if err.is_connection_refusal() || err.is_connection_dropped() || err.is_io_error() {
        StorageError::Unavailable(message)
    } else {
        StorageError::Query(message)
    }
}

#[async_trait]
impl Repository for RedisRepository {
    async fn put_if_absent(&self, alias: &str, target: &str) -> Result<()> {
        ensure_alias(alias)?;
        ensure_target(target)?;

        let mut conn = self.connection()?;
        let created: bool = conn
            .set_nx(self.key(alias), target)
            .await
            .map_err(map_redis_error)?;

        if !created {
            trace!(alias, "alias already present in redis");
            return Err(StorageError::AliasTaken(alias.to_owned()));
        }

        Ok(())
    }

    async fn get(&self, alias: &str) -> Result<UrlRecord> {
        ensure_alias(alias)?;

        let mut conn = self.connection()?;
        let target: Option<String> = conn
            .get(self.key(alias))
            .await
            .map_err(map_redis_error)?;

        match target {
            Some(target) => Ok(UrlRecord {
                alias: alias.to_owned(),
                target,
            }),
            None => Err(StorageError::NotFound(alias.to_owned())),
        }
    }

    async fn delete(&self, alias: &str) -> Result<()> {
        ensure_alias(alias)?;

        let mut conn = self.connection()?;
        let removed: usize = conn
            .del(self.key(alias))
            .await
            .map_err(map_redis_error)?;

        if removed == 0 {
            return Err(StorageError::NotFound(alias.to_owned()));
        }

        Ok(())
    }

    async fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            warn!("redis repository closed twice");
        }
        Ok(())
    }
}
