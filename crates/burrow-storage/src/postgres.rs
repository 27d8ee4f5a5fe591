use async_trait::async_trait;
use burrow_core::error::{Result, StorageError};
use burrow_core::repository::{ensure_alias, ensure_target, Repository, UrlRecord};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::{debug, info};

const SCHEMA: &str = include_str!("../ddl/postgres/urls.sql");

/// PostgreSQL implementation of the repository contract.
///
/// Records live in a single `urls` table keyed by `alias`. The primary key
/// makes `put_if_absent` atomic: a racing insert fails with a unique
/// violation, which is reported as [`StorageError::AliasTaken`].
#[derive(Debug, Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a repository from an existing PostgreSQL connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new connection pool.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        debug!(max_connections, "connected to postgres");
        Ok(Self::new(pool))
    }

    /// Creates the `urls` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        info!("postgres schema is ready");
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl Repository for PostgresRepository {
    async fn put_if_absent(&self, alias: &str, target: &str) -> Result<()> {
        ensure_alias(alias)?;
        ensure_target(target)?;

        let result = sqlx::query(
            r#"
            INSERT INTO urls (alias, url)
            VALUES ($1, $2)
            "#,
        )
        .bind(alias)
        .bind(target)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(StorageError::AliasTaken(alias.to_owned()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn get(&self, alias: &str) -> Result<UrlRecord> {
        ensure_alias(alias)?;

        let row = sqlx::query(
            r#"
            SELECT url
            FROM urls
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Err(StorageError::NotFound(alias.to_owned()));
        };

        let target: String = row.try_get("url").map_err(map_sqlx_error)?;

        Ok(UrlRecord {
            alias: alias.to_owned(),
            target,
        })
    }

    async fn delete(&self, alias: &str) -> Result<()> {
        ensure_alias(alias)?;

        let result = sqlx::query(
            r#"
            DELETE FROM urls
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(alias.to_owned()));
        }

        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.pool.close().await;
        Ok(())
    }
}
