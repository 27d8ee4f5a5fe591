use crate::error::{Result, StorageError};
use async_trait::async_trait;

/// A stored mapping from an alias to its target URL.
///
/// Records are immutable: to change a mapping, delete it and save again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    /// The unique key of the record.
    pub alias: String,
    /// The original URL that was shortened.
    pub target: String,
}

/// Storage contract every backend must satisfy.
///
/// Implementations reject an empty alias or target with
/// [`StorageError::EmptyAlias`] / [`StorageError::EmptyTarget`] before
/// performing any I/O; [`ensure_alias`] and [`ensure_target`] do exactly that.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Creates a record only if none exists for `alias`.
    ///
    /// Returns `Err(AliasTaken)` if the alias is already stored. The check
    /// and the write are a single atomic step: of two concurrent calls with
    /// the same alias, exactly one succeeds.
    async fn put_if_absent(&self, alias: &str, target: &str) -> Result<()>;

    /// Retrieves the record for `alias`, or `Err(NotFound)`.
    async fn get(&self, alias: &str) -> Result<UrlRecord>;

    /// Removes the record for `alias`, or returns `Err(NotFound)` if none existed.
    async fn delete(&self, alias: &str) -> Result<()>;

    /// Releases backend resources. Called once by the host at shutdown.
    async fn close(&self) -> Result<()>;
}

/// Rejects an empty alias.
pub fn ensure_alias(alias: &str) -> Result<()> {
    if alias.is_empty() {
        return Err(StorageError::EmptyAlias);
    }
    Ok(())
}

/// Rejects an empty target URL.
pub fn ensure_target(target: &str) -> Result<()> {
    if target.is_empty() {
        return Err(StorageError::EmptyTarget);
    }
    Ok(())
}
