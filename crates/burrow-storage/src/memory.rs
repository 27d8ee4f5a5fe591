use async_trait::async_trait;
use burrow_core::error::{Result, StorageError};
use burrow_core::repository::{ensure_alias, ensure_target, Repository, UrlRecord};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. `put_if_absent` goes through the entry API,
/// which holds the shard's write lock across the check and the insert.
#[derive(Debug)]
pub struct InMemoryRepository {
    storage: DashMap<String, String>,
    closed: AtomicBool,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
            closed: AtomicBool::new(false),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StorageError::Unavailable(
                "in-memory repository is closed".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn put_if_absent(&self, alias: &str, target: &str) -> Result<()> {
        ensure_alias(alias)?;
        ensure_target(target)?;
        self.ensure_open()?;

        match self.storage.entry(alias.to_owned()) {
            Entry::Occupied(_) => Err(StorageError::AliasTaken(alias.to_owned())),
            Entry::Vacant(slot) => {
                slot.insert(target.to_owned());
                trace!(alias, "stored record in memory");
                Ok(())
            }
        }
    }

    async fn get(&self, alias: &str) -> Result<UrlRecord> {
        ensure_alias(alias)?;
        self.ensure_open()?;

        let Some(target) = self.storage.get(alias) else {
            return Err(StorageError::NotFound(alias.to_owned()));
        };

        Ok(UrlRecord {
            alias: alias.to_owned(),
            target: target.value().clone(),
        })
    }

    async fn delete(&self, alias: &str) -> Result<()> {
        ensure_alias(alias)?;
        self.ensure_open()?;

        match self.storage.remove(alias) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(alias.to_owned())),
        }
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::Release);
        self.storage.clear();
        Ok(())
    }
}
