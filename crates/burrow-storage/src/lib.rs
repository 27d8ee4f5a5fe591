//! Storage backends for the Burrow shortener.
//!
//! Every backend implements [`Repository`] from `burrow-core` and maps its
//! driver errors into [`StorageError`] before they leave this crate.

pub mod memory;
pub mod postgres;
pub mod redis;

pub use self::memory::InMemoryRepository;
pub use self::postgres::PostgresRepository;
pub use self::redis::RedisRepository;
pub use burrow_core::{Repository, StorageError, UrlRecord};
