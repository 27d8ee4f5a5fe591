//! Core types and traits for the Burrow URL shortener.
//!
//! This crate provides the types shared by the storage backends, the
//! alias generator and the shortener service.

pub mod alias;
pub mod error;
pub mod repository;
pub mod shortener;

pub use alias::{Alias, ALPHABET, DEFAULT_ALIAS_LENGTH};
pub use error::{ErrorKind, GeneratorError, ShortenerError, StorageError};
pub use repository::{Repository, UrlRecord};
pub use shortener::Shortener;
