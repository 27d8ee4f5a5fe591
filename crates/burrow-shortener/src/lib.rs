pub mod service;

pub use burrow_core::{Alias, ErrorKind, Shortener, ShortenerError};
pub use service::{ShortenerConfig, ShortenerService, DEFAULT_MAX_ATTEMPTS, DEFAULT_STORAGE_TIMEOUT};
