use thiserror::Error;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors reported by a storage backend.
///
/// Backends translate driver-specific failures (unique-constraint codes,
/// nil replies, pool errors) into this vocabulary before returning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("alias is empty")]
    EmptyAlias,
    #[error("target url is empty")]
    EmptyTarget,
    #[error("alias already exists: {0}")]
    AliasTaken(String),
    #[error("no record for alias: {0}")]
    NotFound(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("alias length must be positive, got {0}")]
    InvalidLength(usize),
}

/// Broad category of a [`ShortenerError`], used by transport adapters
/// to pick a status code without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty or malformed URL or alias supplied by the caller.
    InvalidInput,
    /// The alias space could not produce a free alias within the retry budget.
    Conflict,
    NotFound,
    /// The service no longer accepts new work.
    Unavailable,
    Internal,
}

/// Domain errors of the shortening service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("url is empty")]
    EmptyUrl,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("alias is empty")]
    EmptyAlias,
    #[error("no url found for alias: {0}")]
    NotFound(String),
    #[error("no free alias found after {attempts} attempts")]
    AliasSpaceExhausted { attempts: usize },
    #[error("shortener is shutting down")]
    ShuttingDown,
    #[error("alias generation failed: {0}")]
    Generator(#[from] GeneratorError),
    #[error("storage error: {0}")]
    Storage(#[source] StorageError),
}

impl ShortenerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShortenerError::EmptyUrl
            | ShortenerError::InvalidUrl(_)
            | ShortenerError::EmptyAlias => ErrorKind::InvalidInput,
            ShortenerError::NotFound(_) => ErrorKind::NotFound,
            ShortenerError::AliasSpaceExhausted { .. } => ErrorKind::Conflict,
            ShortenerError::ShuttingDown => ErrorKind::Unavailable,
            ShortenerError::Generator(_) | ShortenerError::Storage(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_invalid_input() {
        assert_eq!(ShortenerError::EmptyUrl.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            ShortenerError::InvalidUrl("nope".to_string()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(ShortenerError::EmptyAlias.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn backend_failures_are_internal() {
        let err = ShortenerError::Storage(StorageError::Unavailable("refused".to_string()));
        assert_eq!(err.kind(), ErrorKind::Internal);

        let err: ShortenerError = GeneratorError::InvalidLength(0).into();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn exhausted_retry_budget_is_a_conflict() {
        let err = ShortenerError::AliasSpaceExhausted { attempts: 5 };
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.to_string(), "no free alias found after 5 attempts");
    }
}
