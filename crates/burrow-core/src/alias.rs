use crate::error::ShortenerError;
use std::fmt::Display;

/// The 62-character alphabet aliases are drawn from.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Alias length used when none is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 10;

/// A short alias standing in for a full URL.
///
/// An alias is never empty. Uniqueness is not a property of the value
/// itself; it is enforced by the repository that stores it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alias(String);

impl Alias {
    /// Creates a new `Alias` after checking it is not empty.
    pub fn new(alias: impl Into<String>) -> std::result::Result<Self, ShortenerError> {
        let alias = alias.into();
        if alias.is_empty() {
            return Err(ShortenerError::EmptyAlias);
        }
        Ok(Self(alias))
    }

    /// Creates an `Alias` without validation.
    ///
    /// Use this only for values produced by a generator, which never
    /// yields an empty string.
    pub fn new_unchecked(alias: impl Into<String>) -> Self {
        Self(alias.into())
    }

    /// Returns the alias as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if every character belongs to [`ALPHABET`].
    pub fn is_alphanumeric(&self) -> bool {
        self.0.bytes().all(|b| ALPHABET.contains(&b))
    }
}

impl Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Alias {
    type Error = ShortenerError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Alias> for String {
    fn from(alias: Alias) -> Self {
        alias.0
    }
}
