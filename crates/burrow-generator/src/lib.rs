pub mod random;

pub use random::RandomGenerator;

use burrow_core::{Alias, GeneratorError};

/// Trait for generating aliases.
///
/// Implementations are pure generators that don't interact with storage
/// and keep no memory of issued aliases; uniqueness is enforced by the
/// repository the alias is saved to.
pub trait Generator: Send + Sync + 'static {
    /// Generates an alias of exactly `length` characters.
    ///
    /// Returns [`GeneratorError::InvalidLength`] when `length` is zero.
    fn generate(&self, length: usize) -> Result<Alias, GeneratorError>;
}
