use crate::alias::Alias;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Stores `target` under a freshly generated alias and returns the alias.
    ///
    /// Saving the same URL twice yields two distinct aliases.
    async fn save_url(&self, target: &str) -> Result<Alias>;

    /// Resolves an alias to the URL it was saved with.
    async fn get_url(&self, alias: &str) -> Result<String>;

    /// Deletes the record for an alias.
    async fn delete_url(&self, alias: &str) -> Result<()>;
}
