use crate::error::ShortenerError;
use crate::shortcode::ShortCode;
use crate::stats::DomainStat;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens `long_url` and returns its short code.
    ///
    /// Returns the existing code when the exact same URL was shortened
    /// before, and `Err(InvalidUrl)` when the URL is not an absolute
    /// http(s) URL with a host.
    async fn shorten(&self, long_url: &str) -> Result<ShortCode>;

    /// Resolves a short code to the original URL.
    /// Returns `Err(NotFound)` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<String>;

    /// Returns the most frequently shortened domains, at most `limit` of them.
    async fn top_domains(&self, limit: usize) -> Vec<DomainStat>;
}
