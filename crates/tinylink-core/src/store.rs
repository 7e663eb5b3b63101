use crate::error::StoreError;
use crate::shortcode::ShortCode;
use crate::stats::DomainStat;

/// Result type for store lookups.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Shared storage for code/URL mappings, identifier issuance and domain
/// statistics.
///
/// Implementations must be safe to share across threads. Operations are
/// in-memory and never suspend, so the trait is synchronous.
pub trait Store: Send + Sync + 'static {
    /// Issues the next identifier. The first call returns `1` and no two
    /// calls ever return the same value.
    fn next_id(&self) -> u64;

    /// Records `code -> url` and `url -> code`, overwriting any previous
    /// association, and bumps the domain counter of `url`'s host.
    ///
    /// No existence check is performed; deduplication is up to the caller.
    fn save_mapping(&self, code: &ShortCode, url: &str);

    /// Returns the URL stored for `code`.
    fn get_url(&self, code: &ShortCode) -> Result<String>;

    /// Returns the code stored for the exact `url` string.
    fn get_code(&self, url: &str) -> Result<ShortCode>;

    /// Returns at most `limit` domains ranked by [`DomainStat::rank`].
    fn top_domains(&self, limit: usize) -> Vec<DomainStat>;
}
