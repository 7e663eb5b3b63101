use async_trait::async_trait;
use std::sync::Arc;
use tinylink_core::{DomainStat, ShortCode, Shortener, ShortenerError, Store};
use tracing::{debug, trace};
use url::Url;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Store` to handle:
/// - URL validation
/// - Deduplication of previously shortened URLs
/// - Identifier allocation and base62 encoding
///
/// Note: the duplicate check and the insert are two separate store
/// operations. Two concurrent first-time calls with the same URL can both
/// miss the check and receive different codes; both codes stay valid and
/// resolve to the URL. Sequential callers always get the same code back.
#[derive(Debug)]
pub struct ShortenerService<S> {
    store: Arc<S>,
}

impl<S> Clone for ShortenerService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store> ShortenerService<S> {
    /// Creates a new `ShortenerService` owning the given store.
    pub fn new(store: S) -> Self {
        Self::with_shared_store(Arc::new(store))
    }

    /// Creates a new `ShortenerService` over a store that is also held elsewhere.
    pub fn with_shared_store(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Validates that the URL is absolute, uses http or https, and has a host.
    ///
    /// The scheme is compared against the input exactly as written.
    fn validate_url(url: &str) -> Result<(), ShortenerError> {
        if url.is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }

        // The parser silently strips or drops these; the input must already
        // be a URL as written.
        if url.chars().any(|c| c.is_ascii_whitespace() || c.is_ascii_control()) {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must not contain whitespace or control characters: {:?}",
                url
            )));
        }

        let Some((scheme, rest)) = url.split_once("://") else {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must have a scheme and host: {}",
                url
            )));
        };

        if !ALLOWED_SCHEMES.contains(&scheme) {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL scheme must be http or https: {}",
                scheme
            )));
        }

        if rest.is_empty() {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must have a host: {}",
                url
            )));
        }

        let parsed =
            Url::parse(url).map_err(|e| ShortenerError::InvalidUrl(format!("{}: {}", e, url)))?;

        if matches!(parsed.host_str(), None | Some("")) {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must have a host: {}",
                url
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl<S: Store> Shortener for ShortenerService<S> {
    async fn shorten(&self, long_url: &str) -> Result<ShortCode, ShortenerError> {
        Self::validate_url(long_url)?;

        if let Ok(code) = self.store.get_code(long_url) {
            trace!(code = %code, url = %long_url, "URL already shortened");
            return Ok(code);
        }

        let id = self.store.next_id();
        let code = ShortCode::from_id(id);
        self.store.save_mapping(&code, long_url);

        debug!(id, code = %code, url = %long_url, "Shortened URL");
        Ok(code)
    }

    async fn resolve(&self, code: &ShortCode) -> Result<String, ShortenerError> {
        trace!(code = %code, "resolving short code");

        let url = self.store.get_url(code)?;
        debug!(code = %code, url = %url, "Resolved short code");
        Ok(url)
    }

    async fn top_domains(&self, limit: usize) -> Vec<DomainStat> {
        self.store.top_domains(limit)
    }
}
