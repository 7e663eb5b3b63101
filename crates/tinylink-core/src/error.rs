use thiserror::Error;

/// Errors returned by [`Store`](crate::store::Store) lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no mapping found for: {0}")]
    NotFound(String),
}

/// Errors related to the core functionality of the URL shortener service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("short code not found: {0}")]
    NotFound(String),
}

impl From<StoreError> for ShortenerError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(key) => Self::NotFound(key),
        }
    }
}
