//! Core types and traits for the Tinylink URL shortener.
//!
//! This crate provides the short code encoding, the storage and shortener
//! contracts, and the error types shared by the storage backend, the
//! shortener service and the HTTP gateway.

pub mod base62;
pub mod error;
pub mod shortcode;
pub mod shortener;
pub mod stats;
pub mod store;

pub use error::{ShortenerError, StoreError};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
pub use stats::DomainStat;
pub use store::Store;
