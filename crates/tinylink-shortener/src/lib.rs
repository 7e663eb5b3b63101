//! URL shortener service implementation.
//!
//! This crate provides the shortener service that applies URL validation
//! and deduplication on top of a [`Store`](tinylink_core::Store). Core types
//! are re-exported from `tinylink_core`.

pub mod service;

pub use service::ShortenerService;
pub use tinylink_core::{DomainStat, ShortCode, Shortener, ShortenerError};
