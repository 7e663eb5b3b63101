//! Storage backends for the Tinylink URL shortener.

pub mod domain;
pub mod memory;

pub use domain::extract_domain;
pub use memory::InMemoryStore;
pub use tinylink_core::store::{Result, Store};
