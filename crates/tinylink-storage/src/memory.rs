use crate::domain::extract_domain;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tinylink_core::store::{Result, Store};
use tinylink_core::{DomainStat, ShortCode, StoreError};
use tracing::trace;

#[derive(Debug, Default)]
struct Tables {
    code_to_url: HashMap<ShortCode, String>,
    url_to_code: HashMap<String, ShortCode>,
    domain_counts: HashMap<String, u64>,
}

/// In-memory implementation of the [`Store`] trait.
///
/// All three tables live behind a single `RwLock`, so a saved mapping is
/// visible through both directions at once and lookups run concurrently
/// with each other. The identifier counter is a separate atomic: issuing an
/// id never waits on table readers.
///
/// Nothing is ever evicted; memory grows with the number of distinct URLs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    counter: AtomicU64,
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates a new empty store. The first issued id is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of codes currently stored.
    pub fn len(&self) -> usize {
        self.tables.read().code_to_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Store for InMemoryStore {
    fn next_id(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn save_mapping(&self, code: &ShortCode, url: &str) {
        // Parse outside the lock; it is the most expensive part of a save.
        let domain = extract_domain(url);

        let mut tables = self.tables.write();
        tables.code_to_url.insert(code.clone(), url.to_owned());
        tables.url_to_code.insert(url.to_owned(), code.clone());
        if !domain.is_empty() {
            *tables.domain_counts.entry(domain).or_insert(0) += 1;
        }
        drop(tables);

        trace!(code = %code, url = %url, "saved mapping");
    }

    fn get_url(&self, code: &ShortCode) -> Result<String> {
        self.tables
            .read()
            .code_to_url
            .get(code)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(code.to_string()))
    }

    fn get_code(&self, url: &str) -> Result<ShortCode> {
        self.tables
            .read()
            .url_to_code
            .get(url)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(url.to_owned()))
    }

    fn top_domains(&self, limit: usize) -> Vec<DomainStat> {
        let mut stats: Vec<DomainStat> = self
            .tables
            .read()
            .domain_counts
            .iter()
            .map(|(domain, count)| DomainStat::new(domain.clone(), *count))
            .collect();

        stats.sort_unstable_by(DomainStat::rank);
        stats.truncate(limit);
        stats
    }
}
