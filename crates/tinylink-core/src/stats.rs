use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of shortened URLs recorded for a single domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainStat {
    /// Host component of the shortened URLs.
    pub domain: String,
    /// How many distinct mappings were saved for this host.
    pub count: u64,
}

impl DomainStat {
    pub fn new(domain: impl Into<String>, count: u64) -> Self {
        Self {
            domain: domain.into(),
            count,
        }
    }

    /// Ranking order: higher count first, then domain name ascending.
    pub fn rank(a: &Self, b: &Self) -> Ordering {
        b.count
            .cmp(&a.count)
            .then_with(|| a.domain.cmp(&b.domain))
    }
}
