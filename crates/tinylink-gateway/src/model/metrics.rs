use serde::{Deserialize, Serialize};
use tinylink_core::DomainStat;

/// Number of domains reported when the client does not ask for a limit.
pub const DEFAULT_TOP_DOMAINS: usize = 3;

#[derive(Debug, Default, Deserialize)]
pub struct MetricsQuery {
    pub limit: Option<usize>,
}

impl MetricsQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_TOP_DOMAINS)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub top_domains: Vec<DomainStatResponse>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainStatResponse {
    pub domain: String,
    pub count: u64,
}

impl From<DomainStat> for DomainStatResponse {
    fn from(value: DomainStat) -> Self {
        Self {
            domain: value.domain,
            count: value.count,
        }
    }
}
