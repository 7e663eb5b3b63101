mod health;
mod metrics;
mod url;

pub use health::HealthResponse;
pub use metrics::{DomainStatResponse, MetricsQuery, MetricsResponse};
pub use url::{ShortenRequest, ShortenResponse};
