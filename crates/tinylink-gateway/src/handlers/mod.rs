mod health;
mod metrics;
mod url;

pub use health::{health_handler, liveness_handler};
pub use metrics::metrics_handler;
pub use url::{resolve_handler, shorten_handler};
