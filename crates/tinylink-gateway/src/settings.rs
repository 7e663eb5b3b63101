use crate::cli::Cli;
use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;
use tinylink_telemetry::LogFormat;
use typed_builder::TypedBuilder;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BASE_URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// Resolved runtime configuration of the gateway.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct Settings {
    pub port: u16,
    /// Prefix of every returned short link, without trailing slash.
    #[builder(setter(into))]
    pub base_url: String,
    #[builder(default)]
    pub log_format: LogFormat,
}

impl Settings {
    /// Address the HTTP server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl TryFrom<Cli> for Settings {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let base_url = cli
            .base_url
            .unwrap_or_else(|| format!("http://localhost:{}", cli.port));

        validate_base_url(&base_url)?;

        Ok(Settings::builder()
            .port(cli.port)
            .base_url(base_url.trim_end_matches('/'))
            .log_format(cli.log_format.into())
            .build())
    }
}

fn validate_base_url(value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: value.to_owned(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("must be an absolute URL with a path".to_owned()));
    }

    Ok(())
}
