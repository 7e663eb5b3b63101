use crate::base62;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A short code identifying a shortened URL.
///
/// Generated codes come from [`ShortCode::from_id`]. Codes received from
/// clients are wrapped as-is with [`ShortCode::new`]; an unknown code is a
/// lookup miss, not a validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(SmolStr);

impl ShortCode {
    /// Creates a `ShortCode` by base62-encoding a numeric identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinylink_core::ShortCode;
    ///
    /// assert_eq!(ShortCode::from_id(62).as_str(), "10");
    /// assert_eq!(ShortCode::from_id(1000).as_str(), "g8");
    /// ```
    pub fn from_id(id: u64) -> Self {
        Self(SmolStr::new(base62::encode(id)))
    }

    /// Wraps an arbitrary string as a short code.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(SmolStr::new(code))
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
