//! Pardot API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Pardot API version.
///
/// Only v5 exposes the `imports` object this crate wraps. A `Custom`
/// variant is kept for versions released after this crate.
///
/// # Example
///
/// ```rust
/// use pardot_api::ApiVersion;
///
/// let version: ApiVersion = "v5".parse().unwrap();
/// assert_eq!(version, ApiVersion::V5);
/// assert_eq!(format!("{}", ApiVersion::latest()), "v5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 5.
    V5,
    /// Custom version string (e.g., `v6`).
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest known API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V5
    }

    fn is_valid_version_format(s: &str) -> bool {
        s.strip_prefix('v')
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V5 => f.write_str("v5"),
            Self::Custom(version) => f.write_str(version),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "v5" => Ok(Self::V5),
            other if Self::is_valid_version_format(other) => Ok(Self::Custom(other.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
