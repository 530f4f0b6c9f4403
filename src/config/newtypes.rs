//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Salesforce OAuth access token.
///
/// The token is obtained by the caller (this crate does not perform any
/// OAuth flow) and is sent as a bearer token on every request.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use pardot_api::AccessToken;
///
/// let token = AccessToken::new("00D...!AQ").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated Pardot business unit id.
///
/// Every Pardot v5 request carries the `Pardot-Business-Unit-Id` header.
/// Business unit ids are Salesforce ids with the `0Uv` key prefix, in either
/// the 15 character or the 18 character form.
///
/// # Example
///
/// ```rust
/// use pardot_api::BusinessUnitId;
///
/// let id = BusinessUnitId::new("0Uv000000000001AAA").unwrap();
/// assert_eq!(id.as_ref(), "0Uv000000000001AAA");
///
/// assert!(BusinessUnitId::new("001000000000001AAA").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BusinessUnitId(String);

impl BusinessUnitId {
    const KEY_PREFIX: &'static str = "0Uv";

    /// Creates a new validated business unit id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBusinessUnitId`] if the id has the wrong
    /// length, key prefix, or contains non-alphanumeric characters.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();

        let valid = matches!(id.len(), 15 | 18)
            && id.starts_with(Self::KEY_PREFIX)
            && id.chars().all(|c| c.is_ascii_alphanumeric());

        if !valid {
            return Err(ConfigError::InvalidBusinessUnitId { id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for BusinessUnitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BusinessUnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BusinessUnitId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BusinessUnitId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Pardot API host URL.
///
/// Production accounts use `https://pi.pardot.com`, developer and sandbox
/// accounts use `https://pi.demo.pardot.com`. Any trailing slash is removed
/// so the value can be joined with request paths directly.
///
/// # Example
///
/// ```rust
/// use pardot_api::HostUrl;
///
/// let url = HostUrl::new("https://pi.demo.pardot.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://pi.demo.pardot.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "pi.demo.pardot.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl HostUrl {
    /// The production Pardot host.
    pub const PRODUCTION: &'static str = "https://pi.pardot.com";

    /// The Pardot host for developer and sandbox accounts.
    pub const DEMO: &'static str = "https://pi.demo.pardot.com";

    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the production host, `https://pi.pardot.com`.
    #[must_use]
    pub fn production() -> Self {
        Self {
            url: Self::PRODUCTION.to_string(),
            scheme_end: 5,
            host_end: Self::PRODUCTION.len(),
        }
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl Default for HostUrl {
    fn default() -> Self {
        Self::production()
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
