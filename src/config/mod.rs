//! Configuration types for the Pardot API client.
//!
//! This module provides the configuration used to construct an
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`PardotConfig`]: The configuration struct holding all client settings
//! - [`PardotConfigBuilder`]: A builder for constructing [`PardotConfig`] instances
//! - [`AccessToken`]: A validated OAuth access token with masked debug output
//! - [`BusinessUnitId`]: A validated Pardot business unit id
//! - [`HostUrl`]: A validated Pardot API host
//! - [`ApiVersion`]: The Pardot API version to use
//!
//! # Example
//!
//! ```rust
//! use pardot_api::{AccessToken, BusinessUnitId, HostUrl, PardotConfig};
//!
//! let config = PardotConfig::builder()
//!     .access_token(AccessToken::new("access-token").unwrap())
//!     .business_unit_id(BusinessUnitId::new("0Uv000000000001AAA").unwrap())
//!     .host(HostUrl::new(HostUrl::DEMO).unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, BusinessUnitId, HostUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Pardot API client.
///
/// `PardotConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct PardotConfig {
    access_token: AccessToken,
    business_unit_id: BusinessUnitId,
    host: HostUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl PardotConfig {
    /// Creates a new builder for constructing a `PardotConfig`.
    #[must_use]
    pub fn builder() -> PardotConfigBuilder {
        PardotConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the business unit id.
    #[must_use]
    pub const fn business_unit_id(&self) -> &BusinessUnitId {
        &self.business_unit_id
    }

    /// Returns the API host.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PardotConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PardotConfig>();
};

/// Builder for constructing [`PardotConfig`] instances.
///
/// Required fields are `access_token` and `business_unit_id`.
///
/// # Defaults
///
/// - `host`: `https://pi.pardot.com`
/// - `api_version`: `v5`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct PardotConfigBuilder {
    access_token: Option<AccessToken>,
    business_unit_id: Option<BusinessUnitId>,
    host: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl PardotConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the business unit id (required).
    #[must_use]
    pub fn business_unit_id(mut self, id: BusinessUnitId) -> Self {
        self.business_unit_id = Some(id);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PardotConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` or
    /// `business_unit_id` are not set.
    pub fn build(self) -> Result<PardotConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;
        let business_unit_id = self
            .business_unit_id
            .ok_or(ConfigError::MissingRequiredField {
                field: "business_unit_id",
            })?;

        Ok(PardotConfig {
            access_token,
            business_unit_id,
            host: self.host.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
