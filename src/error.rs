//! Error types for the Pardot API client.
//!
//! This module contains the configuration and validation errors raised while
//! building a [`PardotConfig`](crate::PardotConfig).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Errors raised while talking to the API live in
//! [`clients`](crate::clients) and [`objects`](crate::objects).
//!
//! # Example
//!
//! ```rust
//! use pardot_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Salesforce OAuth access token.")]
    EmptyAccessToken,

    /// Business unit id is invalid.
    #[error("Invalid business unit id '{id}'. Expected a 15 or 18 character Salesforce id starting with '0Uv'.")]
    InvalidBusinessUnitId {
        /// The invalid id that was provided.
        id: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'v<number>' (e.g., 'v5').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://pi.pardot.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
