//! HTTP-specific error types for the Pardot API client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! No error is retried. Each one is surfaced to the caller as soon as it occurs.
//!
//! # Example
//!
//! ```rust,ignore
//! use pardot_api::clients::{HttpError, Transport};
//!
//! match client.get("account", None, QueryParams::new()).await {
//!     Ok(response) => println!("Account: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message field contains JSON with the `code` and `message` fields of
/// the Pardot error body when present, plus an `error_reference` entry when
/// the response carried a request id.
///
/// # Example
///
/// ```rust
/// use pardot_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"code":40,"message":"Invalid ID"}"#.to_string(),
///     error_reference: None,
/// };
///
/// assert!(error.to_string().contains("Invalid ID"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything is sent, for requests that could never be
/// well-formed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The object name is empty.
    #[error("Cannot send a request without an object name.")]
    EmptyObjectName,

    /// The object-relative path does not start with `/`.
    #[error("Invalid object path '{path}'. Object paths must start with '/'.")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },

    /// A body was attached to a method that does not accept one.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method of the request.
        method: String,
    },

    /// An explicit `Content-Type` header was combined with a multipart body.
    #[error("Cannot set Content-Type '{content_type}' on a multipart request.")]
    ConflictingContentType {
        /// The header value that was provided.
        content_type: String,
    },

    /// An extra header name or value cannot be encoded as an HTTP header.
    #[error("Invalid header '{name}'. Header names and values must be valid HTTP header text.")]
    InvalidHeader {
        /// The header name that was provided.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
