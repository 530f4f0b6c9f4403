//! HTTP client types for Pardot API communication.
//!
//! This module provides the transport layer the resource wrappers in
//! [`objects`](crate::objects) are built on.
//!
//! # Overview
//!
//! - [`Transport`]: The `get`/`post`/`patch` capability resource wrappers depend on
//! - [`HttpClient`]: The `reqwest`-backed [`Transport`] implementation
//! - [`HttpRequest`]: A request against a Pardot object
//! - [`RequestBody`]: Empty, JSON, or multipart request body
//! - [`MultipartForm`]: In-memory multipart form with text and file parts
//! - [`HttpResponse`]: A response with its raw deserialized body
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH)
//!
//! # Example
//!
//! ```rust,ignore
//! use pardot_api::clients::{HttpClient, QueryParams, Transport};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let mut params = QueryParams::new();
//! params.insert("fields".to_string(), "id,company".to_string());
//!
//! let response = client.get("account", None, params).await?;
//! println!("{}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! None. Every call sends exactly one request and surfaces any failure
//! immediately. Wrap [`HttpClient`] in your own [`Transport`] to add a policy.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, BUSINESS_UNIT_HEADER, SDK_VERSION};
pub use http_request::{
    DataType, FormPart, HttpMethod, HttpRequest, HttpRequestBuilder, MultipartForm, PartContent,
    QueryParams, RequestBody,
};
pub use http_response::HttpResponse;
pub use transport::Transport;
