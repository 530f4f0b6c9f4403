//! # Pardot API Rust Client
//!
//! A Rust client for the Salesforce Pardot v5 REST API, covering the
//! `account` and `imports` objects.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PardotConfig`] and [`PardotConfigBuilder`]
//! - Validated newtypes for the access token, business unit id, and host
//! - An async HTTP client, [`HttpClient`], implementing the [`Transport`] seam
//! - Thin object wrappers, [`objects::Accounts`] and [`objects::Imports`],
//!   generic over any [`Transport`]
//!
//! Every wrapper method sends exactly one request and returns the raw
//! response. There is no retry, pagination, or caching, and the access token
//! is supplied by the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use pardot_api::{AccessToken, BusinessUnitId, PardotConfig};
//!
//! let config = PardotConfig::builder()
//!     .access_token(AccessToken::new("access-token").unwrap())
//!     .business_unit_id(BusinessUnitId::new("0Uv000000000001AAA").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Reading the Account
//!
//! ```rust,ignore
//! use pardot_api::{objects, HttpClient};
//! use pardot_api::clients::QueryParams;
//!
//! let client = HttpClient::new(&config)?;
//! let pardot = objects::load(&client);
//!
//! let response = pardot.accounts.read(QueryParams::new()).await?;
//! println!("Account: {}", response.body);
//! ```
//!
//! ## Importing Prospects
//!
//! ```rust,ignore
//! use pardot_api::objects::{Import, ImportStatus, Options};
//! use pardot_api::clients::QueryParams;
//! use std::path::Path;
//!
//! // Create, fill, and submit in one request
//! let created: Import = pardot
//!     .imports
//!     .create(Some(Path::new("prospects.csv")), Options::new())
//!     .await?
//!     .json()?;
//!
//! // Poll until processing is done
//! let id = created.id.unwrap();
//! let import: Import = pardot.imports.read(id, QueryParams::new()).await?.json()?;
//! if import.status == Some(ImportStatus::Complete) && import.error_count > Some(0) {
//!     let report = pardot.imports.download_errors(id, QueryParams::new()).await?;
//!     println!("{}", report.text().unwrap_or_default());
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: [`HttpClient`] and [`PardotConfig`] are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Testable**: Object wrappers depend on the [`Transport`] trait, not on `reqwest`

pub mod clients;
pub mod config;
pub mod error;
pub mod objects;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiVersion, BusinessUnitId, HostUrl, PardotConfig, PardotConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MultipartForm, QueryParams, RequestBody,
    Transport,
};

// Re-export object types
pub use objects::{Accounts, Imports, Objects, PardotError};
