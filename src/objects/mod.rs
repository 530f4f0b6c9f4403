//! Pardot v5 object wrappers.
//!
//! Each wrapper maps method calls one-to-one onto HTTP requests against a
//! single Pardot object and returns the raw [`HttpResponse`](crate::HttpResponse).
//!
//! # Overview
//!
//! - [`Accounts`]: the `account` object of the authenticated user
//! - [`Imports`]: the asynchronous bulk `imports` object
//! - [`load`]: attaches every wrapper to a shared [`Transport`]
//! - [`Import`], [`ImportStatus`], [`ImportInput`]: optional typed views
//! - [`PardotError`]: error type returned by every wrapper method
//!
//! # Example
//!
//! ```rust,ignore
//! use pardot_api::objects;
//! use pardot_api::clients::QueryParams;
//!
//! let client = HttpClient::new(&config)?;
//! let pardot = objects::load(&client);
//!
//! let account = pardot.accounts.read(QueryParams::new()).await?;
//! let imports = pardot.imports.query(QueryParams::new()).await?;
//! ```

mod accounts;
mod errors;
mod imports;
mod models;
mod upload;

pub use accounts::Accounts;
pub use errors::PardotError;
pub use imports::{Imports, DEFAULT_QUERY_FIELDS, DEFAULT_READ_FIELDS};
pub use models::{Import, ImportInput, ImportStatus};

use crate::clients::Transport;

/// Keyword options sent as a JSON object body.
pub type Options = serde_json::Map<String, serde_json::Value>;

/// Every object wrapper, sharing one transport.
#[derive(Debug)]
pub struct Objects<'a, T: Transport> {
    /// The `account` object.
    pub accounts: Accounts<'a, T>,
    /// The `imports` object.
    pub imports: Imports<'a, T>,
}

/// Attaches every object wrapper to `client`.
#[must_use]
pub const fn load<T: Transport>(client: &T) -> Objects<'_, T> {
    Objects {
        accounts: Accounts::new(client),
        imports: Imports::new(client),
    }
}
