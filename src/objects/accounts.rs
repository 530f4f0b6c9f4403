//! Account object.
//!
//! The `account` object holds the Pardot account of the authenticated user.
//! It is a read-only singleton: there is no id and no collection.
//!
//! Field reference:
//! <https://developer.salesforce.com/docs/marketing/pardot/guide/account-v5.html>
//!
//! # Example
//!
//! ```rust,ignore
//! use pardot_api::objects::Accounts;
//! use pardot_api::clients::QueryParams;
//!
//! let accounts = Accounts::new(&client);
//!
//! let mut params = QueryParams::new();
//! params.insert("fields".to_string(), "id,company,level".to_string());
//!
//! let response = accounts.read(params).await?;
//! println!("Account: {}", response.body);
//! ```

use crate::clients::{HttpResponse, QueryParams, Transport};
use crate::objects::PardotError;

/// Wrapper for the `account` object.
#[derive(Debug)]
pub struct Accounts<'a, T: Transport> {
    client: &'a T,
}

impl<'a, T: Transport> Accounts<'a, T> {
    /// The object name used in request URLs.
    pub const OBJECT_NAME: &'static str = "account";

    /// Creates a wrapper sending requests through `client`.
    #[must_use]
    pub const fn new(client: &'a T) -> Self {
        Self { client }
    }

    /// Returns the account of the currently authenticated user.
    ///
    /// `params` are sent verbatim as query parameters (typically `fields`).
    ///
    /// # Errors
    ///
    /// Returns [`PardotError::Http`] for any transport error.
    pub async fn read(&self, params: QueryParams) -> Result<HttpResponse, PardotError> {
        self.get(None, params).await
    }

    async fn get(
        &self,
        path: Option<&str>,
        params: QueryParams,
    ) -> Result<HttpResponse, PardotError> {
        Ok(self.client.get(Self::OBJECT_NAME, path, params).await?)
    }
}
