//! Error type returned by the Pardot object wrappers.
//!
//! - [`PardotError::File`]: An upload file could not be opened or read
//! - [`PardotError::Http`]: Wraps any [`HttpError`] from the transport
//! - [`PardotError::Serialization`]: A request document could not be encoded
//!
//! # Example
//!
//! ```rust,ignore
//! use pardot_api::objects::PardotError;
//!
//! match imports.add_batch(42, "prospects.csv".as_ref(), QueryParams::new()).await {
//!     Ok(response) => println!("Batch added: {}", response.body),
//!     Err(PardotError::File { path, source }) => {
//!         println!("Cannot read {}: {source}", path.display());
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for Pardot object operations.
#[derive(Debug, Error)]
pub enum PardotError {
    /// An upload file could not be opened or read.
    ///
    /// Raised before any request is sent.
    #[error("Failed to read upload file '{}': {source}", path.display())]
    File {
        /// The path that was provided.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A request document could not be serialized.
    #[error("Failed to serialize request: {0}")]
    Serialization(#[from] serde_json::Error),
}
