//! Import object.
//!
//! Imports are asynchronous bulk jobs that upsert prospects from CSV files.
//! The server owns the lifecycle; this wrapper only requests transitions and
//! reads state back.
//!
//! # Lifecycle
//!
//! 1. [`Imports::create`] without a file opens an import (status `Open`).
//! 2. [`Imports::add_batch`] attaches one CSV file per call while `Open`.
//! 3. [`Imports::update`] with `{"status": "Ready"}` submits it.
//! 4. [`Imports::read`] polls status and counts until the import completes.
//! 5. [`Imports::download_errors`] fetches the error report.
//!
//! [`Imports::create`] with a file does steps 1 to 3 in a single request.
//! [`Imports::cancel`] stops an import that has not completed or failed.
//!
//! Import ids are percent-encoded into a single path segment, so an id
//! containing `/` or `?` cannot change the target URL.
//!
//! Reference: <https://developer.salesforce.com/docs/marketing/pardot/guide/import-v5.html>
//!
//! # Example
//!
//! ```rust,ignore
//! use pardot_api::objects::{Import, Imports, Options};
//! use pardot_api::clients::QueryParams;
//! use serde_json::json;
//!
//! let imports = Imports::new(&client);
//!
//! let mut options = Options::new();
//! options.insert("operation".to_string(), json!("Upsert"));
//! options.insert("object".to_string(), json!("Prospect"));
//! let created: Import = imports.create(None, options).await?.json()?;
//! let id = created.id.unwrap();
//!
//! imports.add_batch(id, "prospects.csv".as_ref(), QueryParams::new()).await?;
//!
//! let mut submit = Options::new();
//! submit.insert("status".to_string(), json!("Ready"));
//! imports.update(id, submit).await?;
//!
//! let import: Import = imports.read(id, QueryParams::new()).await?.json()?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;

use crate::clients::{DataType, HttpResponse, MultipartForm, QueryParams, RequestBody, Transport};
use crate::objects::models::ImportInput;
use crate::objects::upload::read_upload;
use crate::objects::{Options, PardotError};

/// Fields requested by [`Imports::read`] when the caller does not choose any.
pub const DEFAULT_READ_FIELDS: &str =
    "id,isExpired,status,createdCount,updatedCount,errorsRef,errorCount";

/// Fields requested by [`Imports::query`] when the caller does not choose any.
pub const DEFAULT_QUERY_FIELDS: &str = "id,createdAt,updatedAt,status";

/// Multipart part name carrying the CSV file.
const FILE_PART: &str = "file";

/// Multipart part name carrying the JSON-encoded [`ImportInput`].
const INPUT_PART: &str = "input";

/// Wrapper for the `imports` object.
#[derive(Debug)]
pub struct Imports<'a, T: Transport> {
    client: &'a T,
}

impl<'a, T: Transport> Imports<'a, T> {
    /// The object name used in request URLs.
    pub const OBJECT_NAME: &'static str = "imports";

    /// Creates a wrapper sending requests through `client`.
    #[must_use]
    pub const fn new(client: &'a T) -> Self {
        Self { client }
    }

    /// Creates a new import.
    ///
    /// Without a file, `options` are sent as the JSON body. The import is
    /// created `Open` (unless `options` say otherwise) and batches are added
    /// with [`Imports::add_batch`].
    ///
    /// With a file, the request is multipart: an `input` part holding the
    /// JSON of [`ImportInput::default`] and a `file` part holding the CSV.
    /// `options` are not used in this mode and a warning is logged if any
    /// were given.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError::File`] if the file cannot be read (no request
    /// is sent), [`PardotError::Serialization`] if the input document cannot
    /// be encoded, or [`PardotError::Http`] for any transport error.
    pub async fn create(
        &self,
        file: Option<&Path>,
        options: Options,
    ) -> Result<HttpResponse, PardotError> {
        let Some(file) = file else {
            return self
                .post(
                    None,
                    QueryParams::new(),
                    json_headers(),
                    RequestBody::Json(serde_json::Value::Object(options)),
                )
                .await;
        };

        if !options.is_empty() {
            tracing::warn!(
                "Ignoring import options {:?} when creating an import from {}",
                options.keys().collect::<Vec<_>>(),
                file.display()
            );
        }

        let upload = read_upload(file).await?;
        let input = serde_json::to_string(&ImportInput::default())?;
        let form = MultipartForm::new()
            .text(INPUT_PART, input)
            .file(FILE_PART, upload.file_name, upload.bytes);

        self.post(
            None,
            QueryParams::new(),
            HashMap::new(),
            RequestBody::Multipart(form),
        )
        .await
    }

    /// Adds a batch of data to an `Open` import.
    ///
    /// The CSV file must contain a header row. `params` are sent as query
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError::File`] if the file cannot be read (no request
    /// is sent), or [`PardotError::Http`] for any transport error.
    pub async fn add_batch(
        &self,
        id: impl Display,
        file: &Path,
        params: QueryParams,
    ) -> Result<HttpResponse, PardotError> {
        let upload = read_upload(file).await?;
        let form = MultipartForm::new().file(FILE_PART, upload.file_name, upload.bytes);

        self.post(
            Some(&id_path(id, "/batches")),
            params,
            HashMap::new(),
            RequestBody::Multipart(form),
        )
        .await
    }

    /// Updates an import, sending `options` as the JSON body.
    ///
    /// Used to submit an import by setting its status to `Ready`; the caller
    /// supplies that value. Once submitted, no more batches can be added and
    /// processing begins.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError::Http`] for any transport error.
    pub async fn update(
        &self,
        id: impl Display,
        options: Options,
    ) -> Result<HttpResponse, PardotError> {
        Ok(self
            .client
            .patch(
                Self::OBJECT_NAME,
                Some(&id_path(id, "")),
                QueryParams::new(),
                json_headers(),
                RequestBody::Json(serde_json::Value::Object(options)),
            )
            .await?)
    }

    /// Returns the current state of an import.
    ///
    /// If `params` has no `fields` entry, [`DEFAULT_READ_FIELDS`] is
    /// requested. A caller-supplied `fields` is sent unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError::Http`] for any transport error.
    pub async fn read(
        &self,
        id: impl Display,
        params: QueryParams,
    ) -> Result<HttpResponse, PardotError> {
        let params = with_default_fields(params, DEFAULT_READ_FIELDS);
        self.get(Some(&id_path(id, "")), params).await
    }

    /// Lists imports and their status.
    ///
    /// Requires the "Admin > Imports > View" ability. If `params` has no
    /// `fields` entry, [`DEFAULT_QUERY_FIELDS`] is requested.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError::Http`] for any transport error.
    pub async fn query(&self, params: QueryParams) -> Result<HttpResponse, PardotError> {
        let params = with_default_fields(params, DEFAULT_QUERY_FIELDS);
        self.get(None, params).await
    }

    /// Downloads the error report of a completed import.
    ///
    /// The report is CSV, so the response body is a string.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError::Http`] for any transport error.
    pub async fn download_errors(
        &self,
        id: impl Display,
        params: QueryParams,
    ) -> Result<HttpResponse, PardotError> {
        self.get(Some(&id_path(id, "/errors")), params).await
    }

    /// Cancels an import.
    ///
    /// Imports that already completed or failed cannot be canceled; the
    /// server rejects the request.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError::Http`] for any transport error.
    pub async fn cancel(
        &self,
        id: impl Display,
        params: QueryParams,
    ) -> Result<HttpResponse, PardotError> {
        self.post(
            Some(&id_path(id, "/do/cancel")),
            params,
            json_headers(),
            RequestBody::Empty,
        )
        .await
    }

    async fn get(
        &self,
        path: Option<&str>,
        params: QueryParams,
    ) -> Result<HttpResponse, PardotError> {
        Ok(self.client.get(Self::OBJECT_NAME, path, params).await?)
    }

    async fn post(
        &self,
        path: Option<&str>,
        params: QueryParams,
        headers: HashMap<String, String>,
        body: RequestBody,
    ) -> Result<HttpResponse, PardotError> {
        Ok(self
            .client
            .post(Self::OBJECT_NAME, path, params, headers, body)
            .await?)
    }
}

fn json_headers() -> HashMap<String, String> {
    HashMap::from([(
        "Content-Type".to_string(),
        DataType::Json.as_content_type().to_string(),
    )])
}

/// Builds `/{id}{suffix}` with `id` percent-encoded as a single path segment.
fn id_path(id: impl Display, suffix: &str) -> String {
    format!("/{}{suffix}", urlencoding::encode(&id.to_string()))
}

fn with_default_fields(mut params: QueryParams, default: &str) -> QueryParams {
    params
        .entry("fields".to_string())
        .or_insert_with(|| default.to_string());
    params
}
