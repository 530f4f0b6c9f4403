//! HTTP request types for the Pardot API client.
//!
//! This module provides the [`HttpRequest`] type and its builder, plus the
//! [`RequestBody`] and [`MultipartForm`] types that describe what a request
//! carries.

use std::collections::HashMap;
use std::fmt;

use reqwest::header::{HeaderName, HeaderValue};

use crate::clients::errors::InvalidHttpRequestError;

/// Query parameters attached to a request.
pub type QueryParams = HashMap<String, String>;

/// HTTP methods used by the Pardot v5 API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for reading resources.
    Get,
    /// HTTP POST method for creating resources and invoking actions.
    Post,
    /// HTTP PATCH method for partial updates.
    Patch,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// Multipart content type (`multipart/form-data`).
    Multipart,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    ///
    /// For multipart bodies the transport appends the boundary parameter.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Multipart => "multipart/form-data",
        }
    }
}

/// The content of a single multipart part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartContent {
    /// A plain text field.
    Text(String),
    /// A file upload.
    File {
        /// The file name reported in the part's `Content-Disposition`.
        file_name: String,
        /// The file contents.
        bytes: Vec<u8>,
    },
}

/// A named part of a multipart form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPart {
    /// The form field name.
    pub name: String,
    /// The part content.
    pub content: PartContent,
}

/// A multipart form body, held in memory until the request is sent.
///
/// # Example
///
/// ```rust
/// use pardot_api::clients::{MultipartForm, PartContent};
///
/// let form = MultipartForm::new()
///     .text("input", r#"{"operation":"Upsert"}"#)
///     .file("file", "prospects.csv", b"email\nalice@example.com\n".to_vec());
///
/// assert_eq!(form.parts().len(), 2);
/// assert!(matches!(form.get("file").map(|p| &p.content), Some(PartContent::File { .. })));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text part.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            content: PartContent::Text(value.into()),
        });
        self
    }

    /// Adds a file part.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            content: PartContent::File {
                file_name: file_name.into(),
                bytes,
            },
        });
        self
    }

    /// Returns all parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Returns the first part with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|part| part.name == name)
    }

    /// Returns the text value of the first part with the given name.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        match &self.get(name)?.content {
            PartContent::Text(value) => Some(value),
            PartContent::File { .. } => None,
        }
    }
}

impl From<MultipartForm> for reqwest::multipart::Form {
    fn from(form: MultipartForm) -> Self {
        form.parts
            .into_iter()
            .fold(Self::new(), |acc, part| match part.content {
                PartContent::Text(value) => acc.text(part.name, value),
                PartContent::File { file_name, bytes } => acc.part(
                    part.name,
                    reqwest::multipart::Part::bytes(bytes).file_name(file_name),
                ),
            })
    }
}

/// The body of a request.
///
/// A request carries at most one of a JSON document or a multipart form.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// A JSON document.
    Json(serde_json::Value),
    /// A multipart form.
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Returns `true` if there is no body.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the content type implied by this body, if any.
    #[must_use]
    pub const fn data_type(&self) -> Option<DataType> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some(DataType::Json),
            Self::Multipart(_) => Some(DataType::Multipart),
        }
    }

    /// Returns the JSON document, if this is a JSON body.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the form, if this is a multipart body.
    #[must_use]
    pub const fn as_multipart(&self) -> Option<&MultipartForm> {
        match self {
            Self::Multipart(form) => Some(form),
            _ => None,
        }
    }
}

/// An HTTP request against a Pardot object.
///
/// The request is addressed by an object name (`account`, `imports`) and an
/// optional object-relative path (`/42/batches`).
///
/// # Example
///
/// ```rust
/// use pardot_api::clients::{HttpMethod, HttpRequest, RequestBody};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Patch, "imports")
///     .path("/7")
///     .body(RequestBody::Json(json!({"status": "Ready"})))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.relative_path(), "imports/7");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The object name (e.g., "imports").
    pub object_name: String,
    /// The object-relative path, if any (e.g., "/42/batches").
    pub path: Option<String>,
    /// Query parameters to append to the URL.
    pub query: QueryParams,
    /// Additional headers to include in the request.
    pub extra_headers: HashMap<String, String>,
    /// The request body.
    pub body: RequestBody,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, object_name: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, object_name)
    }

    /// Returns the path relative to the objects root, e.g. `imports/42/batches`.
    #[must_use]
    pub fn relative_path(&self) -> String {
        format!("{}{}", self.object_name, self.path.as_deref().unwrap_or(""))
    }

    /// Returns the value of an extra header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.extra_headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `object_name` is empty
    /// - `path` is set but does not start with `/`
    /// - `http_method` is `Get` and a body is attached
    /// - an extra header name or value is not valid HTTP header text
    /// - the body is multipart and an explicit `Content-Type` header is set
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.object_name.trim().is_empty() {
            return Err(InvalidHttpRequestError::EmptyObjectName);
        }

        if let Some(path) = &self.path {
            if !path.starts_with('/') {
                return Err(InvalidHttpRequestError::InvalidPath { path: path.clone() });
            }
        }

        if self.http_method == HttpMethod::Get && !self.body.is_empty() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        for (name, value) in &self.extra_headers {
            if HeaderName::from_bytes(name.as_bytes()).is_err()
                || HeaderValue::from_str(value).is_err()
            {
                return Err(InvalidHttpRequestError::InvalidHeader { name: name.clone() });
            }
        }

        if matches!(self.body, RequestBody::Multipart(_)) {
            if let Some(content_type) = self.header("Content-Type") {
                return Err(InvalidHttpRequestError::ConflictingContentType {
                    content_type: content_type.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    object_name: String,
    path: Option<String>,
    query: QueryParams,
    extra_headers: HashMap<String, String>,
    body: RequestBody,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, object_name: impl Into<String>) -> Self {
        Self {
            http_method: method,
            object_name: object_name.into(),
            path: None,
            query: QueryParams::new(),
            extra_headers: HashMap::new(),
            body: RequestBody::Empty,
        }
    }

    /// Sets the object-relative path (must start with `/`).
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = headers;
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(key.into(), value.into());
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            object_name: self.object_name,
            path: self.path,
            query: self.query,
            extra_headers: self.extra_headers,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
