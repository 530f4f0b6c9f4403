//! HTTP response types for the Pardot API client.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the Pardot API.
///
/// The body is kept as the raw deserialized document. JSON responses are
/// parsed into the matching [`serde_json::Value`]; any other content (for
/// example the CSV returned by an import's error report) is kept verbatim as
/// a [`serde_json::Value::String`]. The undecoded bytes are kept alongside
/// and available from [`HttpResponse::bytes`].
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The response body.
    pub body: serde_json::Value,
    raw_body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
            raw_body: Vec::new(),
        }
    }

    /// Attaches the undecoded response body.
    #[must_use]
    pub fn with_raw_body(mut self, raw_body: Vec<u8>) -> Self {
        self.raw_body = raw_body;
        self
    }

    /// Returns the undecoded response body.
    ///
    /// Use this for non-JSON bodies that may not be UTF-8, such as an error
    /// report exported in another encoding. [`HttpResponse::text`] replaces
    /// invalid sequences.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.raw_body
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched by lowercase name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the body as text when the response was not JSON.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.body.as_str()
    }

    /// Deserializes the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the body does not match `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pardot_api::HttpResponse;
    /// use pardot_api::objects::{Import, ImportStatus};
    /// use std::collections::HashMap;
    /// use serde_json::json;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), json!({"id": 7, "status": "Open"}));
    /// let import: Import = response.json().unwrap();
    /// assert_eq!(import.status, Some(ImportStatus::Open));
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.body)
    }
}
