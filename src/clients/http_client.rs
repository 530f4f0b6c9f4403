//! HTTP client for Pardot API communication.
//!
//! This module provides the [`HttpClient`] type, the `reqwest`-backed
//! [`Transport`] implementation.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::PardotConfig;

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the Pardot business unit id.
pub const BUSINESS_UNIT_HEADER: &str = "Pardot-Business-Unit-Id";

/// HTTP client for making requests to the Pardot API.
///
/// The client handles:
/// - Base URI construction from the configured host and API version
/// - Default headers: `Authorization`, `Pardot-Business-Unit-Id`, `User-Agent`
/// - JSON and multipart body encoding
/// - Mapping non-2xx responses to [`HttpError::Response`]
///
/// It sends each request exactly once. There is no retry, throttling, or
/// pagination.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use pardot_api::{AccessToken, BusinessUnitId, HttpClient, PardotConfig};
/// use pardot_api::clients::{QueryParams, Transport};
///
/// let config = PardotConfig::builder()
///     .access_token(AccessToken::new("access-token")?)
///     .business_unit_id(BusinessUnitId::new("0Uv000000000001AAA")?)
///     .build()?;
///
/// let client = HttpClient::new(&config)?;
/// let response = client.get("account", None, QueryParams::new()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://pi.pardot.com`).
    base_uri: String,
    /// Base path (e.g., `/api/v5/objects`).
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &PardotConfig) -> Result<Self, HttpError> {
        let base_uri = config.host().as_ref().to_string();
        let base_path = format!("/api/{}/objects", config.api_version());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Pardot API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.access_token().as_ref()),
        );
        default_headers.insert(
            BUSINESS_UNIT_HEADER.to_string(),
            config.business_unit_id().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request would be sent to, without query string.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            request.relative_path()
        )
    }

    /// Sends an HTTP request to the Pardot API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);

        let mut headers = self.default_headers.clone();
        if let RequestBody::Json(_) = &request.body {
            headers.insert(
                "Content-Type".to_string(),
                crate::clients::DataType::Json.as_content_type().to_string(),
            );
        }
        for (key, value) in &request.extra_headers {
            headers.insert(key.clone(), value.clone());
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        req_builder = match request.body {
            RequestBody::Empty => req_builder,
            RequestBody::Json(value) => req_builder.body(value.to_string()),
            RequestBody::Multipart(form) => req_builder.multipart(form.into()),
        };

        tracing::debug!("Sending {} request to Pardot API at {}", request.http_method, url);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let raw_body = res.bytes().await?.to_vec();
        let body = Self::parse_body(&res_headers, String::from_utf8_lossy(&raw_body).into_owned());

        let response = HttpResponse::new(code, res_headers, body).with_raw_body(raw_body);

        tracing::debug!("Pardot API responded with status {} for {}", code, url);

        if response.is_ok() {
            return Ok(response);
        }

        let error_message = Self::serialize_error(&response);
        tracing::warn!(
            "Request to Pardot API at {} failed with status {}: {}",
            url,
            code,
            error_message
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: error_message,
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Parses the body as JSON when the response declares (or omits) a JSON
    /// content type; anything else is kept as text.
    fn parse_body(headers: &HashMap<String, Vec<String>>, body_text: String) -> serde_json::Value {
        if body_text.is_empty() {
            return serde_json::json!({});
        }

        let is_json = headers
            .get("content-type")
            .and_then(|values| values.first())
            .map_or(true, |content_type| content_type.contains("json"));

        if is_json {
            serde_json::from_str(&body_text).unwrap_or(serde_json::Value::String(body_text))
        } else {
            serde_json::Value::String(body_text)
        }
    }

    /// Serializes a Pardot error response to a JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(code) = response.body.get("code") {
            error_body.insert("code".to_string(), code.clone());
        }
        if let Some(message) = response.body.get("message") {
            error_body.insert("message".to_string(), message.clone());
        }
        if error_body.is_empty() {
            if let Some(text) = response.text() {
                error_body.insert("message".to_string(), serde_json::json!(text));
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Transport for HttpClient {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, BusinessUnitId, HostUrl};
    use serde_json::json;

    fn create_test_config() -> PardotConfig {
        PardotConfig::builder()
            .access_token(AccessToken::new("test-access-token").unwrap())
            .business_unit_id(BusinessUnitId::new("0Uv000000000001AAA").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_default_host() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(client.base_uri(), "https://pi.pardot.com");
        assert_eq!(client.base_path(), "/api/v5/objects");
    }

    #[test]
    fn test_client_construction_with_demo_host() {
        let config = PardotConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .business_unit_id(BusinessUnitId::new("0Uv000000000001AAA").unwrap())
            .host(HostUrl::new(HostUrl::DEMO).unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.base_uri(), "https://pi.demo.pardot.com");
    }

    #[test]
    fn test_authorization_and_business_unit_headers() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-access-token".to_string())
        );
        assert_eq!(
            client.default_headers().get(BUSINESS_UNIT_HEADER),
            Some(&"0Uv000000000001AAA".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Pardot API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = PardotConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .business_unit_id(BusinessUnitId::new("0Uv000000000001AAA").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_url_for_joins_object_and_path() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let request = HttpRequest::builder(HttpMethod::Post, "imports")
            .path("/42/batches")
            .build()
            .unwrap();

        assert_eq!(
            client.url_for(&request),
            "https://pi.pardot.com/api/v5/objects/imports/42/batches"
        );
    }

    #[test]
    fn test_parse_body_keeps_non_json_as_text() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), vec!["text/csv".to_string()]);

        let body = HttpClient::parse_body(&headers, "123".to_string());
        assert_eq!(body, json!("123"));
    }

    #[test]
    fn test_parse_body_parses_json() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json; charset=utf-8".to_string()],
        );

        let body = HttpClient::parse_body(&headers, r#"{"id":7}"#.to_string());
        assert_eq!(body, json!({"id": 7}));
        assert_eq!(
            HttpClient::parse_body(&headers, String::new()),
            json!({})
        );
    }

    #[test]
    fn test_serialize_error_uses_pardot_error_fields() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
        let response = HttpResponse::new(
            400,
            headers,
            json!({"code": 66, "message": "Invalid value", "extra": true}),
        );

        let message: serde_json::Value =
            serde_json::from_str(&HttpClient::serialize_error(&response)).unwrap();
        assert_eq!(message["code"], json!(66));
        assert_eq!(message["message"], json!("Invalid value"));
        assert!(message.get("extra").is_none());
        assert!(message["error_reference"]
            .as_str()
            .unwrap()
            .contains("req-1"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
