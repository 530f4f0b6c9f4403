//! The transport seam between resource wrappers and the network.
//!
//! [`Accounts`](crate::objects::Accounts) and [`Imports`](crate::objects::Imports)
//! never talk to `reqwest` directly. They are generic over [`Transport`], so
//! tests can substitute a recording implementation and callers can add their
//! own authentication, throttling, or retry policy around [`HttpClient`].
//!
//! Implementors provide [`Transport::request`]; `get`, `post`, and `patch`
//! are provided on top of it.
//!
//! [`HttpClient`]: crate::clients::HttpClient

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest, QueryParams, RequestBody};
use crate::clients::http_response::HttpResponse;

/// An HTTP transport capable of sending requests against Pardot objects.
///
/// # Example
///
/// ```rust,ignore
/// use pardot_api::clients::{HttpError, HttpRequest, HttpResponse, Transport};
///
/// struct Logged<T>(T);
///
/// impl<T: Transport> Transport for Logged<T> {
///     async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         println!("{} {}", request.http_method, request.relative_path());
///         self.0.request(request).await
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Sends a fully built request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent or the server
    /// answers with a non-2xx status.
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation,
    /// or any error from [`Transport::request`].
    async fn get(
        &self,
        object_name: &str,
        path: Option<&str>,
        params: QueryParams,
    ) -> Result<HttpResponse, HttpError> {
        let request = build_request(
            HttpMethod::Get,
            object_name,
            path,
            params,
            HashMap::new(),
            RequestBody::Empty,
        )?;
        self.request(request).await
    }

    /// Sends a POST request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation,
    /// or any error from [`Transport::request`].
    async fn post(
        &self,
        object_name: &str,
        path: Option<&str>,
        params: QueryParams,
        headers: HashMap<String, String>,
        body: RequestBody,
    ) -> Result<HttpResponse, HttpError> {
        let request = build_request(HttpMethod::Post, object_name, path, params, headers, body)?;
        self.request(request).await
    }

    /// Sends a PATCH request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation,
    /// or any error from [`Transport::request`].
    async fn patch(
        &self,
        object_name: &str,
        path: Option<&str>,
        params: QueryParams,
        headers: HashMap<String, String>,
        body: RequestBody,
    ) -> Result<HttpResponse, HttpError> {
        let request = build_request(HttpMethod::Patch, object_name, path, params, headers, body)?;
        self.request(request).await
    }
}

fn build_request(
    method: HttpMethod,
    object_name: &str,
    path: Option<&str>,
    params: QueryParams,
    headers: HashMap<String, String>,
    body: RequestBody,
) -> Result<HttpRequest, HttpError> {
    let mut builder = HttpRequest::builder(method, object_name)
        .query(params)
        .extra_headers(headers)
        .body(body);

    if let Some(path) = path {
        builder = builder.path(path);
    }

    Ok(builder.build()?)
}
