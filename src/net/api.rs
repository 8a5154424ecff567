//! REST request plumbing shared by auth and catalog calls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): dispatch fails with [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`; non-success statuses are
//! normalized into one message before they reach a page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::authorizer::RequestAuthorizer;
use super::error::ApiError;
use crate::config::ClientConfig;

const AUTHORIZATION: &str = "Authorization";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Browser file handle carried by a multipart part.
#[cfg(feature = "hydrate")]
pub type FilePart = web_sys::File;

/// Files only exist in the browser; outside it a file part cannot be built.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilePart {}

/// One named field of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPart {
    Text(String),
    File(FilePart),
}

/// Multipart body, sent as browser `FormData` in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<(String, FormPart)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push((name.to_owned(), FormPart::Text(value.into())));
        self
    }

    #[must_use]
    pub fn file(mut self, name: &str, file: FilePart) -> Self {
        self.parts.push((name.to_owned(), FormPart::File(file)));
        self
    }

    pub fn parts(&self) -> &[(String, FormPart)] {
        &self.parts
    }

    /// Field names in send order.
    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Value of the first text field called `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(key, part)| match part {
            FormPart::Text(value) if key == name => Some(value.as_str()),
            _ => None,
        })
    }

    #[cfg(feature = "hydrate")]
    fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let js_error = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
        let data = web_sys::FormData::new().map_err(js_error)?;
        for (name, part) in &self.parts {
            match part {
                FormPart::Text(value) => data.append_with_str(name, value),
                FormPart::File(file) => data.append_with_blob_and_filename(name, file, &file.name()),
            }
            .map_err(js_error)?;
        }
        Ok(data)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

/// An outgoing request before it is handed to the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be represented as JSON.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(RequestBody::Json(value));
        Ok(self)
    }

    /// Attach a multipart body. The browser supplies the content type.
    #[must_use]
    pub fn with_multipart(mut self, form: MultipartForm) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    pub fn json_body(&self) -> Option<&serde_json::Value> {
        match &self.body {
            Some(RequestBody::Json(value)) => Some(value),
            _ => None,
        }
    }

    pub fn multipart_body(&self) -> Option<&MultipartForm> {
        match &self.body {
            Some(RequestBody::Multipart(form)) => Some(form),
            _ => None,
        }
    }

    /// Copy of this request carrying exactly one bearer `Authorization` header.
    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.headers.retain(|(name, _)| !name.eq_ignore_ascii_case(AUTHORIZATION));
        self.headers.push((AUTHORIZATION.to_owned(), format!("Bearer {token}")));
        self
    }

    /// First value of header `name`, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as read off the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Build `?k=v&..` from non-empty pairs, percent-encoding values.
pub fn query_string(pairs: &[(&str, String)]) -> String {
    let joined = pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    if joined.is_empty() { joined } else { format!("?{joined}") }
}

/// Turn a raw response into `T` or a normalized error. An empty body reads as `null`.
///
/// # Errors
///
/// Returns [`ApiError::Http`] for non-2xx statuses and [`ApiError::Decode`]
/// when the body does not match `T`.
pub fn decode_response<T: DeserializeOwned>(response: ApiResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::from_response(response.status, &response.status_text, &response.body));
    }
    let body = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map a transport failure (build, send, or body read) to [`ApiError::Network`].
#[cfg(any(test, feature = "hydrate"))]
fn network<T, E: std::fmt::Display>(result: Result<T, E>) -> Result<T, ApiError> {
    result.map_err(|e| ApiError::Network(e.to_string()))
}

/// Send `request` as-is. Authorization is the caller's concern.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the browser fails the fetch and
/// [`ApiError::Unavailable`] outside the browser.
pub async fn dispatch(request: ApiRequest) -> Result<ApiResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = network(match &request.body {
            Some(RequestBody::Json(body)) => builder.json(body),
            Some(RequestBody::Multipart(form)) => builder.body(form.to_form_data()?),
            None => builder.build(),
        })?;
        let resp = network(prepared.send().await)?;
        let status = resp.status();
        let status_text = resp.status_text();
        let body = network(resp.text().await)?;
        Ok(ApiResponse { status, status_text, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Authorized REST client for the catalog endpoints.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    authorizer: RequestAuthorizer,
}

impl ApiClient {
    pub fn new(config: ClientConfig, authorizer: RequestAuthorizer) -> Self {
        Self { config, authorizer }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Authorize, send, and decode `request`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthExpired`] without sending when the session is
    /// unusable, otherwise whatever [`dispatch`] or [`decode_response`] report.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let request = self.authorizer.authorize(request)?;
        let response = dispatch(request).await?;
        decode_response(response)
    }
}
