//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network; the host executes the actual I/O, either by
//! hand or through a [`Transport`](crate::service::Transport).
//!
//! Request bodies are either JSON text or a `multipart/form-data` form, the
//! two encodings the Watson services accept. Response bodies are raw bytes
//! because a few endpoints (Core ML model download) return binary content.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute and already carries the encoded query string. When a
/// body is present the matching `content-type` header is in `headers`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// First header value with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Value of a query parameter, decoded.
    pub fn query_param(&self, key: &str) -> Option<String> {
        let url = Url::parse(&self.url).ok()?;
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then handed to
/// the matching `ServiceCall` for interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(String),
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn content_type(&self) -> String {
        match self {
            RequestBody::Json(_) => "application/json".to_string(),
            RequestBody::Multipart(form) => form.content_type(),
        }
    }

    /// Wire bytes of the body.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            RequestBody::Json(text) => text.clone().into_bytes(),
            RequestBody::Multipart(form) => form.encode(),
        }
    }

    pub fn as_json(&self) -> Option<&str> {
        match self {
            RequestBody::Json(text) => Some(text),
            RequestBody::Multipart(_) => None,
        }
    }

    pub fn as_multipart(&self) -> Option<&MultipartForm> {
        match self {
            RequestBody::Multipart(form) => Some(form),
            RequestBody::Json(_) => None,
        }
    }
}

/// One field of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// A `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartForm {
    boundary: String,
    parts: Vec<FormPart>,
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: format!("watson-{}", uuid::Uuid::new_v4().simple()),
            parts: Vec::new(),
        }
    }

    /// Add a plain text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            filename: None,
            content_type: None,
            data: value.into().into_bytes(),
        });
        self
    }

    /// Add a file field. A missing content type is sent as
    /// `application/octet-stream`.
    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: Option<&str>,
        content_type: Option<&str>,
        data: &[u8],
    ) -> Self {
        let name = name.into();
        self.parts.push(FormPart {
            filename: Some(filename.map_or_else(|| name.clone(), str::to_string)),
            content_type: Some(content_type.unwrap_or("application/octet-stream").to_string()),
            name,
            data: data.to_vec(),
        });
        self
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn part(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|p| p.name == name)
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for part in &self.parts {
            out.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
            let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", quoted(&part.name));
            if let Some(filename) = &part.filename {
                disposition.push_str(&format!("; filename=\"{}\"", quoted(filename)));
            }
            out.extend_from_slice(disposition.as_bytes());
            out.extend_from_slice(b"\r\n");
            if let Some(content_type) = &part.content_type {
                out.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
            }
            out.extend_from_slice(b"\r\n");
            out.extend_from_slice(&part.data);
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        out
    }
}

/// Escape a value for a quoted `Content-Disposition` parameter the way
/// browsers encode form-data names.
fn quoted(value: &str) -> Cow<'_, str> {
    if !value.contains(['"', '\r', '\n']) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .replace('"', "%22")
            .replace('\r', "%0D")
            .replace('\n', "%0A"),
    )
}

/// Assembles an `HttpRequest` from a base URL, path segments and parameters.
///
/// Path segments are percent-encoded individually, so free text such as an
/// example sentence can be used as a resource id.
#[derive(Debug)]
pub(crate) struct RequestBuilder {
    method: HttpMethod,
    url: Url,
    headers: Vec<(String, String)>,
    body: Option<RequestBody>,
}

impl RequestBuilder {
    /// Fails on a `.` or `..` segment: the URL parser would resolve it
    /// against the path and address a different resource.
    pub(crate) fn new(method: HttpMethod, base: &Url, segments: &[&str]) -> Result<Self, ApiError> {
        if let Some(dots) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(ApiError::InvalidArgument(format!(
                "{dots:?} cannot be used as a path segment"
            )));
        }
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidArgument(format!("{base} cannot be a base URL")))?
            .pop_if_empty()
            .extend(segments);
        Ok(Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        })
    }

    pub(crate) fn query(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.url.query_pairs_mut().append_pair(key, &value.to_string());
        self
    }

    pub(crate) fn query_opt(self, key: &str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Comma-join a list parameter; an empty list adds nothing.
    pub(crate) fn query_list(self, key: &str, values: &[String]) -> Self {
        if values.is_empty() {
            return self;
        }
        self.query(key, values.join(","))
    }

    pub(crate) fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Replace every header with this name.
    pub(crate) fn set_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.header(name, value)
    }

    pub(crate) fn header_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.header(name, value),
            None => self,
        }
    }

    pub(crate) fn json(mut self, body: &impl Serialize) -> Result<Self, ApiError> {
        let text = serde_json::to_string(body).map_err(ApiError::Serialization)?;
        self.body = Some(RequestBody::Json(text));
        Ok(self)
    }

    pub(crate) fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    pub(crate) fn build(self) -> HttpRequest {
        let mut headers = self.headers;
        if let Some(body) = &self.body {
            headers.push(("content-type".to_string(), body.content_type()));
        }
        debug!(method = %self.method, url = %self.url, "built request");
        HttpRequest {
            method: self.method,
            url: self.url.into(),
            headers,
            body: self.body,
        }
    }
}

/// A JSON object body that only carries the fields that were set.
#[derive(Debug, Default)]
pub(crate) struct JsonBody(Map<String, Value>);

impl JsonBody {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn field(mut self, key: &str, value: &impl Serialize) -> Result<Self, ApiError> {
        let value = serde_json::to_value(value).map_err(ApiError::Serialization)?;
        self.0.insert(key.to_string(), value);
        Ok(self)
    }

    pub(crate) fn field_opt<T: Serialize>(self, key: &str, value: Option<T>) -> Result<Self, ApiError> {
        match value {
            Some(value) => self.field(key, &value),
            None => Ok(self),
        }
    }

    /// Lists are sent only when non-empty.
    pub(crate) fn list<T: Serialize>(self, key: &str, values: &[T]) -> Result<Self, ApiError> {
        if values.is_empty() {
            return Ok(self);
        }
        self.field(key, &values)
    }

    pub(crate) fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
