//! Plumbing shared by the service clients.
//!
//! # Design
//! A service client never performs I/O. Each operation returns a
//! [`ServiceCall`]: the fully built [`HttpRequest`] together with the parser
//! for the response it expects. The host either executes the request itself
//! and hands the response to [`ServiceCall::parse`], or passes a
//! [`Transport`] to [`ServiceCall::execute`].

use std::fmt;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::{Authenticator, ServiceConfig};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, RequestBuilder};

/// Executes an `HttpRequest` and returns the raw response.
///
/// Implementations should return non-2xx responses as data rather than
/// errors; status interpretation belongs to the `ServiceCall`.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<F> Transport for F
where
    F: Fn(HttpRequest) -> Result<HttpResponse, ApiError>,
{
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self(request)
    }
}

/// A ready-to-send request and the typed parser for its response.
pub struct ServiceCall<T> {
    request: HttpRequest,
    parser: fn(HttpResponse) -> Result<T, ApiError>,
}

impl<T> fmt::Debug for ServiceCall<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCall").field("request", &self.request).finish()
    }
}

impl<T> ServiceCall<T> {
    pub(crate) fn with_parser(request: HttpRequest, parser: fn(HttpResponse) -> Result<T, ApiError>) -> Self {
        Self { request, parser }
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn into_request(self) -> HttpRequest {
        self.request
    }

    /// Interpret a response to this call's request.
    pub fn parse(&self, response: HttpResponse) -> Result<T, ApiError> {
        (self.parser)(response)
    }

    /// Send the request through `transport` and parse the result.
    pub fn execute(self, transport: &impl Transport) -> Result<T, ApiError> {
        debug!(method = %self.request.method, url = %self.request.url, "executing call");
        let parser = self.parser;
        let response = transport.send(self.request)?;
        debug!(status = response.status, "received response");
        parser(response)
    }
}

impl<T: DeserializeOwned> ServiceCall<T> {
    pub(crate) fn json(request: HttpRequest) -> Self {
        Self::with_parser(request, parse_json::<T>)
    }
}

impl ServiceCall<()> {
    pub(crate) fn empty(request: HttpRequest) -> Self {
        Self::with_parser(request, parse_empty)
    }
}

impl ServiceCall<Vec<u8>> {
    pub(crate) fn bytes(request: HttpRequest) -> Self {
        Self::with_parser(request, parse_bytes)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
pub fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let err = ApiError::from_status(response.status, &response.body);
    warn!(status = response.status, error = %err, "service returned an error");
    Err(err)
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_slice(&response.body).map_err(ApiError::Deserialization)
}

fn parse_empty(response: HttpResponse) -> Result<(), ApiError> {
    check_status(&response)
}

fn parse_bytes(response: HttpResponse) -> Result<Vec<u8>, ApiError> {
    check_status(&response)?;
    Ok(response.body)
}

/// Endpoint, version date and credentials of one service.
#[derive(Debug, Clone)]
pub struct ServiceCore {
    name: &'static str,
    base_url: Url,
    version: Option<String>,
    authenticator: Authenticator,
    headers: Vec<(String, String)>,
}

impl ServiceCore {
    pub fn new(name: &'static str, config: &ServiceConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.url.trim())
            .map_err(|e| ApiError::InvalidArgument(format!("invalid {name} url {:?}: {e}", config.url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidArgument(format!("{name} url {base_url} cannot be a base")));
        }
        Ok(Self {
            name,
            base_url,
            version: config.version.clone(),
            authenticator: config.authenticator(),
            headers: config.headers.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Require a version date; versioned services cannot be called without one.
    pub(crate) fn require_version(self) -> Result<Self, ApiError> {
        match &self.version {
            Some(v) if !v.trim().is_empty() => Ok(self),
            _ => Err(ApiError::MissingField { field: "version" }),
        }
    }

    /// Start a request with the standard headers, credentials and version.
    pub(crate) fn request(&self, method: HttpMethod, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let mut builder = RequestBuilder::new(method, &self.base_url, segments)?
            .header("accept", "application/json")
            .query_opt("version", self.version.as_deref());
        if let Authenticator::ApiKey(key) = &self.authenticator {
            builder = builder.query("api_key", key);
        }
        if let Some(value) = self.authenticator.authorization_header() {
            builder = builder.header("authorization", value);
        }
        for (name, value) in &self.headers {
            builder = builder.header(name, value.clone());
        }
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        name: String,
    }

    fn core() -> ServiceCore {
        let config = ServiceConfig::new("http://localhost:3000/api/")
            .with_version("2019-02-28")
            .with_bearer_token("tok")
            .with_header("X-Watson-Learning-Opt-Out", "true");
        ServiceCore::new("assistant", &config).unwrap()
    }

    #[test]
    fn request_carries_standard_parameters() {
        let req = core().request(HttpMethod::Get, &["v1", "workspaces"]).unwrap().build();
        assert_eq!(req.url, "http://localhost:3000/api/v1/workspaces?version=2019-02-28");
        assert_eq!(req.header("accept"), Some("application/json"));
        assert_eq!(req.header("Authorization"), Some("Bearer tok"));
        assert_eq!(req.header("x-watson-learning-opt-out"), Some("true"));
    }

    #[test]
    fn api_key_goes_into_the_query() {
        let config = ServiceConfig::new("http://localhost:3000").with_api_key("secret");
        let core = ServiceCore::new("visual_recognition", &config).unwrap();
        let req = core.request(HttpMethod::Get, &["v3", "classifiers"]).unwrap().build();
        assert_eq!(req.query_param("api_key").as_deref(), Some("secret"));
        assert_eq!(req.header("authorization"), None);
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = ServiceCore::new("dialog", &ServiceConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
        let err = ServiceCore::new("dialog", &ServiceConfig::new("mailto:someone@example.com")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn versioned_services_need_a_version() {
        let core = ServiceCore::new("assistant", &ServiceConfig::new("http://localhost")).unwrap();
        assert!(matches!(core.require_version(), Err(ApiError::MissingField { field: "version" })));
    }

    #[test]
    fn json_call_parses_success_and_errors() {
        let req = core().request(HttpMethod::Get, &["thing"]).unwrap().build();
        let call: ServiceCall<Thing> = ServiceCall::json(req);
        let thing = call.parse(HttpResponse::new(200, r#"{"name":"a"}"#)).unwrap();
        assert_eq!(thing, Thing { name: "a".into() });

        let err = call.parse(HttpResponse::new(404, r#"{"error":"gone","code":404}"#)).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref message } if message == "gone"));

        let err = call.parse(HttpResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn empty_and_bytes_calls() {
        let req = core().request(HttpMethod::Delete, &["thing"]).unwrap().build();
        assert!(ServiceCall::empty(req.clone()).parse(HttpResponse::new(204, "")).is_ok());
        let bytes = ServiceCall::bytes(req).parse(HttpResponse::new(200, vec![0u8, 1, 2])).unwrap();
        assert_eq!(bytes, vec![0, 1, 2]);
    }

    #[test]
    fn execute_goes_through_the_transport() {
        let req = core().request(HttpMethod::Get, &["thing"]).unwrap().build();
        let call: ServiceCall<Thing> = ServiceCall::json(req);
        let transport = |request: HttpRequest| -> Result<HttpResponse, ApiError> {
            assert!(request.url.ends_with("/thing?version=2019-02-28"));
            Ok(HttpResponse::new(200, r#"{"name":"sent"}"#))
        };
        assert_eq!(call.execute(&transport).unwrap().name, "sent");
    }

    #[test]
    fn transport_errors_propagate() {
        let req = core().request(HttpMethod::Get, &["thing"]).unwrap().build();
        let call: ServiceCall<Thing> = ServiceCall::json(req);
        let transport =
            |_: HttpRequest| -> Result<HttpResponse, ApiError> { Err(ApiError::Transport("connection refused".into())) };
        assert!(matches!(call.execute(&transport), Err(ApiError::Transport(_))));
    }
}
