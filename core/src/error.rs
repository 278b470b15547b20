//! Error types for the Watson service clients.
//!
//! # Design
//! Two kinds of failure reach the caller. Local validation errors come out of
//! an options builder's `build()` before any request exists. Remote errors are
//! produced while interpreting an `HttpResponse`: the status code picks the
//! variant and the message is pulled out of the Watson error body.
//!
//! `NotFound` and friends carry the server's message rather than the raw body
//! because every Watson service wraps errors in a small JSON envelope. Any
//! status without a dedicated variant lands in `HttpError` with the raw body.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by options builders, request construction and response
/// parsing.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A builder was asked to build without a required field.
    #[error("{field} cannot be null or empty")]
    MissingField { field: &'static str },

    /// A local argument was present but unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// 400
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// 401
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// 403
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    /// 404
    #[error("not found: {message}")]
    NotFound { message: String },

    /// 409
    #[error("conflict: {message}")]
    Conflict { message: String },

    /// 413
    #[error("request too large: {message}")]
    RequestTooLarge { message: String },

    /// 415
    #[error("unsupported media type: {message}")]
    UnsupportedMediaType { message: String },

    /// 429
    #[error("too many requests: {message}")]
    TooManyRequests { message: String },

    /// 500
    #[error("internal server error: {message}")]
    InternalServerError { message: String },

    /// 503
    #[error("service unavailable: {message}")]
    ServiceUnavailable { message: String },

    /// The server returned a non-2xx status without a dedicated variant.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The host transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Map a non-success status and its body onto a variant.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = || {
            serde_json::from_slice::<ErrorResponse>(body)
                .ok()
                .and_then(|e| e.message())
                .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
        };
        match status {
            400 => ApiError::BadRequest { message: message() },
            401 => ApiError::Unauthorized { message: message() },
            403 => ApiError::Forbidden { message: message() },
            404 => ApiError::NotFound { message: message() },
            409 => ApiError::Conflict { message: message() },
            413 => ApiError::RequestTooLarge { message: message() },
            415 => ApiError::UnsupportedMediaType { message: message() },
            429 => ApiError::TooManyRequests { message: message() },
            500 => ApiError::InternalServerError { message: message() },
            503 => ApiError::ServiceUnavailable { message: message() },
            _ => ApiError::HttpError {
                status,
                body: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }

    /// HTTP status for errors that came from the server.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest { .. } => Some(400),
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Conflict { .. } => Some(409),
            ApiError::RequestTooLarge { .. } => Some(413),
            ApiError::UnsupportedMediaType { .. } => Some(415),
            ApiError::TooManyRequests { .. } => Some(429),
            ApiError::InternalServerError { .. } => Some(500),
            ApiError::ServiceUnavailable { .. } => Some(503),
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The JSON envelope Watson services use for error responses.
///
/// The services disagree on the exact shape: Assistant and Dialog send
/// `{"error": "...", "code": 404}`, Visual Recognition nests an object under
/// `error`, and some endpoints add an `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorDetail>,
}

/// One entry of an `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    /// The most specific human-readable message in the envelope.
    pub fn message(&self) -> Option<String> {
        match &self.error {
            Some(serde_json::Value::String(s)) => return Some(s.clone()),
            Some(serde_json::Value::Object(obj)) => {
                for key in ["description", "message", "error"] {
                    if let Some(serde_json::Value::String(s)) = obj.get(key) {
                        return Some(s.clone());
                    }
                }
            }
            _ => {}
        }
        if let Some(description) = &self.description {
            return Some(description.clone());
        }
        self.errors.iter().find_map(|e| e.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_error_body_message() {
        let err = ApiError::from_status(404, br#"{"error":"Resource not found","code":404}"#);
        match err {
            ApiError::NotFound { message } => assert_eq!(message, "Resource not found"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn visual_recognition_nested_error_body() {
        let body = br#"{"error":{"code":400,"error_id":"input_error","description":"No images were specified."}}"#;
        let err = ApiError::from_status(400, body);
        assert_eq!(err.to_string(), "bad request: No images were specified.");
    }

    #[test]
    fn errors_array_is_used_as_fallback() {
        let body = br#"{"code":409,"errors":[{"message":"Counterexample already exists","path":"text"}]}"#;
        let err = ApiError::from_status(409, body);
        assert!(matches!(err, ApiError::Conflict { ref message } if message == "Counterexample already exists"));
    }

    #[test]
    fn non_json_body_becomes_message() {
        let err = ApiError::from_status(503, b"upstream down");
        assert!(matches!(err, ApiError::ServiceUnavailable { ref message } if message == "upstream down"));
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn unmapped_status_keeps_raw_body() {
        let err = ApiError::from_status(418, b"teapot");
        assert!(matches!(err, ApiError::HttpError { status: 418, ref body } if body == "teapot"));
    }

    #[test]
    fn local_errors_have_no_status() {
        let err = ApiError::MissingField { field: "workspace_id" };
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "workspace_id cannot be null or empty");
    }
}
