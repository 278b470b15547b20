use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Error body in the shape the Watson services return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatsonError {
    pub error: String,
    pub code: u16,
}

impl WatsonError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: status.as_u16(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for WatsonError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Visual Recognition nests its errors one level deeper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedError {
    pub code: u16,
    pub error_id: &'static str,
    pub description: String,
}

impl NestedError {
    pub fn not_found(description: impl Into<String>) -> Self {
        Self {
            code: StatusCode::NOT_FOUND.as_u16(),
            error_id: "not_found",
            description: description.into(),
        }
    }
}

impl IntoResponse for NestedError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = json!({
            "error": {
                "code": self.code,
                "error_id": self.error_id,
                "description": self.description,
            }
        });
        (status, Json(body)).into_response()
    }
}
