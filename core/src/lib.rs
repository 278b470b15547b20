//! Synchronous client core for the Watson REST services: Assistant v1,
//! Compare & Comply v1, Dialog v1 and Visual Recognition v3.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! HTTP round-trip, either by hand or through a [`Transport`], which keeps
//! the core deterministic and testable.
//!
//! # Design
//! - Every operation takes one immutable options value produced by a
//!   builder. `build()` validates required fields; `new_builder()` copies an
//!   existing value back into a builder, which is how paging callers move
//!   the cursor forward.
//! - Service clients hold only their endpoint, version date and
//!   credentials, so they can be shared freely across threads.
//! - Models are defined independently from the mock-server crate;
//!   integration tests catch schema drift.
//!
//! ```no_run
//! use watson_core::assistant::options::CreateCounterexampleOptions;
//! use watson_core::{AssistantClient, ServiceConfig};
//!
//! # fn main() -> Result<(), watson_core::ApiError> {
//! let config = ServiceConfig::new("http://localhost:3000/assistant/api").with_version("2019-02-28");
//! let client = AssistantClient::new(&config)?;
//! let options = CreateCounterexampleOptions::builder("ws-1", "Make me a sandwich").build()?;
//! let request = client.create_counterexample(&options)?.into_request();
//! assert!(request.url.ends_with("/v1/workspaces/ws-1/counterexamples?version=2019-02-28"));
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod compare_comply;
pub mod config;
pub mod dialog;
pub mod error;
pub mod http;
mod options;
pub mod service;
pub mod visual_recognition;

pub use assistant::AssistantClient;
pub use compare_comply::CompareComplyClient;
pub use config::{Authenticator, ConfigError, ServiceConfig, PLACEHOLDER};
pub use dialog::DialogClient;
pub use error::{ApiError, ErrorResponse};
pub use http::{FormPart, HttpMethod, HttpRequest, HttpResponse, MultipartForm, RequestBody};
pub use options::FieldRef;
pub use service::{ServiceCall, ServiceCore, Transport};
pub use visual_recognition::VisualRecognitionClient;
