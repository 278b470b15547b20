//! In-memory stand-in for a subset of the Watson REST services.
//!
//! Services are mounted under their usual gateway prefixes:
//! `/assistant/api/v1`, `/visual-recognition/api/v3` and `/dialog/api/v1`.
//! Versioned services reject requests without a `version` query parameter.

pub mod assistant;
pub mod dialog;
pub mod error;
pub mod pagination;
pub mod visual_recognition;

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};

pub use error::WatsonError;

/// Everything the server remembers between requests.
#[derive(Debug, Default)]
pub struct Store {
    pub workspaces: BTreeMap<String, assistant::WorkspaceRecord>,
    pub classifiers: BTreeMap<String, visual_recognition::Classifier>,
    pub dialogs: BTreeMap<String, dialog::Dialog>,
}

impl Store {
    /// A store with one Visual Recognition classifier and one dialog.
    pub fn seeded() -> Self {
        let classifier = visual_recognition::Classifier::seed();
        let dialog = dialog::Dialog::seed();
        Self {
            workspaces: BTreeMap::new(),
            classifiers: BTreeMap::from([(classifier.classifier_id.clone(), classifier)]),
            dialogs: BTreeMap::from([(dialog.dialog_id.clone(), dialog)]),
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    Router::new()
        .nest(
            "/assistant/api/v1",
            assistant::routes().layer(middleware::from_fn(require_version)),
        )
        .nest(
            "/visual-recognition/api/v3",
            visual_recognition::routes().layer(middleware::from_fn(require_version)),
        )
        .nest("/dialog/api/v1", dialog::routes())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_version(request: Request, next: Next) -> Response {
    let has_version = request
        .uri()
        .query()
        .is_some_and(|query| query.split('&').any(|pair| is_version_pair(pair)));
    if !has_version {
        return WatsonError::bad_request("Missing required query parameter: version").into_response();
    }
    next.run(request).await
}

fn is_version_pair(pair: &str) -> bool {
    pair.strip_prefix("version=").is_some_and(|value| !value.is_empty())
}
