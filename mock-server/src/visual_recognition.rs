//! Visual Recognition v3 routes for custom classifier management.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::error::NestedError;
use crate::Db;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classifier {
    pub classifier_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_ml_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<Class>,
}

impl Classifier {
    /// The classifier every fresh server starts with.
    pub fn seed() -> Self {
        Self {
            classifier_id: "dogs_1477088859".to_string(),
            name: "dogs".to_string(),
            owner: Some("mock-owner".to_string()),
            status: "ready".to_string(),
            core_ml_enabled: Some(true),
            created: Utc.with_ymd_and_hms(2016, 10, 21, 22, 27, 39).single(),
            classes: vec![
                Class { class: "husky".to_string() },
                Class { class: "beagle".to_string() },
            ],
        }
    }

    /// Summary shown by a non-verbose listing.
    fn brief(&self) -> Self {
        Self {
            classifier_id: self.classifier_id.clone(),
            name: self.name.clone(),
            owner: None,
            status: self.status.clone(),
            core_ml_enabled: None,
            created: None,
            classes: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Classifiers {
    pub classifiers: Vec<Classifier>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListClassifiersParams {
    #[serde(default)]
    pub verbose: bool,
}

pub fn routes() -> Router<Db> {
    Router::new()
        .route("/classifiers", get(list_classifiers))
        .route(
            "/classifiers/{classifier_id}",
            get(get_classifier).delete(delete_classifier),
        )
}

fn classifier_not_found(classifier_id: &str) -> NestedError {
    NestedError::not_found(format!("Cannot find classifier {classifier_id}"))
}

async fn list_classifiers(
    State(db): State<Db>,
    Query(params): Query<ListClassifiersParams>,
) -> Json<Classifiers> {
    let store = db.read().await;
    let classifiers = store
        .classifiers
        .values()
        .map(|c| if params.verbose { c.clone() } else { c.brief() })
        .collect();
    Json(Classifiers { classifiers })
}

async fn get_classifier(
    State(db): State<Db>,
    Path(classifier_id): Path<String>,
) -> Result<Json<Classifier>, NestedError> {
    let store = db.read().await;
    store
        .classifiers
        .get(&classifier_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| classifier_not_found(&classifier_id))
}

async fn delete_classifier(
    State(db): State<Db>,
    Path(classifier_id): Path<String>,
) -> Result<Json<Value>, NestedError> {
    let mut store = db.write().await;
    store
        .classifiers
        .remove(&classifier_id)
        .ok_or_else(|| classifier_not_found(&classifier_id))?;
    info!(%classifier_id, "deleted classifier");
    Ok(Json(json!({})))
}
