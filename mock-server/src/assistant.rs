//! Assistant v1 routes: workspaces, intents and counterexamples.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::error::WatsonError;
use crate::pagination::{paginate, ListParams, Pagination, Sortable};
use crate::Db;

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub workspace_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub learning_opt_out: bool,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intents: Vec<Intent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counterexamples: Vec<Counterexample>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub intent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterexample {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkspaceCollection {
    pub workspaces: Vec<Workspace>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IntentCollection {
    pub intents: Vec<Intent>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CounterexampleCollection {
    pub counterexamples: Vec<Counterexample>,
    pub pagination: Pagination,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkspaceInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub metadata: Option<Value>,
    pub learning_opt_out: Option<bool>,
    pub intents: Option<Vec<IntentInput>>,
    pub counterexamples: Option<Vec<TextInput>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IntentInput {
    pub intent: Option<String>,
    pub description: Option<String>,
    pub examples: Option<Vec<Example>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TextInput {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateParams {
    #[serde(default)]
    pub append: bool,
}

/// One workspace and the resources it owns.
#[derive(Debug, Clone)]
pub struct WorkspaceRecord {
    pub workspace: Workspace,
    pub intents: BTreeMap<String, Intent>,
    pub counterexamples: BTreeMap<String, Counterexample>,
}

impl WorkspaceRecord {
    fn view(&self, params: &ListParams) -> Workspace {
        let mut workspace = self.workspace.clone();
        if params.export {
            workspace.intents = self.intents.values().map(|i| intent_view(i, params)).collect();
            workspace.counterexamples = self
                .counterexamples
                .values()
                .map(|c| counterexample_view(c, params))
                .collect();
        }
        if !params.include_audit {
            workspace.created = None;
            workspace.updated = None;
        }
        workspace
    }
}

fn intent_view(intent: &Intent, params: &ListParams) -> Intent {
    let mut intent = intent.clone();
    if !params.export {
        intent.examples.clear();
    }
    if !params.include_audit {
        intent.created = None;
        intent.updated = None;
    }
    intent
}

fn counterexample_view(counterexample: &Counterexample, params: &ListParams) -> Counterexample {
    let mut counterexample = counterexample.clone();
    if !params.include_audit {
        counterexample.created = None;
        counterexample.updated = None;
    }
    counterexample
}

fn timestamp(value: &Option<DateTime<Utc>>) -> String {
    value
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

impl Sortable for WorkspaceRecord {
    const SORT_FIELDS: &'static [&'static str] = &["name", "updated"];

    fn sort_key(&self, field: &str) -> String {
        match field {
            "updated" => timestamp(&self.workspace.updated),
            _ => format!("{}\u{0}{}", self.workspace.name, self.workspace.workspace_id),
        }
    }
}

impl Sortable for Intent {
    const SORT_FIELDS: &'static [&'static str] = &["intent", "updated"];

    fn sort_key(&self, field: &str) -> String {
        match field {
            "updated" => timestamp(&self.updated),
            _ => self.intent.clone(),
        }
    }
}

impl Sortable for Counterexample {
    const SORT_FIELDS: &'static [&'static str] = &["text", "updated"];

    fn sort_key(&self, field: &str) -> String {
        match field {
            "updated" => timestamp(&self.updated),
            _ => self.text.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

pub fn routes() -> Router<Db> {
    Router::new()
        .route("/workspaces", get(list_workspaces).post(create_workspace))
        .route(
            "/workspaces/{workspace_id}",
            get(get_workspace).post(update_workspace).delete(delete_workspace),
        )
        .route("/workspaces/{workspace_id}/intents", get(list_intents).post(create_intent))
        .route(
            "/workspaces/{workspace_id}/intents/{intent}",
            get(get_intent).post(update_intent).delete(delete_intent),
        )
        .route(
            "/workspaces/{workspace_id}/counterexamples",
            get(list_counterexamples).post(create_counterexample),
        )
        .route(
            "/workspaces/{workspace_id}/counterexamples/{text}",
            get(get_counterexample)
                .post(update_counterexample)
                .delete(delete_counterexample),
        )
}

fn workspace_not_found(workspace_id: &str) -> WatsonError {
    WatsonError::not_found(format!("Resource not found: workspace {workspace_id}"))
}

fn duplicate(value: &str) -> WatsonError {
    WatsonError::conflict(format!("Unique Violation: The value \"{value}\" already exists"))
}

fn required_text(value: Option<String>, field: &str) -> Result<String, WatsonError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(WatsonError::bad_request(format!("Invalid request: {field} is required"))),
    }
}

fn intent_name(value: Option<String>) -> Result<String, WatsonError> {
    let name = required_text(value, "intent")?;
    if name.chars().any(char::is_whitespace) || name.starts_with("sys-") {
        return Err(WatsonError::bad_request(format!("Invalid intent name: {name}")));
    }
    Ok(name)
}

fn build_intents(
    inputs: Vec<IntentInput>,
    now: DateTime<Utc>,
) -> Result<BTreeMap<String, Intent>, WatsonError> {
    let mut intents = BTreeMap::new();
    for input in inputs {
        let name = intent_name(input.intent)?;
        if intents.contains_key(&name) {
            return Err(duplicate(&name));
        }
        let intent = Intent {
            intent: name.clone(),
            description: input.description,
            created: Some(now),
            updated: Some(now),
            examples: input.examples.unwrap_or_default(),
        };
        intents.insert(name, intent);
    }
    Ok(intents)
}

fn build_counterexamples(
    inputs: Vec<TextInput>,
    now: DateTime<Utc>,
) -> Result<BTreeMap<String, Counterexample>, WatsonError> {
    let mut counterexamples = BTreeMap::new();
    for input in inputs {
        let text = required_text(input.text, "text")?;
        if counterexamples.contains_key(&text) {
            return Err(duplicate(&text));
        }
        counterexamples.insert(
            text.clone(),
            Counterexample {
                text,
                created: Some(now),
                updated: Some(now),
            },
        );
    }
    Ok(counterexamples)
}

// -- workspaces -------------------------------------------------------------

async fn list_workspaces(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Result<Json<WorkspaceCollection>, WatsonError> {
    let store = db.read().await;
    let records: Vec<WorkspaceRecord> = store.workspaces.values().cloned().collect();
    let page = paginate(records, &params, "/v1/workspaces")?;
    let view_params = ListParams {
        export: false,
        ..params
    };
    Ok(Json(WorkspaceCollection {
        workspaces: page.items.iter().map(|r| r.view(&view_params)).collect(),
        pagination: page.pagination,
    }))
}

async fn create_workspace(
    State(db): State<Db>,
    Json(input): Json<WorkspaceInput>,
) -> Result<(StatusCode, Json<Workspace>), WatsonError> {
    let now = Utc::now();
    let record = WorkspaceRecord {
        workspace: Workspace {
            workspace_id: Uuid::new_v4().to_string(),
            name: input.name.unwrap_or_default(),
            description: input.description,
            language: input.language.unwrap_or_else(|| "en".to_string()),
            metadata: input.metadata,
            learning_opt_out: input.learning_opt_out.unwrap_or(false),
            status: "Available".to_string(),
            created: Some(now),
            updated: Some(now),
            intents: Vec::new(),
            counterexamples: Vec::new(),
        },
        intents: build_intents(input.intents.unwrap_or_default(), now)?,
        counterexamples: build_counterexamples(input.counterexamples.unwrap_or_default(), now)?,
    };
    let view = record.view(&ListParams {
        include_audit: true,
        ..ListParams::default()
    });
    info!(workspace_id = %view.workspace_id, "created workspace");
    db.write()
        .await
        .workspaces
        .insert(view.workspace_id.clone(), record);
    Ok((StatusCode::CREATED, Json(view)))
}

async fn get_workspace(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Workspace>, WatsonError> {
    let store = db.read().await;
    let record = store
        .workspaces
        .get(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;
    Ok(Json(record.view(&params)))
}

async fn update_workspace(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
    Query(update): Query<UpdateParams>,
    Json(input): Json<WorkspaceInput>,
) -> Result<Json<Workspace>, WatsonError> {
    let now = Utc::now();
    let mut store = db.write().await;
    let record = store
        .workspaces
        .get_mut(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;

    let intents = input.intents.map(|i| build_intents(i, now)).transpose()?;
    let counterexamples = input
        .counterexamples
        .map(|c| build_counterexamples(c, now))
        .transpose()?;

    let workspace = &mut record.workspace;
    if let Some(name) = input.name {
        workspace.name = name;
    }
    if let Some(description) = input.description {
        workspace.description = Some(description);
    }
    if let Some(language) = input.language {
        workspace.language = language;
    }
    if let Some(metadata) = input.metadata {
        workspace.metadata = Some(metadata);
    }
    if let Some(learning_opt_out) = input.learning_opt_out {
        workspace.learning_opt_out = learning_opt_out;
    }
    workspace.updated = Some(now);

    if let Some(intents) = intents {
        if !update.append {
            record.intents.clear();
        }
        record.intents.extend(intents);
    }
    if let Some(counterexamples) = counterexamples {
        if !update.append {
            record.counterexamples.clear();
        }
        record.counterexamples.extend(counterexamples);
    }
    Ok(Json(record.view(&ListParams {
        include_audit: true,
        ..ListParams::default()
    })))
}

async fn delete_workspace(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
) -> Result<Json<Value>, WatsonError> {
    let mut store = db.write().await;
    store
        .workspaces
        .remove(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;
    info!(%workspace_id, "deleted workspace");
    Ok(Json(json!({})))
}

// -- intents ----------------------------------------------------------------

async fn list_intents(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<IntentCollection>, WatsonError> {
    let store = db.read().await;
    let record = store
        .workspaces
        .get(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;
    let intents: Vec<Intent> = record.intents.values().cloned().collect();
    let page = paginate(intents, &params, &format!("/v1/workspaces/{workspace_id}/intents"))?;
    Ok(Json(IntentCollection {
        intents: page.items.iter().map(|i| intent_view(i, &params)).collect(),
        pagination: page.pagination,
    }))
}

async fn create_intent(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
    Json(input): Json<IntentInput>,
) -> Result<(StatusCode, Json<Intent>), WatsonError> {
    let now = Utc::now();
    let mut store = db.write().await;
    let record = store
        .workspaces
        .get_mut(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;
    let name = intent_name(input.intent)?;
    if record.intents.contains_key(&name) {
        return Err(duplicate(&name));
    }
    let intent = Intent {
        intent: name.clone(),
        description: input.description,
        created: Some(now),
        updated: Some(now),
        examples: input.examples.unwrap_or_default(),
    };
    record.intents.insert(name, intent.clone());
    Ok((StatusCode::CREATED, Json(intent)))
}

async fn get_intent(
    State(db): State<Db>,
    Path((workspace_id, intent)): Path<(String, String)>,
    Query(params): Query<ListParams>,
) -> Result<Json<Intent>, WatsonError> {
    let store = db.read().await;
    let record = store
        .workspaces
        .get(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;
    let found = record
        .intents
        .get(&intent)
        .ok_or_else(|| WatsonError::not_found(format!("Intent '{intent}' is not found")))?;
    Ok(Json(intent_view(found, &params)))
}

async fn update_intent(
    State(db): State<Db>,
    Path((workspace_id, intent)): Path<(String, String)>,
    Json(input): Json<IntentInput>,
) -> Result<Json<Intent>, WatsonError> {
    let mut store = db.write().await;
    let record = store
        .workspaces
        .get_mut(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;
    let mut current = record
        .intents
        .remove(&intent)
        .ok_or_else(|| WatsonError::not_found(format!("Intent '{intent}' is not found")))?;

    let renamed = match input.intent {
        Some(name) => match intent_name(Some(name)) {
            Ok(name) if name != intent && record.intents.contains_key(&name) => Err(duplicate(&name)),
            other => other.map(Some),
        },
        None => Ok(None),
    };
    let renamed = match renamed {
        Ok(renamed) => renamed,
        Err(err) => {
            record.intents.insert(intent, current);
            return Err(err);
        }
    };

    if let Some(name) = renamed {
        current.intent = name;
    }
    if let Some(description) = input.description {
        current.description = Some(description);
    }
    if let Some(examples) = input.examples {
        current.examples = examples;
    }
    current.updated = Some(Utc::now());
    record.intents.insert(current.intent.clone(), current.clone());
    Ok(Json(current))
}

async fn delete_intent(
    State(db): State<Db>,
    Path((workspace_id, intent)): Path<(String, String)>,
) -> Result<Json<Value>, WatsonError> {
    let mut store = db.write().await;
    let record = store
        .workspaces
        .get_mut(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;
    record
        .intents
        .remove(&intent)
        .ok_or_else(|| WatsonError::not_found(format!("Intent '{intent}' is not found")))?;
    Ok(Json(json!({})))
}

// -- counterexamples --------------------------------------------------------

async fn list_counterexamples(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<CounterexampleCollection>, WatsonError> {
    let store = db.read().await;
    let record = store
        .workspaces
        .get(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;
    let counterexamples: Vec<Counterexample> = record.counterexamples.values().cloned().collect();
    let page = paginate(
        counterexamples,
        &params,
        &format!("/v1/workspaces/{workspace_id}/counterexamples"),
    )?;
    Ok(Json(CounterexampleCollection {
        counterexamples: page.items.iter().map(|c| counterexample_view(c, &params)).collect(),
        pagination: page.pagination,
    }))
}

async fn create_counterexample(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
    Json(input): Json<TextInput>,
) -> Result<(StatusCode, Json<Counterexample>), WatsonError> {
    let now = Utc::now();
    let mut store = db.write().await;
    let record = store
        .workspaces
        .get_mut(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;
    let text = required_text(input.text, "text")?;
    if record.counterexamples.contains_key(&text) {
        return Err(duplicate(&text));
    }
    let counterexample = Counterexample {
        text: text.clone(),
        created: Some(now),
        updated: Some(now),
    };
    record.counterexamples.insert(text, counterexample.clone());
    Ok((StatusCode::CREATED, Json(counterexample)))
}

async fn get_counterexample(
    State(db): State<Db>,
    Path((workspace_id, text)): Path<(String, String)>,
    Query(params): Query<ListParams>,
) -> Result<Json<Counterexample>, WatsonError> {
    let store = db.read().await;
    let record = store
        .workspaces
        .get(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;
    let found = record
        .counterexamples
        .get(&text)
        .ok_or_else(|| WatsonError::not_found(format!("Counterexample '{text}' is not found")))?;
    Ok(Json(counterexample_view(found, &params)))
}

async fn update_counterexample(
    State(db): State<Db>,
    Path((workspace_id, text)): Path<(String, String)>,
    Json(input): Json<TextInput>,
) -> Result<Json<Counterexample>, WatsonError> {
    let mut store = db.write().await;
    let record = store
        .workspaces
        .get_mut(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;
    if !record.counterexamples.contains_key(&text) {
        return Err(WatsonError::not_found(format!("Counterexample '{text}' is not found")));
    }
    let new_text = match input.text {
        Some(new_text) => required_text(Some(new_text), "text")?,
        None => text.clone(),
    };
    if new_text != text && record.counterexamples.contains_key(&new_text) {
        return Err(duplicate(&new_text));
    }
    let Some(mut counterexample) = record.counterexamples.remove(&text) else {
        return Err(WatsonError::not_found(format!("Counterexample '{text}' is not found")));
    };
    counterexample.text = new_text.clone();
    counterexample.updated = Some(Utc::now());
    record.counterexamples.insert(new_text, counterexample.clone());
    Ok(Json(counterexample))
}

async fn delete_counterexample(
    State(db): State<Db>,
    Path((workspace_id, text)): Path<(String, String)>,
) -> Result<Json<Value>, WatsonError> {
    let mut store = db.write().await;
    let record = store
        .workspaces
        .get_mut(&workspace_id)
        .ok_or_else(|| workspace_not_found(&workspace_id))?;
    record
        .counterexamples
        .remove(&text)
        .ok_or_else(|| WatsonError::not_found(format!("Counterexample '{text}' is not found")))?;
    Ok(Json(json!({})))
}
