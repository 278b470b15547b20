//! Dialog v1 routes: dialog listing and a stateless conversation endpoint.

use axum::{
    extract::{Multipart, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::WatsonError;
use crate::Db;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub dialog_id: String,
    pub name: String,
}

impl Dialog {
    pub fn seed() -> Self {
        Self {
            dialog_id: "pizza-dialog".to_string(),
            name: "pizza_sample".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DialogCollection {
    pub dialogs: Vec<Dialog>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub conversation_id: i64,
    pub client_id: i64,
    #[serde(default)]
    pub input: String,
    pub confidence: f64,
    pub response: Vec<String>,
}

pub const GREETING: &str = "Hi, I'm the pizza bot. What size pizza would you like?";

pub fn routes() -> Router<Db> {
    Router::new()
        .route("/dialogs", get(list_dialogs))
        .route("/dialogs/{dialog_id}/conversation", post(converse))
}

async fn list_dialogs(State(db): State<Db>) -> Json<DialogCollection> {
    let store = db.read().await;
    Json(DialogCollection {
        dialogs: store.dialogs.values().cloned().collect(),
    })
}

/// Reads the form fields `input`, `client_id` and `conversation_id`. A turn
/// without a conversation id starts conversation 1 with the greeting.
async fn converse(
    State(db): State<Db>,
    Path(dialog_id): Path<String>,
    mut form: Multipart,
) -> Result<Json<Conversation>, WatsonError> {
    if !db.read().await.dialogs.contains_key(&dialog_id) {
        return Err(WatsonError::not_found(format!("Dialog {dialog_id} not found")));
    }

    let mut input = String::new();
    let mut client_id = None;
    let mut conversation_id = None;
    while let Some(field) = form
        .next_field()
        .await
        .map_err(|e| WatsonError::bad_request(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let value = field
            .text()
            .await
            .map_err(|e| WatsonError::bad_request(e.to_string()))?;
        match name.as_str() {
            "input" => input = value,
            "client_id" => client_id = Some(parse_id(&name, &value)?),
            "conversation_id" => conversation_id = Some(parse_id(&name, &value)?),
            _ => {}
        }
    }

    let response = match conversation_id {
        None => vec![GREETING.to_string()],
        Some(_) => vec![format!("You said: {input}")],
    };
    Ok(Json(Conversation {
        conversation_id: conversation_id.unwrap_or(1),
        client_id: client_id.unwrap_or(1),
        input,
        confidence: 1.0,
        response,
    }))
}

fn parse_id(name: &str, value: &str) -> Result<i64, WatsonError> {
    value
        .trim()
        .parse()
        .map_err(|_| WatsonError::bad_request(format!("Invalid {name}: {value}")))
}
