//! Wire models for Assistant v1.
//!
//! These types mirror the service's JSON field for field. Fields the service
//! may omit are `Option` or default to an empty `Vec`; nothing is validated
//! client-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

/// Arbitrary JSON object attached to workspaces, entities, nodes and contexts.
pub type Metadata = Map<String, Json>;

/// Paging information returned by list operations.
///
/// `next_cursor` is absent on the last page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub refresh_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

// ---------------------------------------------------------------------------
// Workspaces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub learning_opt_out: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<WorkspaceSystemSettings>,
    pub workspace_id: String,
    /// One of `Non Existent`, `Training`, `Failed`, `Available`, `Unavailable`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intents: Vec<Intent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dialog_nodes: Vec<DialogNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counterexamples: Vec<Counterexample>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSystemSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooling: Option<Tooling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<Disambiguation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_agent_assist: Option<Metadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tooling {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_generic_responses: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Disambiguation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub none_of_the_above_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `auto` or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceCollection {
    pub workspaces: Vec<Workspace>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Intents and examples
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentCollection {
    pub intents: Vec<Intent>,
    pub pagination: Pagination,
}

/// An intent as sent in a create or update request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateIntent {
    pub intent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

impl CreateIntent {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<Mention>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Example {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl From<&str> for Example {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleCollection {
    pub examples: Vec<Example>,
    pub pagination: Pagination,
}

/// A contextual entity mention inside an example: `[start, end)` offsets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub entity: String,
    pub location: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Counterexample {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Counterexample {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl From<&str> for Counterexample {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterexampleCollection {
    pub counterexamples: Vec<Counterexample>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Entities, values and synonyms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityCollection {
    pub entities: Vec<Entity>,
    pub pagination: Pagination,
}

/// An entity as sent in a create or update request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEntity {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<CreateValue>,
}

impl CreateEntity {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Self::default()
        }
    }
}

/// An example that mentions an entity, as returned by `list_mentions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMention {
    pub text: String,
    pub intent: String,
    pub location: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMentionCollection {
    pub examples: Vec<EntityMention>,
    pub pagination: Pagination,
}

/// Value types accepted by the service.
pub mod value_type {
    pub const SYNONYMS: &str = "synonyms";
    pub const PATTERNS: &str = "patterns";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(rename = "type", default = "default_value_type")]
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

fn default_value_type() -> String {
    value_type::SYNONYMS.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueCollection {
    pub values: Vec<Value>,
    pub pagination: Pagination,
}

/// A value as sent in a create or update request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
}

impl CreateValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Synonym {
    pub synonym: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynonymCollection {
    pub synonyms: Vec<Synonym>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Dialog nodes
// ---------------------------------------------------------------------------

/// Node types accepted by the service.
pub mod node_type {
    pub const STANDARD: &str = "standard";
    pub const EVENT_HANDLER: &str = "event_handler";
    pub const FRAME: &str = "frame";
    pub const SLOT: &str = "slot";
    pub const RESPONSE_CONDITION: &str = "response_condition";
    pub const FOLDER: &str = "folder";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNode {
    pub dialog_node: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_sibling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<DialogNodeNextStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<DialogNodeAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out_slots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl DialogNode {
    pub fn new(dialog_node: impl Into<String>) -> Self {
        Self {
            dialog_node: dialog_node.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeNextStep {
    /// `get_user_input`, `skip_user_input`, `jump_to`, `reprompt`, ...
    pub behavior: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    /// `condition`, `client`, `user_input` or `body`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeAction {
    pub name: String,
    /// `client`, `server`, `cloud_function`, `web_action`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Metadata>,
    pub result_variable: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeCollection {
    pub dialog_nodes: Vec<DialogNode>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl MessageInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeIntent {
    pub intent: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureGroup {
    pub group: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntity {
    pub entity: String,
    pub location: Vec<i64>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<CaptureGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContextMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Conversation state, round-tripped between turns.
///
/// Skill variables the dialog sets live in `variables`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageContextMetadata>,
    #[serde(flatten)]
    pub variables: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogMessage {
    /// `info`, `error` or `warn`.
    pub level: String,
    pub msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeOutputOptionsElement {
    pub label: String,
    pub value: Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogRuntimeResponseGeneric {
    /// `text`, `pause`, `image`, `option`, `connect_to_agent`, `suggestion`.
    pub response_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<DialogNodeOutputOptionsElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_to_human_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
}

/// Output of a dialog turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputData {
    #[serde(default)]
    pub log_messages: Vec<LogMessage>,
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic: Vec<DialogRuntimeResponseGeneric>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes_visited: Vec<String>,
    #[serde(flatten)]
    pub extra: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub input: MessageInput,
    #[serde(default)]
    pub intents: Vec<RuntimeIntent>,
    #[serde(default)]
    pub entities: Vec<RuntimeEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(default)]
    pub context: Context,
    #[serde(default)]
    pub output: OutputData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<DialogNodeAction>,
}

/// A message request as recorded in the conversation logs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intents: Vec<RuntimeIntent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<RuntimeEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputData>,
}

// ---------------------------------------------------------------------------
// Logs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub request: MessageRequest,
    pub response: MessageResponse,
    pub log_id: String,
    pub request_timestamp: String,
    pub response_timestamp: String,
    pub workspace_id: String,
    pub language: String,
}

/// Paging information for log listings; logs page only forwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogPagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogCollection {
    pub logs: Vec<Log>,
    pub pagination: LogPagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_from_service_json() {
        let raw = r#"{
            "name": "Car Dashboard",
            "language": "en",
            "learning_opt_out": false,
            "workspace_id": "ws-1",
            "status": "Available",
            "created": "2015-05-14T12:34:56.789Z",
            "counterexamples": [{"text": "Make me a sandwich"}],
            "system_settings": {"disambiguation": {"enabled": true, "sensitivity": "high"}}
        }"#;
        let ws: Workspace = serde_json::from_str(raw).unwrap();
        assert_eq!(ws.name, "Car Dashboard");
        assert_eq!(ws.status.as_deref(), Some("Available"));
        assert_eq!(ws.created.unwrap().timestamp_millis(), 1_431_606_896_789);
        assert_eq!(ws.counterexamples[0].text, "Make me a sandwich");
        let disambiguation = ws.system_settings.unwrap().disambiguation.unwrap();
        assert_eq!(disambiguation.enabled, Some(true));
        assert!(ws.intents.is_empty());
    }

    #[test]
    fn pagination_last_page_has_no_cursor() {
        let raw = r#"{"refresh_url": "/v1/workspaces?version=2019-02-28&page_limit=1"}"#;
        let p: Pagination = serde_json::from_str(raw).unwrap();
        assert!(p.next_cursor.is_none());
        assert!(p.next_url.is_none());
    }

    #[test]
    fn value_type_is_renamed_on_the_wire() {
        let value = CreateValue {
            value: "Boston".into(),
            value_type: Some(value_type::PATTERNS.into()),
            patterns: vec!["B\\w+".into()],
            ..CreateValue::default()
        };
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["type"], "patterns");
        assert!(json.get("synonyms").is_none());

        let parsed: Value = serde_json::from_str(r#"{"value":"Boston"}"#).unwrap();
        assert_eq!(parsed.value_type, "synonyms");
    }

    #[test]
    fn context_keeps_skill_variables() {
        let raw = r#"{"conversation_id":"c1","system":{"dialog_turn_counter":1},"user_name":"Ada"}"#;
        let ctx: Context = serde_json::from_str(raw).unwrap();
        assert_eq!(ctx.conversation_id.as_deref(), Some("c1"));
        assert_eq!(ctx.variables["user_name"], "Ada");
        assert!(!ctx.variables.contains_key("system"));

        let back = serde_json::to_value(&ctx).unwrap();
        assert_eq!(back["user_name"], "Ada");
    }

    #[test]
    fn message_response_with_generic_output() {
        let raw = r#"{
            "input": {"text": "turn on the lights"},
            "intents": [{"intent": "turn_on", "confidence": 0.97}],
            "entities": [{"entity": "appliance", "location": [12, 18], "value": "lights", "confidence": 1}],
            "context": {"conversation_id": "c1"},
            "output": {
                "log_messages": [],
                "text": ["Ok, turning on the lights."],
                "generic": [{"response_type": "text", "text": "Ok, turning on the lights."}],
                "nodes_visited": ["node_1"]
            }
        }"#;
        let response: MessageResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.intents[0].intent, "turn_on");
        assert_eq!(response.entities[0].location, vec![12, 18]);
        assert_eq!(response.output.generic[0].response_type, "text");
        assert_eq!(response.output.nodes_visited, vec!["node_1"]);
    }
}
