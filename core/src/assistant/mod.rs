//! Assistant v1: workspaces, intents, entities, dialog nodes, logs and the
//! message endpoint.
//!
//! # Design
//! `AssistantClient` holds only the service endpoint and carries no mutable
//! state between calls. Each operation turns an options value into a
//! [`ServiceCall`] whose parser knows the response model; executing the
//! request is the caller's job.

pub mod model;
pub mod options;

use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, JsonBody, RequestBuilder};
use crate::service::{ServiceCall, ServiceCore};

use model::*;
use options::*;

/// Service name used for configuration lookup.
pub const SERVICE_NAME: &str = "assistant";

/// Synchronous, stateless client for Assistant v1.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    core: ServiceCore,
}

impl AssistantClient {
    /// Build a client from a service config. The config must carry a
    /// `version` date.
    pub fn new(config: &ServiceConfig) -> Result<Self, ApiError> {
        Ok(Self {
            core: ServiceCore::new(SERVICE_NAME, config)?.require_version()?,
        })
    }

    /// Shorthand for an unauthenticated client, mostly useful in tests.
    pub fn with_base_url(version: &str, base_url: &str) -> Result<Self, ApiError> {
        Self::new(&ServiceConfig::new(base_url).with_version(version))
    }

    pub fn core(&self) -> &ServiceCore {
        &self.core
    }

    fn request(&self, method: HttpMethod, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let mut path = vec!["v1"];
        path.extend_from_slice(segments);
        self.core.request(method, &path)
    }

    // -- message ------------------------------------------------------------

    pub fn message(&self, options: &MessageOptions) -> Result<ServiceCall<MessageResponse>, ApiError> {
        let body = JsonBody::new()
            .field_opt("input", options.input())?
            .list("intents", options.intents())?
            .list("entities", options.entities())?
            .field_opt("alternate_intents", options.alternate_intents())?
            .field_opt("context", options.context())?
            .field_opt("output", options.output())?
            .into_value();
        let request = self
            .request(HttpMethod::Post, &["workspaces", options.workspace_id(), "message"])?
            .query_opt("nodes_visited_details", options.nodes_visited_details())
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    // -- workspaces ---------------------------------------------------------

    pub fn list_workspaces(
        &self,
        options: &ListWorkspacesOptions,
    ) -> Result<ServiceCall<WorkspaceCollection>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["workspaces"])?
            .query_opt("page_limit", options.page_limit())
            .query_opt("include_count", options.include_count())
            .query_opt("sort", options.sort())
            .query_opt("cursor", options.cursor())
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn create_workspace(&self, options: &CreateWorkspaceOptions) -> Result<ServiceCall<Workspace>, ApiError> {
        let body = JsonBody::new()
            .field_opt("name", options.name())?
            .field_opt("description", options.description())?
            .field_opt("language", options.language())?
            .list("intents", options.intents())?
            .list("entities", options.entities())?
            .list("dialog_nodes", options.dialog_nodes())?
            .list("counterexamples", options.counterexamples())?
            .field_opt("metadata", options.metadata())?
            .field_opt("learning_opt_out", options.learning_opt_out())?
            .field_opt("system_settings", options.system_settings())?
            .into_value();
        let request = self.request(HttpMethod::Post, &["workspaces"])?.json(&body)?.build();
        Ok(ServiceCall::json(request))
    }

    pub fn get_workspace(&self, options: &GetWorkspaceOptions) -> Result<ServiceCall<Workspace>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["workspaces", options.workspace_id()])?
            .query_opt("export", options.export())
            .query_opt("include_audit", options.include_audit())
            .query_opt("sort", options.sort())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn update_workspace(&self, options: &UpdateWorkspaceOptions) -> Result<ServiceCall<Workspace>, ApiError> {
        let body = JsonBody::new()
            .field_opt("name", options.name())?
            .field_opt("description", options.description())?
            .field_opt("language", options.language())?
            .list("intents", options.intents())?
            .list("entities", options.entities())?
            .list("dialog_nodes", options.dialog_nodes())?
            .list("counterexamples", options.counterexamples())?
            .field_opt("metadata", options.metadata())?
            .field_opt("learning_opt_out", options.learning_opt_out())?
            .field_opt("system_settings", options.system_settings())?
            .into_value();
        let request = self
            .request(HttpMethod::Post, &["workspaces", options.workspace_id()])?
            .query_opt("append", options.append())
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn delete_workspace(&self, options: &DeleteWorkspaceOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self
            .request(HttpMethod::Delete, &["workspaces", options.workspace_id()])?
            .build();
        Ok(ServiceCall::empty(request))
    }

    // -- intents ------------------------------------------------------------

    pub fn list_intents(&self, options: &ListIntentsOptions) -> Result<ServiceCall<IntentCollection>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["workspaces", options.workspace_id(), "intents"])?
            .query_opt("export", options.export())
            .query_opt("page_limit", options.page_limit())
            .query_opt("include_count", options.include_count())
            .query_opt("sort", options.sort())
            .query_opt("cursor", options.cursor())
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn create_intent(&self, options: &CreateIntentOptions) -> Result<ServiceCall<Intent>, ApiError> {
        let body = JsonBody::new()
            .field("intent", options.intent())?
            .field_opt("description", options.description())?
            .list("examples", options.examples())?
            .into_value();
        let request = self
            .request(HttpMethod::Post, &["workspaces", options.workspace_id(), "intents"])?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn get_intent(&self, options: &GetIntentOptions) -> Result<ServiceCall<Intent>, ApiError> {
        let request = self
            .request(
                HttpMethod::Get,
                &["workspaces", options.workspace_id(), "intents", options.intent()],
            )?
            .query_opt("export", options.export())
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn update_intent(&self, options: &UpdateIntentOptions) -> Result<ServiceCall<Intent>, ApiError> {
        let body = JsonBody::new()
            .field_opt("intent", options.new_intent())?
            .field_opt("description", options.new_description())?
            .list("examples", options.new_examples())?
            .into_value();
        let request = self
            .request(
                HttpMethod::Post,
                &["workspaces", options.workspace_id(), "intents", options.intent()],
            )?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn delete_intent(&self, options: &DeleteIntentOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self
            .request(
                HttpMethod::Delete,
                &["workspaces", options.workspace_id(), "intents", options.intent()],
            )?
            .build();
        Ok(ServiceCall::empty(request))
    }

    // -- examples -----------------------------------------------------------

    pub fn list_examples(&self, options: &ListExamplesOptions) -> Result<ServiceCall<ExampleCollection>, ApiError> {
        let request = self
            .request(
                HttpMethod::Get,
                &["workspaces", options.workspace_id(), "intents", options.intent(), "examples"],
            )?
            .query_opt("page_limit", options.page_limit())
            .query_opt("include_count", options.include_count())
            .query_opt("sort", options.sort())
            .query_opt("cursor", options.cursor())
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn create_example(&self, options: &CreateExampleOptions) -> Result<ServiceCall<Example>, ApiError> {
        let body = JsonBody::new()
            .field("text", options.text())?
            .list("mentions", options.mentions())?
            .into_value();
        let request = self
            .request(
                HttpMethod::Post,
                &["workspaces", options.workspace_id(), "intents", options.intent(), "examples"],
            )?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn get_example(&self, options: &GetExampleOptions) -> Result<ServiceCall<Example>, ApiError> {
        let request = self
            .request(
                HttpMethod::Get,
                &[
                    "workspaces",
                    options.workspace_id(),
                    "intents",
                    options.intent(),
                    "examples",
                    options.text(),
                ],
            )?
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn update_example(&self, options: &UpdateExampleOptions) -> Result<ServiceCall<Example>, ApiError> {
        let body = JsonBody::new()
            .field_opt("text", options.new_text())?
            .list("mentions", options.new_mentions())?
            .into_value();
        let request = self
            .request(
                HttpMethod::Post,
                &[
                    "workspaces",
                    options.workspace_id(),
                    "intents",
                    options.intent(),
                    "examples",
                    options.text(),
                ],
            )?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn delete_example(&self, options: &DeleteExampleOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self
            .request(
                HttpMethod::Delete,
                &[
                    "workspaces",
                    options.workspace_id(),
                    "intents",
                    options.intent(),
                    "examples",
                    options.text(),
                ],
            )?
            .build();
        Ok(ServiceCall::empty(request))
    }

    // -- counterexamples ----------------------------------------------------

    pub fn list_counterexamples(
        &self,
        options: &ListCounterexamplesOptions,
    ) -> Result<ServiceCall<CounterexampleCollection>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["workspaces", options.workspace_id(), "counterexamples"])?
            .query_opt("page_limit", options.page_limit())
            .query_opt("include_count", options.include_count())
            .query_opt("sort", options.sort())
            .query_opt("cursor", options.cursor())
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn create_counterexample(
        &self,
        options: &CreateCounterexampleOptions,
    ) -> Result<ServiceCall<Counterexample>, ApiError> {
        let body = JsonBody::new().field("text", options.text())?.into_value();
        let request = self
            .request(HttpMethod::Post, &["workspaces", options.workspace_id(), "counterexamples"])?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn get_counterexample(
        &self,
        options: &GetCounterexampleOptions,
    ) -> Result<ServiceCall<Counterexample>, ApiError> {
        let request = self
            .request(
                HttpMethod::Get,
                &["workspaces", options.workspace_id(), "counterexamples", options.text()],
            )?
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn update_counterexample(
        &self,
        options: &UpdateCounterexampleOptions,
    ) -> Result<ServiceCall<Counterexample>, ApiError> {
        let body = JsonBody::new().field_opt("text", options.new_text())?.into_value();
        let request = self
            .request(
                HttpMethod::Post,
                &["workspaces", options.workspace_id(), "counterexamples", options.text()],
            )?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn delete_counterexample(&self, options: &DeleteCounterexampleOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self
            .request(
                HttpMethod::Delete,
                &["workspaces", options.workspace_id(), "counterexamples", options.text()],
            )?
            .build();
        Ok(ServiceCall::empty(request))
    }

    // -- entities -----------------------------------------------------------

    pub fn list_entities(&self, options: &ListEntitiesOptions) -> Result<ServiceCall<EntityCollection>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["workspaces", options.workspace_id(), "entities"])?
            .query_opt("export", options.export())
            .query_opt("page_limit", options.page_limit())
            .query_opt("include_count", options.include_count())
            .query_opt("sort", options.sort())
            .query_opt("cursor", options.cursor())
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn create_entity(&self, options: &CreateEntityOptions) -> Result<ServiceCall<Entity>, ApiError> {
        let body = JsonBody::new()
            .field("entity", options.entity())?
            .field_opt("description", options.description())?
            .field_opt("metadata", options.metadata())?
            .field_opt("fuzzy_match", options.fuzzy_match())?
            .list("values", options.values())?
            .into_value();
        let request = self
            .request(HttpMethod::Post, &["workspaces", options.workspace_id(), "entities"])?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn get_entity(&self, options: &GetEntityOptions) -> Result<ServiceCall<Entity>, ApiError> {
        let request = self
            .request(
                HttpMethod::Get,
                &["workspaces", options.workspace_id(), "entities", options.entity()],
            )?
            .query_opt("export", options.export())
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn update_entity(&self, options: &UpdateEntityOptions) -> Result<ServiceCall<Entity>, ApiError> {
        let body = JsonBody::new()
            .field_opt("entity", options.new_entity())?
            .field_opt("description", options.new_description())?
            .field_opt("metadata", options.new_metadata())?
            .field_opt("fuzzy_match", options.new_fuzzy_match())?
            .list("values", options.new_values())?
            .into_value();
        let request = self
            .request(
                HttpMethod::Post,
                &["workspaces", options.workspace_id(), "entities", options.entity()],
            )?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn delete_entity(&self, options: &DeleteEntityOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self
            .request(
                HttpMethod::Delete,
                &["workspaces", options.workspace_id(), "entities", options.entity()],
            )?
            .build();
        Ok(ServiceCall::empty(request))
    }

    pub fn list_mentions(
        &self,
        options: &ListMentionsOptions,
    ) -> Result<ServiceCall<EntityMentionCollection>, ApiError> {
        let request = self
            .request(
                HttpMethod::Get,
                &["workspaces", options.workspace_id(), "entities", options.entity(), "mentions"],
            )?
            .query_opt("export", options.export())
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    // -- values -------------------------------------------------------------

    pub fn list_values(&self, options: &ListValuesOptions) -> Result<ServiceCall<ValueCollection>, ApiError> {
        let request = self
            .request(
                HttpMethod::Get,
                &["workspaces", options.workspace_id(), "entities", options.entity(), "values"],
            )?
            .query_opt("export", options.export())
            .query_opt("page_limit", options.page_limit())
            .query_opt("include_count", options.include_count())
            .query_opt("sort", options.sort())
            .query_opt("cursor", options.cursor())
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn create_value(&self, options: &CreateValueOptions) -> Result<ServiceCall<Value>, ApiError> {
        let body = JsonBody::new()
            .field("value", options.value())?
            .field_opt("metadata", options.metadata())?
            .field_opt("type", options.value_type())?
            .list("synonyms", options.synonyms())?
            .list("patterns", options.patterns())?
            .into_value();
        let request = self
            .request(
                HttpMethod::Post,
                &["workspaces", options.workspace_id(), "entities", options.entity(), "values"],
            )?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn get_value(&self, options: &GetValueOptions) -> Result<ServiceCall<Value>, ApiError> {
        let request = self
            .request(
                HttpMethod::Get,
                &[
                    "workspaces",
                    options.workspace_id(),
                    "entities",
                    options.entity(),
                    "values",
                    options.value(),
                ],
            )?
            .query_opt("export", options.export())
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn update_value(&self, options: &UpdateValueOptions) -> Result<ServiceCall<Value>, ApiError> {
        let body = JsonBody::new()
            .field_opt("value", options.new_value())?
            .field_opt("metadata", options.new_metadata())?
            .field_opt("type", options.new_value_type())?
            .list("synonyms", options.new_synonyms())?
            .list("patterns", options.new_patterns())?
            .into_value();
        let request = self
            .request(
                HttpMethod::Post,
                &[
                    "workspaces",
                    options.workspace_id(),
                    "entities",
                    options.entity(),
                    "values",
                    options.value(),
                ],
            )?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn delete_value(&self, options: &DeleteValueOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self
            .request(
                HttpMethod::Delete,
                &[
                    "workspaces",
                    options.workspace_id(),
                    "entities",
                    options.entity(),
                    "values",
                    options.value(),
                ],
            )?
            .build();
        Ok(ServiceCall::empty(request))
    }

    // -- synonyms -----------------------------------------------------------

    pub fn list_synonyms(&self, options: &ListSynonymsOptions) -> Result<ServiceCall<SynonymCollection>, ApiError> {
        let request = self
            .request(
                HttpMethod::Get,
                &[
                    "workspaces",
                    options.workspace_id(),
                    "entities",
                    options.entity(),
                    "values",
                    options.value(),
                    "synonyms",
                ],
            )?
            .query_opt("page_limit", options.page_limit())
            .query_opt("include_count", options.include_count())
            .query_opt("sort", options.sort())
            .query_opt("cursor", options.cursor())
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn create_synonym(&self, options: &CreateSynonymOptions) -> Result<ServiceCall<Synonym>, ApiError> {
        let body = JsonBody::new().field("synonym", options.synonym())?.into_value();
        let request = self
            .request(
                HttpMethod::Post,
                &[
                    "workspaces",
                    options.workspace_id(),
                    "entities",
                    options.entity(),
                    "values",
                    options.value(),
                    "synonyms",
                ],
            )?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn get_synonym(&self, options: &GetSynonymOptions) -> Result<ServiceCall<Synonym>, ApiError> {
        let request = self
            .request(
                HttpMethod::Get,
                &[
                    "workspaces",
                    options.workspace_id(),
                    "entities",
                    options.entity(),
                    "values",
                    options.value(),
                    "synonyms",
                    options.synonym(),
                ],
            )?
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn update_synonym(&self, options: &UpdateSynonymOptions) -> Result<ServiceCall<Synonym>, ApiError> {
        let body = JsonBody::new().field_opt("synonym", options.new_synonym())?.into_value();
        let request = self
            .request(
                HttpMethod::Post,
                &[
                    "workspaces",
                    options.workspace_id(),
                    "entities",
                    options.entity(),
                    "values",
                    options.value(),
                    "synonyms",
                    options.synonym(),
                ],
            )?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn delete_synonym(&self, options: &DeleteSynonymOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self
            .request(
                HttpMethod::Delete,
                &[
                    "workspaces",
                    options.workspace_id(),
                    "entities",
                    options.entity(),
                    "values",
                    options.value(),
                    "synonyms",
                    options.synonym(),
                ],
            )?
            .build();
        Ok(ServiceCall::empty(request))
    }

    // -- dialog nodes -------------------------------------------------------

    pub fn list_dialog_nodes(
        &self,
        options: &ListDialogNodesOptions,
    ) -> Result<ServiceCall<DialogNodeCollection>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["workspaces", options.workspace_id(), "dialog_nodes"])?
            .query_opt("page_limit", options.page_limit())
            .query_opt("include_count", options.include_count())
            .query_opt("sort", options.sort())
            .query_opt("cursor", options.cursor())
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn create_dialog_node(&self, options: &CreateDialogNodeOptions) -> Result<ServiceCall<DialogNode>, ApiError> {
        let body = JsonBody::new()
            .field("dialog_node", options.dialog_node())?
            .field_opt("description", options.description())?
            .field_opt("conditions", options.conditions())?
            .field_opt("parent", options.parent())?
            .field_opt("previous_sibling", options.previous_sibling())?
            .field_opt("output", options.output())?
            .field_opt("context", options.context())?
            .field_opt("metadata", options.metadata())?
            .field_opt("next_step", options.next_step())?
            .field_opt("title", options.title())?
            .field_opt("type", options.node_type())?
            .field_opt("event_name", options.event_name())?
            .field_opt("variable", options.variable())?
            .list("actions", options.actions())?
            .field_opt("digress_in", options.digress_in())?
            .field_opt("digress_out", options.digress_out())?
            .field_opt("digress_out_slots", options.digress_out_slots())?
            .field_opt("user_label", options.user_label())?
            .into_value();
        let request = self
            .request(HttpMethod::Post, &["workspaces", options.workspace_id(), "dialog_nodes"])?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn get_dialog_node(&self, options: &GetDialogNodeOptions) -> Result<ServiceCall<DialogNode>, ApiError> {
        let request = self
            .request(
                HttpMethod::Get,
                &["workspaces", options.workspace_id(), "dialog_nodes", options.dialog_node()],
            )?
            .query_opt("include_audit", options.include_audit())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn update_dialog_node(&self, options: &UpdateDialogNodeOptions) -> Result<ServiceCall<DialogNode>, ApiError> {
        let body = JsonBody::new()
            .field_opt("dialog_node", options.new_dialog_node())?
            .field_opt("description", options.new_description())?
            .field_opt("conditions", options.new_conditions())?
            .field_opt("parent", options.new_parent())?
            .field_opt("previous_sibling", options.new_previous_sibling())?
            .field_opt("output", options.new_output())?
            .field_opt("context", options.new_context())?
            .field_opt("metadata", options.new_metadata())?
            .field_opt("next_step", options.new_next_step())?
            .field_opt("title", options.new_title())?
            .field_opt("type", options.new_node_type())?
            .field_opt("event_name", options.new_event_name())?
            .field_opt("variable", options.new_variable())?
            .list("actions", options.new_actions())?
            .field_opt("digress_in", options.new_digress_in())?
            .field_opt("digress_out", options.new_digress_out())?
            .field_opt("digress_out_slots", options.new_digress_out_slots())?
            .field_opt("user_label", options.new_user_label())?
            .into_value();
        let request = self
            .request(
                HttpMethod::Post,
                &["workspaces", options.workspace_id(), "dialog_nodes", options.dialog_node()],
            )?
            .json(&body)?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn delete_dialog_node(&self, options: &DeleteDialogNodeOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self
            .request(
                HttpMethod::Delete,
                &["workspaces", options.workspace_id(), "dialog_nodes", options.dialog_node()],
            )?
            .build();
        Ok(ServiceCall::empty(request))
    }

    // -- logs and user data -------------------------------------------------

    pub fn list_logs(&self, options: &ListLogsOptions) -> Result<ServiceCall<LogCollection>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["workspaces", options.workspace_id(), "logs"])?
            .query_opt("sort", options.sort())
            .query_opt("filter", options.filter())
            .query_opt("page_limit", options.page_limit())
            .query_opt("cursor", options.cursor())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn list_all_logs(&self, options: &ListAllLogsOptions) -> Result<ServiceCall<LogCollection>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["logs"])?
            .query("filter", options.filter())
            .query_opt("sort", options.sort())
            .query_opt("page_limit", options.page_limit())
            .query_opt("cursor", options.cursor())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn delete_user_data(&self, options: &DeleteUserDataOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self
            .request(HttpMethod::Delete, &["user_data"])?
            .query("customer_id", options.customer_id())
            .build();
        Ok(ServiceCall::empty(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;

    const VERSION: &str = "2019-02-28";

    fn client() -> AssistantClient {
        AssistantClient::with_base_url(VERSION, "http://localhost:3000/assistant/api").unwrap()
    }

    fn body_json(call: &ServiceCall<impl Sized>) -> serde_json::Value {
        let body = call.request().body.as_ref().unwrap().as_json().unwrap();
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn client_requires_a_version() {
        let err = AssistantClient::new(&ServiceConfig::new("http://localhost:3000")).unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "version" }));
    }

    #[test]
    fn create_counterexample_request() {
        let options = CreateCounterexampleOptions::builder("ws-1", "Make me a sandwich")
            .build()
            .unwrap();
        let call = client().create_counterexample(&options).unwrap();
        let req = call.request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.url,
            "http://localhost:3000/assistant/api/v1/workspaces/ws-1/counterexamples?version=2019-02-28"
        );
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(body_json(&call), serde_json::json!({"text": "Make me a sandwich"}));
    }

    #[test]
    fn dot_texts_never_address_the_collection() {
        let delete = DeleteCounterexampleOptions::builder("ws-1", "..").build().unwrap();
        let err = client().delete_counterexample(&delete).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));

        let get = GetCounterexampleOptions::builder("ws-1", ".").build().unwrap();
        let err = client().get_counterexample(&get).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn get_counterexample_encodes_text_in_path() {
        let options = GetCounterexampleOptions::builder("ws-1", "Make me a sandwich")
            .include_audit(true)
            .build()
            .unwrap();
        let call = client().get_counterexample(&options).unwrap();
        assert_eq!(
            call.request().url,
            "http://localhost:3000/assistant/api/v1/workspaces/ws-1/counterexamples/Make%20me%20a%20sandwich?version=2019-02-28&include_audit=true"
        );
        assert!(call.request().body.is_none());
    }

    #[test]
    fn list_workspaces_query_parameters() {
        let options = ListWorkspacesOptionsBuilder::new()
            .page_limit(1)
            .include_count(true)
            .sort("-name")
            .cursor("c2")
            .build()
            .unwrap();
        let req = client().list_workspaces(&options).unwrap().into_request();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.query_param("page_limit").as_deref(), Some("1"));
        assert_eq!(req.query_param("include_count").as_deref(), Some("true"));
        assert_eq!(req.query_param("sort").as_deref(), Some("-name"));
        assert_eq!(req.query_param("cursor").as_deref(), Some("c2"));
        assert_eq!(req.query_param("include_audit"), None);
    }

    #[test]
    fn update_intent_sends_renamed_fields() {
        let options = UpdateIntentOptions::builder("ws-1", "hello")
            .new_intent("greeting")
            .add_new_example("hi")
            .build()
            .unwrap();
        let call = client().update_intent(&options).unwrap();
        assert!(call.request().url.contains("/v1/workspaces/ws-1/intents/hello?"));
        assert_eq!(
            body_json(&call),
            serde_json::json!({"intent": "greeting", "examples": [{"text": "hi"}]})
        );
    }

    #[test]
    fn create_value_maps_value_type_to_type() {
        let options = CreateValueOptions::builder("ws", "city", "Boston")
            .value_type(model::value_type::SYNONYMS)
            .add_synonym("Beantown")
            .build()
            .unwrap();
        let call = client().create_value(&options).unwrap();
        assert_eq!(
            body_json(&call),
            serde_json::json!({"value": "Boston", "type": "synonyms", "synonyms": ["Beantown"]})
        );
    }

    #[test]
    fn create_dialog_node_body() {
        let options = CreateDialogNodeOptions::builder("ws", "greeting")
            .conditions("#hello")
            .node_type(model::node_type::STANDARD)
            .next_step(DialogNodeNextStep {
                behavior: "jump_to".into(),
                dialog_node: Some("menu".into()),
                selector: Some("body".into()),
            })
            .build()
            .unwrap();
        let body = body_json(&client().create_dialog_node(&options).unwrap());
        assert_eq!(body["dialog_node"], "greeting");
        assert_eq!(body["type"], "standard");
        assert_eq!(body["next_step"]["behavior"], "jump_to");
        assert!(body.get("actions").is_none());
    }

    #[test]
    fn message_request_and_response() {
        let options = MessageOptions::builder("ws-1")
            .input(MessageInput::text("turn on the lights"))
            .alternate_intents(true)
            .build()
            .unwrap();
        let call = client().message(&options).unwrap();
        assert!(call.request().url.contains("/v1/workspaces/ws-1/message?"));
        assert_eq!(
            body_json(&call),
            serde_json::json!({"input": {"text": "turn on the lights"}, "alternate_intents": true})
        );

        let response = call
            .parse(HttpResponse::new(
                200,
                r#"{"input":{"text":"turn on the lights"},"intents":[{"intent":"turn_on","confidence":0.9}],
                    "entities":[],"context":{"conversation_id":"c1"},"output":{"log_messages":[],"text":["Ok."]}}"#,
            ))
            .unwrap();
        assert_eq!(response.intents[0].intent, "turn_on");
        assert_eq!(response.context.conversation_id.as_deref(), Some("c1"));
        assert_eq!(response.output.text, vec!["Ok."]);
    }

    #[test]
    fn list_all_logs_and_delete_user_data() {
        let options = ListAllLogsOptions::builder("language::en,request.context.metadata.deployment::testDeployment")
            .page_limit(2)
            .build()
            .unwrap();
        let req = client().list_all_logs(&options).unwrap().into_request();
        assert!(req.url.contains("/v1/logs?"));
        assert_eq!(
            req.query_param("filter").as_deref(),
            Some("language::en,request.context.metadata.deployment::testDeployment")
        );

        let options = DeleteUserDataOptions::builder("customer-1").build().unwrap();
        let req = client().delete_user_data(&options).unwrap().into_request();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.query_param("customer_id").as_deref(), Some("customer-1"));
    }

    #[test]
    fn delete_workspace_parses_empty_success() {
        let options = DeleteWorkspaceOptions::builder("ws-1").build().unwrap();
        let call = client().delete_workspace(&options).unwrap();
        assert_eq!(call.request().method, HttpMethod::Delete);
        assert!(call.parse(HttpResponse::new(200, "{}")).is_ok());
        let err = call
            .parse(HttpResponse::new(404, r#"{"error":"Resource not found","code":404}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }
}
