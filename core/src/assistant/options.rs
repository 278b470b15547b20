//! Options for every Assistant v1 operation.
//!
//! List operations share the paging parameters `page_limit`, `include_count`,
//! `sort`, `cursor` and `include_audit`. `sort` takes a field name, with a
//! leading `-` for descending order.

use super::model::{
    Context, Counterexample, CreateEntity, CreateIntent, CreateValue, DialogNode, DialogNodeAction,
    DialogNodeNextStep, Example, Mention, MessageInput, Metadata, OutputData, RuntimeEntity, RuntimeIntent,
    WorkspaceSystemSettings,
};
use crate::options::request_options;

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

request_options! {
    /// Send user input to a workspace and receive the dialog's response.
    pub struct MessageOptions => MessageOptionsBuilder {
        required { workspace_id: String }
        optional {
            input: MessageInput,
            /// Return up to ten intents instead of only the top one.
            alternate_intents: bool,
            context: Context,
            output: OutputData,
            /// Include the names of visited dialog nodes in the output.
            nodes_visited_details: bool,
        }
        lists {
            intents / add_intent: RuntimeIntent,
            entities / add_entity: RuntimeEntity,
        }
    }
}

// ---------------------------------------------------------------------------
// Workspaces
// ---------------------------------------------------------------------------

request_options! {
    pub struct ListWorkspacesOptions => ListWorkspacesOptionsBuilder {
        required {}
        optional {
            page_limit: i64,
            include_count: bool,
            sort: String,
            cursor: String,
            include_audit: bool,
        }
        lists {}
    }
}

request_options! {
    pub struct CreateWorkspaceOptions => CreateWorkspaceOptionsBuilder {
        required {}
        optional {
            name: String,
            description: String,
            language: String,
            metadata: Metadata,
            learning_opt_out: bool,
            system_settings: WorkspaceSystemSettings,
        }
        lists {
            intents / add_intent: CreateIntent,
            entities / add_entity: CreateEntity,
            dialog_nodes / add_dialog_node: DialogNode,
            counterexamples / add_counterexample: Counterexample,
        }
    }
}

request_options! {
    pub struct GetWorkspaceOptions => GetWorkspaceOptionsBuilder {
        required { workspace_id: String }
        optional {
            /// Include the full workspace content.
            export: bool,
            include_audit: bool,
            /// Only `stable` is accepted; sorts exported content.
            sort: String,
        }
        lists {}
    }
}

request_options! {
    pub struct UpdateWorkspaceOptions => UpdateWorkspaceOptionsBuilder {
        required { workspace_id: String }
        optional {
            name: String,
            description: String,
            language: String,
            metadata: Metadata,
            learning_opt_out: bool,
            system_settings: WorkspaceSystemSettings,
            /// Add the new content to the workspace instead of replacing it.
            append: bool,
        }
        lists {
            intents / add_intent: CreateIntent,
            entities / add_entity: CreateEntity,
            dialog_nodes / add_dialog_node: DialogNode,
            counterexamples / add_counterexample: Counterexample,
        }
    }
}

request_options! {
    pub struct DeleteWorkspaceOptions => DeleteWorkspaceOptionsBuilder {
        required { workspace_id: String }
        optional {}
        lists {}
    }
}

// ---------------------------------------------------------------------------
// Intents
// ---------------------------------------------------------------------------

request_options! {
    pub struct ListIntentsOptions => ListIntentsOptionsBuilder {
        required { workspace_id: String }
        optional {
            export: bool,
            page_limit: i64,
            include_count: bool,
            sort: String,
            cursor: String,
            include_audit: bool,
        }
        lists {}
    }
}

request_options! {
    pub struct CreateIntentOptions => CreateIntentOptionsBuilder {
        required { workspace_id: String, intent: String }
        optional { description: String }
        lists { examples / add_example: Example }
    }
}

request_options! {
    pub struct GetIntentOptions => GetIntentOptionsBuilder {
        required { workspace_id: String, intent: String }
        optional { export: bool, include_audit: bool }
        lists {}
    }
}

request_options! {
    pub struct UpdateIntentOptions => UpdateIntentOptionsBuilder {
        required { workspace_id: String, intent: String }
        optional { new_intent: String, new_description: String }
        lists { new_examples / add_new_example: Example }
    }
}

request_options! {
    pub struct DeleteIntentOptions => DeleteIntentOptionsBuilder {
        required { workspace_id: String, intent: String }
        optional {}
        lists {}
    }
}

// ---------------------------------------------------------------------------
// Examples
// ---------------------------------------------------------------------------

request_options! {
    pub struct ListExamplesOptions => ListExamplesOptionsBuilder {
        required { workspace_id: String, intent: String }
        optional {
            page_limit: i64,
            include_count: bool,
            sort: String,
            cursor: String,
            include_audit: bool,
        }
        lists {}
    }
}

request_options! {
    pub struct CreateExampleOptions => CreateExampleOptionsBuilder {
        required { workspace_id: String, intent: String, text: String }
        optional {}
        lists { mentions / add_mention: Mention }
    }
}

request_options! {
    pub struct GetExampleOptions => GetExampleOptionsBuilder {
        required { workspace_id: String, intent: String, text: String }
        optional { include_audit: bool }
        lists {}
    }
}

request_options! {
    pub struct UpdateExampleOptions => UpdateExampleOptionsBuilder {
        required { workspace_id: String, intent: String, text: String }
        optional { new_text: String }
        lists { new_mentions / add_new_mention: Mention }
    }
}

request_options! {
    pub struct DeleteExampleOptions => DeleteExampleOptionsBuilder {
        required { workspace_id: String, intent: String, text: String }
        optional {}
        lists {}
    }
}

// ---------------------------------------------------------------------------
// Counterexamples
// ---------------------------------------------------------------------------

request_options! {
    pub struct ListCounterexamplesOptions => ListCounterexamplesOptionsBuilder {
        required { workspace_id: String }
        optional {
            page_limit: i64,
            include_count: bool,
            sort: String,
            cursor: String,
            include_audit: bool,
        }
        lists {}
    }
}

request_options! {
    /// Mark input text as irrelevant to every intent in the workspace.
    pub struct CreateCounterexampleOptions => CreateCounterexampleOptionsBuilder {
        required { workspace_id: String, text: String }
        optional {}
        lists {}
    }
}

request_options! {
    pub struct GetCounterexampleOptions => GetCounterexampleOptionsBuilder {
        required { workspace_id: String, text: String }
        optional { include_audit: bool }
        lists {}
    }
}

request_options! {
    pub struct UpdateCounterexampleOptions => UpdateCounterexampleOptionsBuilder {
        required { workspace_id: String, text: String }
        optional { new_text: String }
        lists {}
    }
}

request_options! {
    pub struct DeleteCounterexampleOptions => DeleteCounterexampleOptionsBuilder {
        required { workspace_id: String, text: String }
        optional {}
        lists {}
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

request_options! {
    pub struct ListEntitiesOptions => ListEntitiesOptionsBuilder {
        required { workspace_id: String }
        optional {
            export: bool,
            page_limit: i64,
            include_count: bool,
            sort: String,
            cursor: String,
            include_audit: bool,
        }
        lists {}
    }
}

request_options! {
    pub struct CreateEntityOptions => CreateEntityOptionsBuilder {
        required { workspace_id: String, entity: String }
        optional { description: String, metadata: Metadata, fuzzy_match: bool }
        lists { values / add_value: CreateValue }
    }
}

request_options! {
    pub struct GetEntityOptions => GetEntityOptionsBuilder {
        required { workspace_id: String, entity: String }
        optional { export: bool, include_audit: bool }
        lists {}
    }
}

request_options! {
    pub struct UpdateEntityOptions => UpdateEntityOptionsBuilder {
        required { workspace_id: String, entity: String }
        optional {
            new_entity: String,
            new_description: String,
            new_metadata: Metadata,
            new_fuzzy_match: bool,
        }
        lists { new_values / add_new_value: CreateValue }
    }
}

request_options! {
    pub struct DeleteEntityOptions => DeleteEntityOptionsBuilder {
        required { workspace_id: String, entity: String }
        optional {}
        lists {}
    }
}

request_options! {
    /// List the examples that mention an entity.
    pub struct ListMentionsOptions => ListMentionsOptionsBuilder {
        required { workspace_id: String, entity: String }
        optional { export: bool, include_audit: bool }
        lists {}
    }
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

request_options! {
    pub struct ListValuesOptions => ListValuesOptionsBuilder {
        required { workspace_id: String, entity: String }
        optional {
            export: bool,
            page_limit: i64,
            include_count: bool,
            sort: String,
            cursor: String,
            include_audit: bool,
        }
        lists {}
    }
}

request_options! {
    pub struct CreateValueOptions => CreateValueOptionsBuilder {
        required { workspace_id: String, entity: String, value: String }
        optional {
            metadata: Metadata,
            /// `synonyms` or `patterns`.
            value_type: String,
        }
        lists {
            synonyms / add_synonym: String,
            patterns / add_pattern: String,
        }
    }
}

request_options! {
    pub struct GetValueOptions => GetValueOptionsBuilder {
        required { workspace_id: String, entity: String, value: String }
        optional { export: bool, include_audit: bool }
        lists {}
    }
}

request_options! {
    pub struct UpdateValueOptions => UpdateValueOptionsBuilder {
        required { workspace_id: String, entity: String, value: String }
        optional { new_value: String, new_metadata: Metadata, new_value_type: String }
        lists {
            new_synonyms / add_new_synonym: String,
            new_patterns / add_new_pattern: String,
        }
    }
}

request_options! {
    pub struct DeleteValueOptions => DeleteValueOptionsBuilder {
        required { workspace_id: String, entity: String, value: String }
        optional {}
        lists {}
    }
}

// ---------------------------------------------------------------------------
// Synonyms
// ---------------------------------------------------------------------------

request_options! {
    pub struct ListSynonymsOptions => ListSynonymsOptionsBuilder {
        required { workspace_id: String, entity: String, value: String }
        optional {
            page_limit: i64,
            include_count: bool,
            sort: String,
            cursor: String,
            include_audit: bool,
        }
        lists {}
    }
}

request_options! {
    pub struct CreateSynonymOptions => CreateSynonymOptionsBuilder {
        required { workspace_id: String, entity: String, value: String, synonym: String }
        optional {}
        lists {}
    }
}

request_options! {
    pub struct GetSynonymOptions => GetSynonymOptionsBuilder {
        required { workspace_id: String, entity: String, value: String, synonym: String }
        optional { include_audit: bool }
        lists {}
    }
}

request_options! {
    pub struct UpdateSynonymOptions => UpdateSynonymOptionsBuilder {
        required { workspace_id: String, entity: String, value: String, synonym: String }
        optional { new_synonym: String }
        lists {}
    }
}

request_options! {
    pub struct DeleteSynonymOptions => DeleteSynonymOptionsBuilder {
        required { workspace_id: String, entity: String, value: String, synonym: String }
        optional {}
        lists {}
    }
}

// ---------------------------------------------------------------------------
// Dialog nodes
// ---------------------------------------------------------------------------

request_options! {
    pub struct ListDialogNodesOptions => ListDialogNodesOptionsBuilder {
        required { workspace_id: String }
        optional {
            page_limit: i64,
            include_count: bool,
            sort: String,
            cursor: String,
            include_audit: bool,
        }
        lists {}
    }
}

request_options! {
    pub struct CreateDialogNodeOptions => CreateDialogNodeOptionsBuilder {
        required { workspace_id: String, dialog_node: String }
        optional {
            description: String,
            conditions: String,
            parent: String,
            previous_sibling: String,
            output: Metadata,
            context: Metadata,
            metadata: Metadata,
            next_step: DialogNodeNextStep,
            title: String,
            node_type: String,
            event_name: String,
            variable: String,
            digress_in: String,
            digress_out: String,
            digress_out_slots: String,
            user_label: String,
        }
        lists { actions / add_action: DialogNodeAction }
    }
}

request_options! {
    pub struct GetDialogNodeOptions => GetDialogNodeOptionsBuilder {
        required { workspace_id: String, dialog_node: String }
        optional { include_audit: bool }
        lists {}
    }
}

request_options! {
    pub struct UpdateDialogNodeOptions => UpdateDialogNodeOptionsBuilder {
        required { workspace_id: String, dialog_node: String }
        optional {
            new_dialog_node: String,
            new_description: String,
            new_conditions: String,
            new_parent: String,
            new_previous_sibling: String,
            new_output: Metadata,
            new_context: Metadata,
            new_metadata: Metadata,
            new_next_step: DialogNodeNextStep,
            new_title: String,
            new_node_type: String,
            new_event_name: String,
            new_variable: String,
            new_digress_in: String,
            new_digress_out: String,
            new_digress_out_slots: String,
            new_user_label: String,
        }
        lists { new_actions / add_new_action: DialogNodeAction }
    }
}

request_options! {
    pub struct DeleteDialogNodeOptions => DeleteDialogNodeOptionsBuilder {
        required { workspace_id: String, dialog_node: String }
        optional {}
        lists {}
    }
}

// ---------------------------------------------------------------------------
// Logs and user data
// ---------------------------------------------------------------------------

request_options! {
    pub struct ListLogsOptions => ListLogsOptionsBuilder {
        required { workspace_id: String }
        optional {
            sort: String,
            /// Log search filter, e.g. `response.top_intent::hello`.
            filter: String,
            page_limit: i64,
            cursor: String,
        }
        lists {}
    }
}

request_options! {
    /// List logs across workspaces. The filter must name a workspace,
    /// deployment or language.
    pub struct ListAllLogsOptions => ListAllLogsOptionsBuilder {
        required { filter: String }
        optional { sort: String, page_limit: i64, cursor: String }
        lists {}
    }
}

request_options! {
    /// Delete every piece of data tagged with a customer id.
    pub struct DeleteUserDataOptions => DeleteUserDataOptionsBuilder {
        required { customer_id: String }
        optional {}
        lists {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn create_counterexample_from_required_fields() {
        let options = CreateCounterexampleOptions::builder("ws-1", "Make me a sandwich")
            .build()
            .unwrap();
        assert_eq!(options.text(), "Make me a sandwich");
        assert_eq!(options.workspace_id(), "ws-1");
    }

    #[test]
    fn create_counterexample_without_text_fails() {
        let err = CreateCounterexampleOptionsBuilder::new()
            .workspace_id("ws-1")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "text" }));
    }

    #[test]
    fn required_fields_are_reported_in_declaration_order() {
        let err = CreateSynonymOptionsBuilder::new().build().unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "workspace_id" }));
        let err = CreateSynonymOptions::builder("ws", "city", "Boston", "")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "synonym" }));
    }

    #[test]
    fn builders_without_required_fields_always_build() {
        assert!(ListWorkspacesOptionsBuilder::new().build().is_ok());
        assert!(CreateWorkspaceOptions::builder().build().is_ok());
    }

    #[test]
    fn list_all_logs_requires_filter() {
        let err = ListAllLogsOptionsBuilder::new().page_limit(5).build().unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "filter" }));
    }

    #[test]
    fn add_examples_in_order_then_replace() {
        let options = CreateIntentOptions::builder("ws", "hello")
            .add_example("hi")
            .add_example(Example::new("hey there"))
            .build()
            .unwrap();
        let texts: Vec<&str> = options.examples().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["hi", "hey there"]);

        let replaced = options
            .new_builder()
            .examples(vec![Example::new("good morning")])
            .build()
            .unwrap();
        assert_eq!(replaced.examples().len(), 1);
        assert_eq!(replaced.examples()[0].text, "good morning");
        assert_eq!(replaced.intent(), "hello");
    }

    #[test]
    fn new_builder_round_trips_every_kind_of_field() {
        let options = CreateWorkspaceOptions::builder()
            .name("Car Dashboard")
            .language("en")
            .learning_opt_out(true)
            .add_intent(CreateIntent::new("turn_on"))
            .add_counterexample("Make me a sandwich")
            .add_dialog_node(DialogNode::new("root"))
            .build()
            .unwrap();
        assert_eq!(options.new_builder().build().unwrap(), options);

        let update = UpdateDialogNodeOptions::builder("ws", "root")
            .new_title("Start")
            .add_new_action(DialogNodeAction {
                name: "lookup".into(),
                result_variable: "context.result".into(),
                ..DialogNodeAction::default()
            })
            .build()
            .unwrap();
        assert_eq!(update.new_builder().build().unwrap(), update);
    }

    #[test]
    fn new_builder_changes_only_the_cursor() {
        let first = ListCounterexamplesOptions::builder("ws")
            .page_limit(1)
            .sort("text")
            .include_count(true)
            .build()
            .unwrap();
        let next = first.new_builder().cursor("abc").build().unwrap();
        assert_eq!(next.cursor(), Some("abc"));
        assert_eq!(next.page_limit(), Some(1));
        assert_eq!(next.sort(), first.sort());
        assert_eq!(next.include_count(), Some(true));
        assert_eq!(first.cursor(), None);
    }
}
