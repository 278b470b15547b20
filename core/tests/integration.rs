//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the service clients
//! over real HTTP through a ureq-backed `Transport`. Validates that request
//! building and response parsing agree with an actual server, including
//! cursor pagination and error mapping.

use std::collections::HashSet;
use std::net::SocketAddr;

use watson_core::assistant::model::{Counterexample, CreateIntent, Example};
use watson_core::assistant::options::*;
use watson_core::dialog::options::{ConverseOptions, ListDialogsOptionsBuilder};
use watson_core::visual_recognition::options::{
    DeleteClassifierOptions, GetClassifierOptions, ListClassifiersOptionsBuilder,
};
use watson_core::{
    ApiError, AssistantClient, DialogClient, HttpMethod, HttpRequest, HttpResponse, ServiceConfig, Transport,
    VisualRecognitionClient,
};

const VERSION: &str = "2019-02-28";

/// Executes requests with ureq.
///
/// Status-code-as-error is disabled so 4xx/5xx responses come back as data
/// and the core decides what they mean.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.url.as_str();
        let body = request.body.as_ref().map(|b| b.to_bytes()).unwrap_or_default();
        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(url), &request.headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(url), &request.headers).call(),
            HttpMethod::Post => with_headers(self.agent.post(url), &request.headers).send(&body[..]),
            HttpMethod::Put => with_headers(self.agent.put(url), &request.headers).send(&body[..]),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, headers, body })
    }
}

/// Start the mock server on a random port in a background runtime.
fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });
    addr
}

fn assistant(addr: SocketAddr) -> AssistantClient {
    AssistantClient::with_base_url(VERSION, &format!("http://{addr}/assistant/api")).unwrap()
}

fn new_workspace(client: &AssistantClient, transport: &UreqTransport, builder: CreateWorkspaceOptionsBuilder) -> String {
    let options = builder.build().unwrap();
    let workspace = client.create_workspace(&options).unwrap().execute(transport).unwrap();
    workspace.workspace_id
}

#[test]
fn counterexample_lifecycle() {
    let addr = start_server();
    let client = assistant(addr);
    let transport = UreqTransport::new();

    let workspace_id = new_workspace(
        &client,
        &transport,
        CreateWorkspaceOptionsBuilder::new().name("sandwiches").description("integration"),
    );

    // create
    let options = CreateCounterexampleOptions::builder(workspace_id.as_str(), "Make me a sandwich")
        .build()
        .unwrap();
    let created = client.create_counterexample(&options).unwrap().execute(&transport).unwrap();
    assert_eq!(created.text, "Make me a sandwich");

    // get, with the text percent-encoded in the path
    let options = GetCounterexampleOptions::builder(workspace_id.as_str(), "Make me a sandwich")
        .include_audit(true)
        .build()
        .unwrap();
    let fetched = client.get_counterexample(&options).unwrap().execute(&transport).unwrap();
    assert_eq!(fetched.text, "Make me a sandwich");
    assert!(fetched.created.is_some());

    // update
    let options = UpdateCounterexampleOptions::builder(workspace_id.as_str(), "Make me a sandwich")
        .new_text("Make me a pizza")
        .build()
        .unwrap();
    let updated = client.update_counterexample(&options).unwrap().execute(&transport).unwrap();
    assert_eq!(updated.text, "Make me a pizza");

    // list
    let options = ListCounterexamplesOptions::builder(workspace_id.as_str()).build().unwrap();
    let list = client.list_counterexamples(&options).unwrap().execute(&transport).unwrap();
    let texts: Vec<&str> = list.counterexamples.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["Make me a pizza"]);

    // delete
    let options = DeleteCounterexampleOptions::builder(workspace_id.as_str(), "Make me a pizza")
        .build()
        .unwrap();
    client.delete_counterexample(&options).unwrap().execute(&transport).unwrap();

    // gone
    let options = GetCounterexampleOptions::builder(workspace_id.as_str(), "Make me a pizza")
        .build()
        .unwrap();
    let err = client.get_counterexample(&options).unwrap().execute(&transport).unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }), "got {err:?}");
}

#[test]
fn pagination_visits_every_counterexample_once() {
    let addr = start_server();
    let client = assistant(addr);
    let transport = UreqTransport::new();

    let texts = ["alpha", "bravo", "charlie", "delta", "echo"];
    let workspace_id = new_workspace(
        &client,
        &transport,
        CreateWorkspaceOptionsBuilder::new()
            .name("paged")
            .counterexamples(texts.iter().map(|t| Counterexample::new(*t))),
    );

    for (page_limit, expected_pages) in [(1, 5), (2, 3)] {
        let (seen, pages) = walk_counterexamples(&client, &transport, &workspace_id, page_limit);
        assert_eq!(pages, expected_pages, "page_limit {page_limit}");
        assert_eq!(seen.len(), texts.len(), "page_limit {page_limit}");
        let unique: HashSet<&str> = seen.iter().map(String::as_str).collect();
        assert_eq!(unique, texts.into_iter().collect::<HashSet<_>>());
    }
}

/// Follow `next_cursor` until it is absent; returns the texts seen and the
/// number of pages fetched.
fn walk_counterexamples(
    client: &AssistantClient,
    transport: &UreqTransport,
    workspace_id: &str,
    page_limit: i64,
) -> (Vec<String>, usize) {
    let mut options = ListCounterexamplesOptions::builder(workspace_id)
        .page_limit(page_limit)
        .include_count(true)
        .build()
        .unwrap();
    let mut seen = Vec::new();
    let mut pages = 0;
    loop {
        let page = client.list_counterexamples(&options).unwrap().execute(transport).unwrap();
        pages += 1;
        seen.extend(page.counterexamples.into_iter().map(|c| c.text));
        match page.pagination.next_cursor {
            Some(cursor) => options = options.new_builder().cursor(cursor).build().unwrap(),
            None => break,
        }
    }
    (seen, pages)
}

#[test]
fn descending_sort_reverses_the_order() {
    let addr = start_server();
    let client = assistant(addr);
    let transport = UreqTransport::new();

    let workspace_id = new_workspace(
        &client,
        &transport,
        CreateWorkspaceOptionsBuilder::new()
            .add_counterexample("a")
            .add_counterexample("b")
            .add_counterexample("c"),
    );
    let options = ListCounterexamplesOptions::builder(workspace_id.as_str())
        .sort("-text")
        .build()
        .unwrap();
    let list = client.list_counterexamples(&options).unwrap().execute(&transport).unwrap();
    let texts: Vec<&str> = list.counterexamples.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["c", "b", "a"]);
}

#[test]
fn duplicate_counterexample_is_a_conflict() {
    let addr = start_server();
    let client = assistant(addr);
    let transport = UreqTransport::new();

    let workspace_id = new_workspace(&client, &transport, CreateWorkspaceOptionsBuilder::new().name("dupes"));
    let options = CreateCounterexampleOptions::builder(workspace_id.as_str(), "hello").build().unwrap();
    client.create_counterexample(&options).unwrap().execute(&transport).unwrap();
    let err = client.create_counterexample(&options).unwrap().execute(&transport).unwrap_err();
    match err {
        ApiError::Conflict { message } => assert!(message.contains("already exists")),
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn intent_lifecycle_and_workspace_export() {
    let addr = start_server();
    let client = assistant(addr);
    let transport = UreqTransport::new();

    let workspace_id = new_workspace(&client, &transport, CreateWorkspaceOptionsBuilder::new().name("intents"));

    let options = CreateIntentOptions::builder(workspace_id.as_str(), "greeting")
        .description("Say hello")
        .add_example("hello")
        .add_example(Example::new("good morning"))
        .build()
        .unwrap();
    let created = client.create_intent(&options).unwrap().execute(&transport).unwrap();
    assert_eq!(created.examples.len(), 2);

    let options = UpdateIntentOptions::builder(workspace_id.as_str(), "greeting")
        .new_intent("hello")
        .build()
        .unwrap();
    let renamed = client.update_intent(&options).unwrap().execute(&transport).unwrap();
    assert_eq!(renamed.intent, "hello");
    assert_eq!(renamed.description.as_deref(), Some("Say hello"));

    let options = GetWorkspaceOptions::builder(workspace_id.as_str()).export(true).build().unwrap();
    let exported = client.get_workspace(&options).unwrap().execute(&transport).unwrap();
    assert_eq!(exported.intents.len(), 1);
    assert_eq!(exported.intents[0].intent, "hello");

    // replacing the intents through the workspace drops the old ones
    let options = UpdateWorkspaceOptions::builder(workspace_id.as_str())
        .add_intent(CreateIntent::new("goodbye"))
        .build()
        .unwrap();
    client.update_workspace(&options).unwrap().execute(&transport).unwrap();
    let options = ListIntentsOptions::builder(workspace_id.as_str()).build().unwrap();
    let intents = client.list_intents(&options).unwrap().execute(&transport).unwrap();
    let names: Vec<&str> = intents.intents.iter().map(|i| i.intent.as_str()).collect();
    assert_eq!(names, ["goodbye"]);

    let options = DeleteIntentOptions::builder(workspace_id.as_str(), "goodbye").build().unwrap();
    client.delete_intent(&options).unwrap().execute(&transport).unwrap();

    let options = DeleteWorkspaceOptions::builder(workspace_id.as_str()).build().unwrap();
    client.delete_workspace(&options).unwrap().execute(&transport).unwrap();
    let options = GetWorkspaceOptions::builder(workspace_id.as_str()).build().unwrap();
    let err = client.get_workspace(&options).unwrap().execute(&transport).unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[test]
fn request_without_version_is_rejected() {
    let addr = start_server();
    let client = assistant(addr);
    let transport = UreqTransport::new();

    let options = ListWorkspacesOptionsBuilder::new().build().unwrap();
    let call = client.list_workspaces(&options).unwrap();
    let mut request = call.request().clone();
    request.url = request.url.replace(&format!("version={VERSION}"), "");
    let err = call.parse(transport.send(request).unwrap()).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest { .. }), "got {err:?}");
}

#[test]
fn visual_recognition_classifiers() {
    let addr = start_server();
    let config = ServiceConfig::new(format!("http://{addr}/visual-recognition/api"))
        .with_version("2018-03-19")
        .with_api_key("legacy-key");
    let client = VisualRecognitionClient::new(&config).unwrap();
    let transport = UreqTransport::new();

    let options = ListClassifiersOptionsBuilder::new().verbose(true).build().unwrap();
    let list = client.list_classifiers(&options).unwrap().execute(&transport).unwrap();
    assert_eq!(list.classifiers.len(), 1);
    let classifier_id = list.classifiers[0].classifier_id.clone();
    assert_eq!(list.classifiers[0].classes.len(), 2);

    let options = GetClassifierOptions::builder(classifier_id.as_str()).build().unwrap();
    let classifier = client.get_classifier(&options).unwrap().execute(&transport).unwrap();
    assert_eq!(classifier.name, "dogs");

    let options = DeleteClassifierOptions::builder(classifier_id.as_str()).build().unwrap();
    client.delete_classifier(&options).unwrap().execute(&transport).unwrap();

    let options = GetClassifierOptions::builder(classifier_id.as_str()).build().unwrap();
    let err = client.get_classifier(&options).unwrap().execute(&transport).unwrap_err();
    match err {
        ApiError::NotFound { message } => assert!(message.contains("Cannot find classifier")),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn dialog_conversation() {
    let addr = start_server();
    let client = DialogClient::with_base_url(&format!("http://{addr}/dialog/api")).unwrap();
    let transport = UreqTransport::new();

    let dialogs = client
        .list_dialogs(&ListDialogsOptionsBuilder::new().build().unwrap())
        .unwrap()
        .execute(&transport)
        .unwrap();
    let dialog_id = dialogs.dialogs[0].dialog_id.clone().unwrap();

    let options = ConverseOptions::builder(dialog_id.as_str()).build().unwrap();
    let first = client.converse(&options).unwrap().execute(&transport).unwrap();
    assert_eq!(first.response.len(), 1);
    let conversation_id = first.conversation_id.unwrap();

    let options = options
        .new_builder()
        .input("large")
        .conversation_id(conversation_id)
        .client_id(first.client_id.unwrap())
        .build()
        .unwrap();
    let second = client.converse(&options).unwrap().execute(&transport).unwrap();
    assert_eq!(second.conversation_id, Some(conversation_id));
    assert_eq!(second.response, ["You said: large"]);
}
