//! Dialog v1: upload dialog files, edit their content, hold conversations
//! and read back client profiles and conversation history.
//!
//! Dialog predates the version-date scheme, so the client accepts a config
//! without `version` and never sends one.

pub mod model;
pub mod options;

use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, JsonBody, MultipartForm, RequestBuilder};
use crate::service::{ServiceCall, ServiceCore};

use model::*;
use options::*;

/// Service name used for configuration lookup.
pub const SERVICE_NAME: &str = "dialog";

/// Format of the `date_from` / `date_to` query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct DialogClient {
    core: ServiceCore,
}

impl DialogClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ApiError> {
        let mut config = config.clone();
        config.version = None;
        Ok(Self {
            core: ServiceCore::new(SERVICE_NAME, &config)?,
        })
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::new(&ServiceConfig::new(base_url))
    }

    pub fn core(&self) -> &ServiceCore {
        &self.core
    }

    fn request(&self, method: HttpMethod, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let mut path = vec!["v1", "dialogs"];
        path.extend_from_slice(segments);
        self.core.request(method, &path)
    }

    pub fn list_dialogs(&self, _options: &ListDialogsOptions) -> Result<ServiceCall<DialogCollection>, ApiError> {
        let request = self.request(HttpMethod::Get, &[])?.build();
        Ok(ServiceCall::json(request))
    }

    pub fn create_dialog(&self, options: &CreateDialogOptions) -> Result<ServiceCall<CreatedDialog>, ApiError> {
        let form = MultipartForm::new()
            .file("file", options.filename(), None, options.file())
            .text("name", options.name().as_str());
        let request = self.request(HttpMethod::Post, &[])?.multipart(form).build();
        Ok(ServiceCall::json(request))
    }

    pub fn update_dialog(&self, options: &UpdateDialogOptions) -> Result<ServiceCall<()>, ApiError> {
        let form = MultipartForm::new().file("file", options.filename(), None, options.file());
        let request = self
            .request(HttpMethod::Put, &[options.dialog_id()])?
            .multipart(form)
            .build();
        Ok(ServiceCall::empty(request))
    }

    pub fn delete_dialog(&self, options: &DeleteDialogOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self.request(HttpMethod::Delete, &[options.dialog_id()])?.build();
        Ok(ServiceCall::empty(request))
    }

    pub fn get_content(&self, options: &GetContentOptions) -> Result<ServiceCall<Vec<DialogContent>>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &[options.dialog_id(), "content"])?
            .build();
        Ok(ServiceCall::json(request))
    }

    /// The body is the bare JSON array of content nodes.
    pub fn update_content(&self, options: &UpdateContentOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self
            .request(HttpMethod::Put, &[options.dialog_id(), "content"])?
            .json(&options.content())?
            .build();
        Ok(ServiceCall::empty(request))
    }

    pub fn converse(&self, options: &ConverseOptions) -> Result<ServiceCall<Conversation>, ApiError> {
        let mut form = MultipartForm::new();
        if let Some(input) = options.input() {
            form = form.text("input", input);
        }
        if let Some(client_id) = options.client_id() {
            form = form.text("client_id", client_id.to_string());
        }
        if let Some(conversation_id) = options.conversation_id() {
            form = form.text("conversation_id", conversation_id.to_string());
        }
        let request = self
            .request(HttpMethod::Post, &[options.dialog_id(), "conversation"])?
            .multipart(form)
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn get_profile(&self, options: &GetProfileOptions) -> Result<ServiceCall<Profile>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &[options.dialog_id(), "profile"])?
            .query("client_id", options.client_id())
            .query_list("name", options.names())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn update_profile(&self, options: &UpdateProfileOptions) -> Result<ServiceCall<()>, ApiError> {
        let body = JsonBody::new()
            .field_opt("client_id", options.client_id())?
            .list("name_values", options.name_values())?
            .into_value();
        let request = self
            .request(HttpMethod::Put, &[options.dialog_id(), "profile"])?
            .json(&body)?
            .build();
        Ok(ServiceCall::empty(request))
    }

    pub fn get_conversation_data(
        &self,
        options: &GetConversationDataOptions,
    ) -> Result<ServiceCall<ConversationDataCollection>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &[options.dialog_id(), "conversation"])?
            .query("date_from", options.date_from().format(DATE_FORMAT))
            .query("date_to", options.date_to().format(DATE_FORMAT))
            .query_opt("offset", options.offset())
            .query_opt("limit", options.limit())
            .build();
        Ok(ServiceCall::json(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use chrono::NaiveDate;

    fn client() -> DialogClient {
        DialogClient::with_base_url("https://gateway.example.com/dialog/api").unwrap()
    }

    #[test]
    fn no_version_is_sent() {
        let config = ServiceConfig::new("https://gateway.example.com/dialog/api").with_version("2019-01-01");
        let client = DialogClient::new(&config).unwrap();
        let req = client.list_dialogs(&ListDialogsOptions::builder().build().unwrap()).unwrap().into_request();
        assert_eq!(req.url, "https://gateway.example.com/dialog/api/v1/dialogs");
        assert_eq!(req.query_param("version"), None);
    }

    #[test]
    fn create_dialog_uploads_file_and_name() {
        let options = CreateDialogOptions::builder("pizza", b"<dialog/>".to_vec())
            .filename("pizza_sample.xml")
            .build()
            .unwrap();
        let call = client().create_dialog(&options).unwrap();
        let form = call.request().body.as_ref().unwrap().as_multipart().unwrap();
        assert_eq!(form.part("name").unwrap().data, b"pizza");
        assert_eq!(form.part("file").unwrap().filename.as_deref(), Some("pizza_sample.xml"));

        let created = call.parse(HttpResponse::new(201, r#"{"dialog_id":"d-1"}"#)).unwrap();
        assert_eq!(created.dialog_id, "d-1");
    }

    #[test]
    fn update_content_sends_a_json_array() {
        let options = UpdateContentOptions::builder("d-1")
            .add_content(DialogContent::new("OUTPUT(200000)", "Hi"))
            .build()
            .unwrap();
        let req = client().update_content(&options).unwrap().into_request();
        assert_eq!(req.method, HttpMethod::Put);
        assert!(req.url.ends_with("/v1/dialogs/d-1/content"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_ref().unwrap().as_json().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!([{"node_id": "OUTPUT(200000)", "content": "Hi"}]));
    }

    #[test]
    fn converse_sends_only_set_fields() {
        let options = ConverseOptions::builder("d-1").input("Hi").conversation_id(42).build().unwrap();
        let req = client().converse(&options).unwrap().into_request();
        let form = req.body.as_ref().unwrap().as_multipart().unwrap();
        assert_eq!(form.part("input").unwrap().data, b"Hi");
        assert_eq!(form.part("conversation_id").unwrap().data, b"42");
        assert!(form.part("client_id").is_none());
    }

    #[test]
    fn get_profile_joins_names() {
        let options = GetProfileOptions::builder("d-1", 7)
            .names(vec!["size".to_string(), "topping".to_string()])
            .build()
            .unwrap();
        let req = client().get_profile(&options).unwrap().into_request();
        assert_eq!(req.query_param("client_id").as_deref(), Some("7"));
        assert_eq!(req.query_param("name").as_deref(), Some("size,topping"));
    }

    #[test]
    fn update_profile_body() {
        let options = UpdateProfileOptions::builder("d-1")
            .client_id(7)
            .add_name_value(NameValue::new("size", "large"))
            .build()
            .unwrap();
        let req = client().update_profile(&options).unwrap().into_request();
        let body: serde_json::Value = serde_json::from_str(req.body.as_ref().unwrap().as_json().unwrap()).unwrap();
        assert_eq!(body["client_id"], 7);
        assert_eq!(body["name_values"][0]["value"], "large");
    }

    #[test]
    fn conversation_data_dates_use_the_dialog_format() {
        let day = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
        let options = GetConversationDataOptions::builder(
            "d-1",
            day.and_hms_opt(0, 0, 0).unwrap(),
            day.and_hms_opt(23, 59, 59).unwrap(),
        )
        .limit(10)
        .build()
        .unwrap();
        let req = client().get_conversation_data(&options).unwrap().into_request();
        assert_eq!(req.query_param("date_from").as_deref(), Some("2016-01-01 00:00:00"));
        assert_eq!(req.query_param("date_to").as_deref(), Some("2016-01-01 23:59:59"));
        assert_eq!(req.query_param("limit").as_deref(), Some("10"));
        assert_eq!(req.query_param("offset"), None);
    }
}
