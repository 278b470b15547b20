//! Compare & Comply v1: document conversion, element classification, table
//! extraction, contract comparison, feedback and batch processing.

pub mod model;
pub mod options;

use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, JsonBody, MultipartForm, RequestBuilder};
use crate::service::{ServiceCall, ServiceCore};

use model::*;
use options::*;

/// Service name used for configuration lookup.
pub const SERVICE_NAME: &str = "compare_comply";

/// Synchronous, stateless client for Compare & Comply v1.
#[derive(Debug, Clone)]
pub struct CompareComplyClient {
    core: ServiceCore,
}

impl CompareComplyClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ApiError> {
        Ok(Self {
            core: ServiceCore::new(SERVICE_NAME, config)?.require_version()?,
        })
    }

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

    /// Multipart upload of a single document under the `file` part.
    fn upload(
        &self,
        segment: &str,
        file: &[u8],
        filename: Option<&str>,
        content_type: Option<&str>,
        model: Option<&str>,
    ) -> Result<RequestBuilder, ApiError> {
        let form = MultipartForm::new().file("file", filename, content_type, file);
        Ok(self
            .request(HttpMethod::Post, &[segment])?
            .query_opt("model", model)
            .multipart(form))
    }

    // -- document analysis --------------------------------------------------

    pub fn convert_to_html(&self, options: &ConvertToHtmlOptions) -> Result<ServiceCall<HtmlReturn>, ApiError> {
        let request = self
            .upload(
                "html_conversion",
                options.file(),
                options.filename(),
                options.file_content_type(),
                options.model(),
            )?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn classify_elements(
        &self,
        options: &ClassifyElementsOptions,
    ) -> Result<ServiceCall<ClassifyReturn>, ApiError> {
        let request = self
            .upload(
                "element_classification",
                options.file(),
                None,
                options.file_content_type(),
                options.model(),
            )?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn extract_tables(&self, options: &ExtractTablesOptions) -> Result<ServiceCall<TableReturn>, ApiError> {
        let request = self
            .upload("tables", options.file(), None, options.file_content_type(), options.model())?
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn compare_documents(
        &self,
        options: &CompareDocumentsOptions,
    ) -> Result<ServiceCall<CompareReturn>, ApiError> {
        let form = MultipartForm::new()
            .file(
                "file_1",
                None,
                options.file_1_content_type(),
                options.file_1(),
            )
            .file(
                "file_2",
                None,
                options.file_2_content_type(),
                options.file_2(),
            );
        let request = self
            .request(HttpMethod::Post, &["comparison"])?
            .query_opt("file_1_label", options.file_1_label())
            .query_opt("file_2_label", options.file_2_label())
            .query_opt("model", options.model())
            .multipart(form)
            .build();
        Ok(ServiceCall::json(request))
    }

    // -- feedback -----------------------------------------------------------

    pub fn add_feedback(&self, options: &AddFeedbackOptions) -> Result<ServiceCall<FeedbackReturn>, ApiError> {
        let body = JsonBody::new()
            .field("feedback_data", options.feedback_data())?
            .field_opt("user_id", options.user_id())?
            .field_opt("comment", options.comment())?
            .into_value();
        let request = self.request(HttpMethod::Post, &["feedback"])?.json(&body)?.build();
        Ok(ServiceCall::json(request))
    }

    pub fn list_feedback(&self, options: &ListFeedbackOptions) -> Result<ServiceCall<FeedbackList>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["feedback"])?
            .query_opt("feedback_type", options.feedback_type())
            .query_opt("before", options.before())
            .query_opt("after", options.after())
            .query_opt("document_title", options.document_title())
            .query_opt("model_id", options.model_id())
            .query_opt("model_version", options.model_version())
            .query_opt("category_removed", options.category_removed())
            .query_opt("category_added", options.category_added())
            .query_opt("category_not_changed", options.category_not_changed())
            .query_opt("type_removed", options.type_removed())
            .query_opt("type_added", options.type_added())
            .query_opt("type_not_changed", options.type_not_changed())
            .query_opt("page_limit", options.page_limit())
            .query_opt("cursor", options.cursor())
            .query_opt("sort", options.sort())
            .query_opt("include_total", options.include_total())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn get_feedback(&self, options: &GetFeedbackOptions) -> Result<ServiceCall<GetFeedback>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["feedback", options.feedback_id()])?
            .query_opt("model", options.model())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn delete_feedback(&self, options: &DeleteFeedbackOptions) -> Result<ServiceCall<FeedbackDeleted>, ApiError> {
        let request = self
            .request(HttpMethod::Delete, &["feedback", options.feedback_id()])?
            .query_opt("model", options.model())
            .build();
        Ok(ServiceCall::json(request))
    }

    // -- batches ------------------------------------------------------------

    pub fn create_batch(&self, options: &CreateBatchOptions) -> Result<ServiceCall<BatchStatus>, ApiError> {
        let form = MultipartForm::new()
            .file(
                "input_credentials_file",
                None,
                Some("application/json"),
                options.input_credentials_file(),
            )
            .text("input_bucket_location", options.input_bucket_location().as_str())
            .text("input_bucket_name", options.input_bucket_name().as_str())
            .file(
                "output_credentials_file",
                None,
                Some("application/json"),
                options.output_credentials_file(),
            )
            .text("output_bucket_location", options.output_bucket_location().as_str())
            .text("output_bucket_name", options.output_bucket_name().as_str());
        let request = self
            .request(HttpMethod::Post, &["batches"])?
            .query("function", options.function())
            .query_opt("model", options.model())
            .multipart(form)
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn list_batches(&self, _options: &ListBatchesOptions) -> Result<ServiceCall<Batches>, ApiError> {
        let request = self.request(HttpMethod::Get, &["batches"])?.build();
        Ok(ServiceCall::json(request))
    }

    pub fn get_batch(&self, options: &GetBatchOptions) -> Result<ServiceCall<BatchStatus>, ApiError> {
        let request = self.request(HttpMethod::Get, &["batches", options.batch_id()])?.build();
        Ok(ServiceCall::json(request))
    }

    pub fn update_batch(&self, options: &UpdateBatchOptions) -> Result<ServiceCall<BatchStatus>, ApiError> {
        let request = self
            .request(HttpMethod::Put, &["batches", options.batch_id()])?
            .query("action", options.action())
            .query_opt("model", options.model())
            .build();
        Ok(ServiceCall::json(request))
    }
}
