//! Visual Recognition v3: general and custom image classification, face
//! detection and custom classifier management.

pub mod model;
pub mod options;

use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, MultipartForm, RequestBuilder};
use crate::service::{ServiceCall, ServiceCore};

use model::*;
use options::*;

/// Service name used for configuration lookup.
pub const SERVICE_NAME: &str = "visual_recognition";

#[derive(Debug, Clone)]
pub struct VisualRecognitionClient {
    core: ServiceCore,
}

impl VisualRecognitionClient {
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
        let mut path = vec!["v3"];
        path.extend_from_slice(segments);
        self.core.request(method, &path)
    }

    pub fn classify(&self, options: &ClassifyOptions) -> Result<ServiceCall<ClassifiedImages>, ApiError> {
        let mut form = image_form(
            options.images_file(),
            options.images_filename(),
            options.images_file_content_type(),
            options.url(),
        );
        if let Some(threshold) = options.threshold() {
            form = form.text("threshold", threshold.to_string());
        }
        if !options.owners().is_empty() {
            form = form.text("owners", options.owners().join(","));
        }
        if !options.classifier_ids().is_empty() {
            form = form.text("classifier_ids", options.classifier_ids().join(","));
        }
        let request = self
            .request(HttpMethod::Post, &["classify"])?
            .header_opt("accept-language", options.accept_language())
            .multipart(form)
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn detect_faces(&self, options: &DetectFacesOptions) -> Result<ServiceCall<DetectedFaces>, ApiError> {
        let form = image_form(
            options.images_file(),
            options.images_filename(),
            options.images_file_content_type(),
            options.url(),
        );
        let request = self
            .request(HttpMethod::Post, &["detect_faces"])?
            .header_opt("accept-language", options.accept_language())
            .multipart(form)
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn create_classifier(&self, options: &CreateClassifierOptions) -> Result<ServiceCall<Classifier>, ApiError> {
        let form = training_form(
            MultipartForm::new().text("name", options.name().as_str()),
            options.positive_examples(),
            options.negative_examples(),
            options.negative_examples_filename(),
        );
        let request = self
            .request(HttpMethod::Post, &["classifiers"])?
            .multipart(form)
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn list_classifiers(&self, options: &ListClassifiersOptions) -> Result<ServiceCall<Classifiers>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["classifiers"])?
            .query_opt("verbose", options.verbose())
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn get_classifier(&self, options: &GetClassifierOptions) -> Result<ServiceCall<Classifier>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["classifiers", options.classifier_id()])?
            .build();
        Ok(ServiceCall::json(request))
    }

    /// Retraining happens in the background; the returned classifier is in
    /// the `retraining` state.
    pub fn update_classifier(&self, options: &UpdateClassifierOptions) -> Result<ServiceCall<Classifier>, ApiError> {
        let form = training_form(
            MultipartForm::new(),
            options.positive_examples(),
            options.negative_examples(),
            options.negative_examples_filename(),
        );
        let request = self
            .request(HttpMethod::Post, &["classifiers", options.classifier_id()])?
            .multipart(form)
            .build();
        Ok(ServiceCall::json(request))
    }

    pub fn delete_classifier(&self, options: &DeleteClassifierOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self
            .request(HttpMethod::Delete, &["classifiers", options.classifier_id()])?
            .build();
        Ok(ServiceCall::empty(request))
    }

    /// Download the Core ML model of a classifier as raw `.mlmodel` bytes.
    pub fn get_core_ml_model(&self, options: &GetCoreMlModelOptions) -> Result<ServiceCall<Vec<u8>>, ApiError> {
        let request = self
            .request(HttpMethod::Get, &["classifiers", options.classifier_id(), "core_ml_model"])?
            .set_header("accept", "application/octet-stream")
            .build();
        Ok(ServiceCall::bytes(request))
    }

    pub fn delete_user_data(&self, options: &DeleteUserDataOptions) -> Result<ServiceCall<()>, ApiError> {
        let request = self
            .request(HttpMethod::Delete, &["user_data"])?
            .query("customer_id", options.customer_id())
            .build();
        Ok(ServiceCall::empty(request))
    }
}

fn image_form(
    file: Option<&[u8]>,
    filename: Option<&str>,
    content_type: Option<&str>,
    url: Option<&str>,
) -> MultipartForm {
    let mut form = MultipartForm::new();
    if let Some(file) = file.filter(|file| !file.is_empty()) {
        form = form.file("images_file", filename, content_type, file);
    }
    if let Some(url) = url.filter(|url| !url.trim().is_empty()) {
        form = form.text("url", url);
    }
    form
}

fn training_form(
    mut form: MultipartForm,
    positives: &[PositiveExample],
    negatives: Option<&[u8]>,
    negatives_filename: Option<&str>,
) -> MultipartForm {
    for example in positives {
        let filename = example.filename.clone().unwrap_or_else(|| format!("{}.zip", example.class_name));
        form = form.file(example.part_name(), Some(filename.as_str()), Some("application/zip"), &example.file);
    }
    if let Some(negatives) = negatives {
        let filename = negatives_filename.unwrap_or("negative_examples.zip");
        form = form.file("negative_examples", Some(filename), Some("application/zip"), negatives);
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;

    fn client() -> VisualRecognitionClient {
        let config = ServiceConfig::new("https://gateway.example.com/visual-recognition/api")
            .with_version("2018-03-19")
            .with_api_key("legacy-key");
        VisualRecognitionClient::new(&config).unwrap()
    }

    #[test]
    fn classify_by_url_with_filters() {
        let options = ClassifyOptionsBuilder::new()
            .url("https://example.com/fruitbowl.jpg")
            .threshold(0.6)
            .add_owner("IBM")
            .add_owner("me")
            .classifier_ids(vec!["default".to_string(), "food".to_string()])
            .accept_language("fr")
            .build()
            .unwrap();
        let req = client().classify(&options).unwrap().into_request();
        assert!(req
            .url
            .starts_with("https://gateway.example.com/visual-recognition/api/v3/classify?"));
        assert_eq!(req.query_param("api_key").as_deref(), Some("legacy-key"));
        assert_eq!(req.header("Accept-Language"), Some("fr"));

        let form = req.body.as_ref().unwrap().as_multipart().unwrap();
        assert!(form.part("images_file").is_none());
        assert_eq!(form.part("url").unwrap().data, b"https://example.com/fruitbowl.jpg");
        assert_eq!(form.part("threshold").unwrap().data, b"0.6");
        assert_eq!(form.part("owners").unwrap().data, b"IBM,me");
        assert_eq!(form.part("classifier_ids").unwrap().data, b"default,food");
    }

    #[test]
    fn detect_faces_uploads_the_image() {
        let options = DetectFacesOptionsBuilder::new()
            .images_file(b"JPEG".to_vec())
            .images_filename("prez.jpg")
            .images_file_content_type("image/jpeg")
            .build()
            .unwrap();
        let req = client().detect_faces(&options).unwrap().into_request();
        let form = req.body.as_ref().unwrap().as_multipart().unwrap();
        let part = form.part("images_file").unwrap();
        assert_eq!(part.filename.as_deref(), Some("prez.jpg"));
        assert_eq!(part.content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(req.header("accept-language"), None);
    }

    #[test]
    fn empty_image_bytes_are_not_uploaded() {
        let options = ClassifyOptionsBuilder::new()
            .images_file(Vec::new())
            .url("https://example.com/fruitbowl.jpg")
            .build()
            .unwrap();
        let req = client().classify(&options).unwrap().into_request();
        let form = req.body.as_ref().unwrap().as_multipart().unwrap();
        assert!(form.part("images_file").is_none());
        assert_eq!(form.part("url").unwrap().data, b"https://example.com/fruitbowl.jpg");
    }

    #[test]
    fn create_classifier_names_parts_per_class() {
        let options = CreateClassifierOptions::builder("dogs")
            .add_positive_example(PositiveExample::new("husky", b"PK-husky".to_vec()))
            .add_positive_example(PositiveExample::new("beagle", b"PK-beagle".to_vec()).with_filename("beagles.zip"))
            .negative_examples(b"PK-cats".to_vec())
            .build()
            .unwrap();
        let req = client().create_classifier(&options).unwrap().into_request();
        let form = req.body.as_ref().unwrap().as_multipart().unwrap();
        assert_eq!(form.part("name").unwrap().data, b"dogs");
        assert_eq!(form.part("husky_positive_examples").unwrap().filename.as_deref(), Some("husky.zip"));
        assert_eq!(form.part("beagle_positive_examples").unwrap().filename.as_deref(), Some("beagles.zip"));
        assert_eq!(form.part("negative_examples").unwrap().data, b"PK-cats");
    }

    #[test]
    fn update_classifier_posts_to_the_classifier() {
        let options = UpdateClassifierOptions::builder("dogs_1")
            .add_positive_example(PositiveExample::new("dalmatian", b"PK".to_vec()))
            .build()
            .unwrap();
        let req = client().update_classifier(&options).unwrap().into_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert!(req.url.contains("/v3/classifiers/dogs_1?"));
        let form = req.body.as_ref().unwrap().as_multipart().unwrap();
        assert!(form.part("name").is_none());
        assert_eq!(form.parts().len(), 1);
    }

    #[test]
    fn core_ml_model_is_binary() {
        let options = GetCoreMlModelOptions::builder("dogs_1").build().unwrap();
        let call = client().get_core_ml_model(&options).unwrap();
        assert_eq!(call.request().header("accept"), Some("application/octet-stream"));
        assert_eq!(
            call.request().headers.iter().filter(|(k, _)| k.eq_ignore_ascii_case("accept")).count(),
            1
        );
        let model = call.parse(HttpResponse::new(200, vec![0xde, 0xad, 0xbe, 0xef])).unwrap();
        assert_eq!(model.len(), 4);
    }

    #[test]
    fn list_classifiers_verbose_and_not_found() {
        let options = ListClassifiersOptionsBuilder::new().verbose(true).build().unwrap();
        let call = client().list_classifiers(&options).unwrap();
        assert_eq!(call.request().query_param("verbose").as_deref(), Some("true"));

        let err = client()
            .get_classifier(&GetClassifierOptions::builder("missing").build().unwrap())
            .unwrap()
            .parse(HttpResponse::new(404, r#"{"error":{"code":404,"description":"Cannot find classifier","error_id":"not_found"}}"#))
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn delete_user_data_query() {
        let options = DeleteUserDataOptions::builder("cust-1").build().unwrap();
        let req = client().delete_user_data(&options).unwrap().into_request();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.query_param("customer_id").as_deref(), Some("cust-1"));
    }
}
