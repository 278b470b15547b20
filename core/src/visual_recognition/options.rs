//! Options for Visual Recognition v3.
//!
//! `images_file` takes an image or a zip of images; `url` is the
//! alternative for a single hosted image.

use super::model::PositiveExample;
use crate::error::ApiError;
use crate::options::request_options;

request_options! {
    /// Classify images with built-in or custom classifiers.
    pub struct ClassifyOptions => ClassifyOptionsBuilder {
        required {}
        optional {
            images_file: Vec<u8>,
            images_filename: String,
            images_file_content_type: String,
            url: String,
            /// Minimum score a class must reach to be returned.
            threshold: f64,
            /// `Accept-Language` header for class names.
            accept_language: String,
        }
        lists {
            /// `IBM`, `me`, or both.
            owners / add_owner: String,
            classifier_ids / add_classifier_id: String,
        }
        check { image_source }
    }
}

request_options! {
    pub struct DetectFacesOptions => DetectFacesOptionsBuilder {
        required {}
        optional {
            images_file: Vec<u8>,
            images_filename: String,
            images_file_content_type: String,
            url: String,
            accept_language: String,
        }
        lists {}
        check { face_source }
    }
}

request_options! {
    /// Train a custom classifier from zipped example images.
    pub struct CreateClassifierOptions => CreateClassifierOptionsBuilder {
        required { name: String }
        optional {
            negative_examples: Vec<u8>,
            negative_examples_filename: String,
        }
        lists {}
        required_lists { positive_examples / add_positive_example: PositiveExample }
    }
}

request_options! {
    pub struct ListClassifiersOptions => ListClassifiersOptionsBuilder {
        required {}
        optional { verbose: bool }
        lists {}
    }
}

request_options! {
    pub struct GetClassifierOptions => GetClassifierOptionsBuilder {
        required { classifier_id: String }
        optional {}
        lists {}
    }
}

request_options! {
    /// Add classes or examples to a classifier and retrain it.
    pub struct UpdateClassifierOptions => UpdateClassifierOptionsBuilder {
        required { classifier_id: String }
        optional {
            negative_examples: Vec<u8>,
            negative_examples_filename: String,
        }
        lists { positive_examples / add_positive_example: PositiveExample }
    }
}

request_options! {
    pub struct DeleteClassifierOptions => DeleteClassifierOptionsBuilder {
        required { classifier_id: String }
        optional {}
        lists {}
    }
}

request_options! {
    pub struct GetCoreMlModelOptions => GetCoreMlModelOptionsBuilder {
        required { classifier_id: String }
        optional {}
        lists {}
    }
}

request_options! {
    pub struct DeleteUserDataOptions => DeleteUserDataOptionsBuilder {
        required { customer_id: String }
        optional {}
        lists {}
    }
}

fn has_image(file: Option<&[u8]>, url: Option<&str>) -> bool {
    file.is_some_and(|f| !f.is_empty()) || url.is_some_and(|u| !u.trim().is_empty())
}

fn image_source(options: &ClassifyOptions) -> Result<(), ApiError> {
    if has_image(options.images_file(), options.url()) {
        Ok(())
    } else {
        Err(ApiError::MissingField { field: "images_file" })
    }
}

fn face_source(options: &DetectFacesOptions) -> Result<(), ApiError> {
    if has_image(options.images_file(), options.url()) {
        Ok(())
    } else {
        Err(ApiError::MissingField { field: "images_file" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_needs_file_or_url() {
        let err = ClassifyOptionsBuilder::new().threshold(0.6).build().unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "images_file" }));

        let err = ClassifyOptionsBuilder::new().url("   ").build().unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "images_file" }));

        assert!(ClassifyOptionsBuilder::new().url("https://example.com/a.jpg").build().is_ok());
        assert!(ClassifyOptionsBuilder::new().images_file(b"JPEG".to_vec()).build().is_ok());
    }

    #[test]
    fn detect_faces_needs_file_or_url() {
        let err = DetectFacesOptionsBuilder::new().accept_language("en").build().unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "images_file" }));
    }

    #[test]
    fn create_classifier_requires_name_then_examples() {
        let err = CreateClassifierOptionsBuilder::new()
            .add_positive_example(PositiveExample::new("husky", b"PK".to_vec()))
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "name" }));

        let err = CreateClassifierOptions::builder("dogs").build().unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "positive_examples" }));
    }

    #[test]
    fn classifier_ids_add_and_replace() {
        let options = ClassifyOptionsBuilder::new()
            .url("https://example.com/a.jpg")
            .add_classifier_id("default")
            .add_classifier_id("dogs_1")
            .build()
            .unwrap();
        assert_eq!(options.classifier_ids().len(), 2);
        let replaced = options
            .new_builder()
            .classifier_ids(vec!["food".to_string()])
            .build()
            .unwrap();
        assert_eq!(replaced.classifier_ids(), ["food".to_string()]);
        assert_eq!(replaced.url(), options.url());
    }
}
