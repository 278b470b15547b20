//! Options for Compare & Comply v1.
//!
//! Document uploads carry the raw bytes in `file`; the content type defaults
//! to `application/octet-stream` when not set.

use chrono::NaiveDate;

use super::model::FeedbackDataInput;
use crate::options::request_options;

request_options! {
    /// Convert a PDF, Word document or image to HTML.
    pub struct ConvertToHtmlOptions => ConvertToHtmlOptionsBuilder {
        required { file: Vec<u8> }
        optional {
            filename: String,
            file_content_type: String,
            /// `contracts` or `tables`.
            model: String,
        }
        lists {}
    }
}

request_options! {
    /// Analyze a document's structural and semantic elements.
    pub struct ClassifyElementsOptions => ClassifyElementsOptionsBuilder {
        required { file: Vec<u8> }
        optional {
            file_content_type: String,
            model: String,
        }
        lists {}
    }
}

request_options! {
    pub struct ExtractTablesOptions => ExtractTablesOptionsBuilder {
        required { file: Vec<u8> }
        optional {
            file_content_type: String,
            model: String,
        }
        lists {}
    }
}

request_options! {
    /// Compare two contracts element by element.
    pub struct CompareDocumentsOptions => CompareDocumentsOptionsBuilder {
        required { file_1: Vec<u8>, file_2: Vec<u8> }
        optional {
            file_1_content_type: String,
            file_2_content_type: String,
            /// Defaults to `file_1` on the service side.
            file_1_label: String,
            file_2_label: String,
            model: String,
        }
        lists {}
    }
}

request_options! {
    pub struct AddFeedbackOptions => AddFeedbackOptionsBuilder {
        required { feedback_data: FeedbackDataInput }
        optional {
            user_id: String,
            comment: String,
        }
        lists {}
    }
}

request_options! {
    /// Filter the feedback stored for the instance.
    ///
    /// The `category_*` and `type_*` filters take comma-separated label
    /// names; `type_*` labels are written `nature:party`.
    pub struct ListFeedbackOptions => ListFeedbackOptionsBuilder {
        required {}
        optional {
            feedback_type: String,
            before: NaiveDate,
            after: NaiveDate,
            document_title: String,
            model_id: String,
            model_version: String,
            category_removed: String,
            category_added: String,
            category_not_changed: String,
            type_removed: String,
            type_added: String,
            type_not_changed: String,
            page_limit: i64,
            cursor: String,
            sort: String,
            include_total: bool,
        }
        lists {}
    }
}

request_options! {
    pub struct GetFeedbackOptions => GetFeedbackOptionsBuilder {
        required { feedback_id: String }
        optional { model: String }
        lists {}
    }
}

request_options! {
    pub struct DeleteFeedbackOptions => DeleteFeedbackOptionsBuilder {
        required { feedback_id: String }
        optional { model: String }
        lists {}
    }
}

request_options! {
    /// Run one function over every document in a Cloud Object Storage bucket.
    pub struct CreateBatchOptions => CreateBatchOptionsBuilder {
        required {
            /// See [`batch_function`](super::model::batch_function).
            function: String,
            input_credentials_file: Vec<u8>,
            input_bucket_location: String,
            input_bucket_name: String,
            output_credentials_file: Vec<u8>,
            output_bucket_location: String,
            output_bucket_name: String,
        }
        optional { model: String }
        lists {}
    }
}

request_options! {
    pub struct ListBatchesOptions => ListBatchesOptionsBuilder {
        required {}
        optional {}
        lists {}
    }
}

request_options! {
    pub struct GetBatchOptions => GetBatchOptionsBuilder {
        required { batch_id: String }
        optional {}
        lists {}
    }
}

request_options! {
    pub struct UpdateBatchOptions => UpdateBatchOptionsBuilder {
        required {
            batch_id: String,
            /// `rescan` or `cancel`.
            action: String,
        }
        optional { model: String }
        lists {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare_comply::model::{Location, OriginalLabelsIn, UpdatedLabelsIn};
    use crate::error::ApiError;

    #[test]
    fn empty_file_counts_as_missing() {
        let err = ConvertToHtmlOptions::builder(Vec::new()).build().unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "file" }));
    }

    #[test]
    fn compare_reports_the_second_file() {
        let err = CompareDocumentsOptionsBuilder::new()
            .file_1(b"%PDF-1".to_vec())
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "file_2" }));
    }

    #[test]
    fn feedback_requires_data() {
        let err = AddFeedbackOptionsBuilder::new().comment("looks wrong").build().unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "feedback_data" }));

        let data = FeedbackDataInput {
            feedback_type: "element_classification".into(),
            location: Location { begin: 0, end: 10 },
            text: "1. IBM will provide".into(),
            original_labels: OriginalLabelsIn::default(),
            updated_labels: UpdatedLabelsIn::default(),
            ..FeedbackDataInput::default()
        };
        let options = AddFeedbackOptions::builder(data.clone()).build().unwrap();
        assert_eq!(options.feedback_data(), &data);
    }

    #[test]
    fn create_batch_checks_every_bucket_field() {
        let err = CreateBatchOptionsBuilder::new()
            .function("tables")
            .input_credentials_file(b"{}".to_vec())
            .input_bucket_location("us-geo")
            .input_bucket_name("in")
            .output_credentials_file(b"{}".to_vec())
            .output_bucket_location("us-geo")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "output_bucket_name" }));
    }

    #[test]
    fn list_feedback_paging_round_trip() {
        let first = ListFeedbackOptionsBuilder::new()
            .page_limit(10)
            .include_total(true)
            .after(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap())
            .build()
            .unwrap();
        let next = first.new_builder().cursor("c2").build().unwrap();
        assert_eq!(next.page_limit(), Some(10));
        assert_eq!(next.after(), first.after());
        assert_eq!(next.cursor(), Some("c2"));
    }
}
