//! Wire models for Visual Recognition v3.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classifier training status values.
pub mod classifier_status {
    pub const READY: &str = "ready";
    pub const TRAINING: &str = "training";
    pub const RETRAINING: &str = "retraining";
    pub const FAILED: &str = "failed";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: i64,
    pub description: String,
    pub error_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningInfo {
    pub warning_id: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassResult {
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Hierarchy path such as `/fruit/apple`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_hierarchy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierResult {
    pub name: String,
    pub classifier_id: String,
    #[serde(default)]
    pub classes: Vec<ClassResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
    /// File name of the image inside an uploaded archive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    #[serde(default)]
    pub classifiers: Vec<ClassifierResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_classes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_processed: Option<i64>,
    #[serde(default)]
    pub images: Vec<ClassifiedImage>,
    #[serde(default)]
    pub warnings: Vec<WarningInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceAge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceGender {
    /// `MALE` or `FEMALE`.
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_label: Option<String>,
    #[serde(default)]
    pub score: f64,
}

/// Bounding box in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceLocation {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Face {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<FaceAge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<FaceGender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_location: Option<FaceLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageWithFaces {
    #[serde(default)]
    pub faces: Vec<Face>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedFaces {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_processed: Option<i64>,
    #[serde(default)]
    pub images: Vec<ImageWithFaces>,
    #[serde(default)]
    pub warnings: Vec<WarningInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    #[serde(rename = "class")]
    pub class_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classifier {
    pub classifier_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_ml_enabled: Option<bool>,
    /// Reason for a `failed` status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub classes: Vec<Class>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrained: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classifiers {
    #[serde(default)]
    pub classifiers: Vec<Classifier>,
}

/// A zip archive of training images for one class.
///
/// Uploaded as the multipart part `<class_name>_positive_examples`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositiveExample {
    pub class_name: String,
    pub file: Vec<u8>,
    pub filename: Option<String>,
}

impl PositiveExample {
    pub fn new(class_name: impl Into<String>, file: impl Into<Vec<u8>>) -> Self {
        Self {
            class_name: class_name.into(),
            file: file.into(),
            filename: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn part_name(&self) -> String {
        format!("{}_positive_examples", self.class_name)
    }
}
