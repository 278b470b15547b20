//! Wire models for Compare & Comply v1.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Character offsets of an element in the analyzed document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub begin: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HtmlReturn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// What an element does (`nature`) and for whom (`party`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub nature: String,
    pub party: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,
    /// `added`, `unchanged` or `removed` in feedback payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// `Currency`, `DateTime`, `Location`, `Organization`, `Person`, ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub types: Vec<TypeLabel>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionTitle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Cell span shared by headers and body cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellSpan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index_begin: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index_end: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_index_begin: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_index_end: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableHeaders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub span: CellSpan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowHeaders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_normalized: Option<String>,
    #[serde(flatten)]
    pub span: CellSpan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnHeaders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_normalized: Option<String>,
    #[serde(flatten)]
    pub span: CellSpan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyCells {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub span: CellSpan,
    #[serde(default)]
    pub row_header_ids: Vec<String>,
    #[serde(default)]
    pub row_header_texts: Vec<String>,
    #[serde(default)]
    pub row_header_texts_normalized: Vec<String>,
    #[serde(default)]
    pub column_header_ids: Vec<String>,
    #[serde(default)]
    pub column_header_texts: Vec<String>,
    #[serde(default)]
    pub column_header_texts_normalized: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Key {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// The value side of a key-value pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KvValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyValuePair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    #[serde(default)]
    pub value: Vec<KvValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_title: Option<SectionTitle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<SectionTitle>,
    #[serde(default)]
    pub table_headers: Vec<TableHeaders>,
    #[serde(default)]
    pub row_headers: Vec<RowHeaders>,
    #[serde(default)]
    pub column_headers: Vec<ColumnHeaders>,
    #[serde(default)]
    pub body_cells: Vec<BodyCells>,
    #[serde(default)]
    pub contexts: Vec<SectionTitle>,
    #[serde(default)]
    pub key_value_pairs: Vec<KeyValuePair>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableReturn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(default)]
    pub tables: Vec<Tables>,
}

// ---------------------------------------------------------------------------
// Element classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocStructure {
    #[serde(default)]
    pub section_titles: Vec<SectionTitle>,
    #[serde(default)]
    pub leading_sentences: Vec<SectionTitle>,
    #[serde(default)]
    pub paragraphs: Vec<SectionTitle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    /// `Primary` or `Unknown`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// A contract-level finding: effective date, amount, termination date,
/// contract type, term, payment term or currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractClause {
    /// `High`, `Medium` or `Low`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_normalized: Option<String>,
    #[serde(default)]
    pub provenance_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifyReturn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub tables: Vec<Tables>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_structure: Option<DocStructure>,
    #[serde(default)]
    pub parties: Vec<Parties>,
    #[serde(default)]
    pub effective_dates: Vec<ContractClause>,
    #[serde(default)]
    pub contract_amounts: Vec<ContractClause>,
    #[serde(default)]
    pub termination_dates: Vec<ContractClause>,
    #[serde(default)]
    pub contract_types: Vec<ContractClause>,
    #[serde(default)]
    pub contract_terms: Vec<ContractClause>,
    #[serde(default)]
    pub payment_terms: Vec<ContractClause>,
    #[serde(default)]
    pub contract_currencies: Vec<ContractClause>,
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default)]
    pub types: Vec<TypeLabel>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedElement {
    #[serde(default)]
    pub element_pair: Vec<ElementPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identical_text: Option<bool>,
    #[serde(default)]
    pub provenance_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub significant_elements: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnalignedElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub types: Vec<TypeLabel>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareReturn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub aligned_elements: Vec<AlignedElement>,
    #[serde(default)]
    pub unaligned_elements: Vec<UnalignedElement>,
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginalLabelsIn {
    pub types: Vec<TypeLabel>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatedLabelsIn {
    pub types: Vec<TypeLabel>,
    pub categories: Vec<Category>,
}

/// Feedback on one classified element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDataInput {
    /// Always `element_classification`.
    pub feedback_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<ShortDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    pub location: Location,
    pub text: String,
    pub original_labels: OriginalLabelsIn,
    pub updated_labels: UpdatedLabelsIn,
}

impl crate::options::Present for FeedbackDataInput {
    fn is_present(&self) -> bool {
        !self.feedback_type.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackLabels {
    #[serde(default)]
    pub types: Vec<TypeLabel>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDataOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<ShortDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_labels: Option<FeedbackLabels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_labels: Option<FeedbackLabels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReturn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_data: Option<FeedbackDataOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_data: Option<FeedbackDataOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackList {
    #[serde(default)]
    pub feedback: Vec<GetFeedback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDeleted {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

/// Functions a batch can run.
pub mod batch_function {
    pub const HTML_CONVERSION: &str = "html_conversion";
    pub const ELEMENT_CLASSIFICATION: &str = "element_classification";
    pub const TABLES: &str = "tables";
}

/// Actions accepted by `update_batch`.
pub mod batch_action {
    pub const RESCAN: &str = "rescan";
    pub const CANCEL: &str = "cancel";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocCounts {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub pending: i64,
    #[serde(default)]
    pub successful: i64,
    #[serde(default)]
    pub failed: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_bucket_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_bucket_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_bucket_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_bucket_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_counts: Option<DocCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batches {
    #[serde(default)]
    pub batches: Vec<BatchStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_cell_spans_are_flattened() {
        let raw = r#"{
            "cell_id": "bodyCell-1",
            "location": {"begin": 10, "end": 20},
            "text": "$1,000",
            "row_index_begin": 1, "row_index_end": 1,
            "column_index_begin": 2, "column_index_end": 3,
            "row_header_ids": ["rowHeader-1"],
            "column_header_texts": ["Amount"]
        }"#;
        let cell: BodyCells = serde_json::from_str(raw).unwrap();
        assert_eq!(cell.span.column_index_end, Some(3));
        assert_eq!(cell.location, Some(Location { begin: 10, end: 20 }));
        assert_eq!(cell.row_header_ids, vec!["rowHeader-1"]);
        assert!(cell.attributes.is_empty());

        let back = serde_json::to_value(&cell).unwrap();
        assert_eq!(back["row_index_begin"], 1);
    }

    #[test]
    fn classify_return_with_contract_findings() {
        let raw = r#"{
            "model_id": "contracts",
            "elements": [{
                "location": {"begin": 0, "end": 42},
                "text": "The Buyer shall pay within 30 days.",
                "types": [{"label": {"nature": "Obligation", "party": "Buyer"}, "provenance_ids": ["p1"]}],
                "categories": [{"label": "Payment Terms & Billing"}],
                "attributes": [{"type": "Duration", "text": "30 days", "location": {"begin": 27, "end": 34}}]
            }],
            "effective_dates": [{"confidence_level": "High", "text": "January 1, 2019"}]
        }"#;
        let result: ClassifyReturn = serde_json::from_str(raw).unwrap();
        let element = &result.elements[0];
        assert_eq!(element.types[0].label.as_ref().unwrap().nature, "Obligation");
        assert_eq!(element.attributes[0].attribute_type.as_deref(), Some("Duration"));
        assert_eq!(result.effective_dates[0].confidence_level.as_deref(), Some("High"));
        assert!(result.tables.is_empty());
    }

    #[test]
    fn batch_status_counts() {
        let raw = r#"{"function":"tables","batch_id":"b1","status":"completed",
            "document_counts":{"total":3,"pending":0,"successful":2,"failed":1},
            "created":"2018-10-10T10:10:10Z"}"#;
        let status: BatchStatus = serde_json::from_str(raw).unwrap();
        let counts = status.document_counts.unwrap();
        assert_eq!(counts.total, counts.successful + counts.failed);
        assert!(status.updated.is_none());
    }
}
