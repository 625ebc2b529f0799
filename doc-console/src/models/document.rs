//! Document records as returned by the processing backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Backend-assigned identifier, unique and stable across the collection.
pub type DocumentId = i64;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Pending,
    Processed,
    Failed,
    /// The backend reports intermediate statuses (e.g. a failed database
    /// save) that the console only needs to render verbatim-ish.
    #[serde(other)]
    Unknown,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Pending => "pending",
            ProcessingStatus::Processed => "processed",
            ProcessingStatus::Failed => "failed",
            ProcessingStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the document collection, as listed by the backend.
///
/// Unknown wire fields are ignored; `extracted_data` defaults to empty when
/// the backend omits it from summaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub filename: String,
    pub processing_status: ProcessingStatus,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub extracted_data: serde_json::Map<String, Value>,
}

impl DocumentRecord {
    /// String forms of every field value, as seen by the search filter.
    pub fn field_strings(&self) -> Vec<String> {
        let mut values = vec![
            self.id.to_string(),
            self.filename.clone(),
            self.processing_status.to_string(),
        ];
        if let Some(date) = &self.upload_date {
            values.push(date.clone());
        }
        for value in self.extracted_data.values() {
            values.push(display_value(value));
        }
        values
    }
}

/// A single extracted table row from the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub line_total: Option<f64>,
}

/// Full record for a single document, fetched on detail navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentDetail {
    pub id: DocumentId,
    pub filename: String,
    pub processing_status: ProcessingStatus,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub extracted_data: serde_json::Map<String, Value>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub ocr_confidence: Option<f64>,
    #[serde(default)]
    pub error_log: Option<String>,
}

/// Human-readable form of an extracted value. `null` renders empty so that
/// searching for "null" does not match every sparse record.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
