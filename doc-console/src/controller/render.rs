//! Render layer: pure construction of the view models consumed by the
//! templates. No controller or query logic belongs here, and nothing here
//! mutates state.

use crate::controller::query;
use crate::controller::store::DocumentStore;
use crate::controller::view::{SortDirection, SortKey, StatusMessage, ViewState};
use crate::models::document::{display_value, DocumentDetail, DocumentId, DocumentRecord};

/// Status banner in display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub text: String,
    pub kind: &'static str,
}

impl StatusView {
    fn from_message(message: &StatusMessage) -> Self {
        Self {
            text: message.text.clone(),
            kind: message.kind.as_str(),
        }
    }
}

/// One row of the list table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: DocumentId,
    pub filename: String,
    pub status: &'static str,
    pub upload_date: String,
}

/// Per-column sort markers for the table header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortIndicators {
    pub id: &'static str,
    pub filename: &'static str,
    pub status: &'static str,
    pub upload_date: &'static str,
}

/// Everything the list page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<ListRow>,
    pub search_term: String,
    pub indicators: SortIndicators,
    pub loading: bool,
    pub status: Option<StatusView>,
    pub pending_delete: Option<DocumentId>,
}

/// One extracted table row in display form; missing numeric cells render as
/// "N/A" like the rest of the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemView {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub line_total: String,
}

/// Everything the detail page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: DocumentId,
    pub filename: String,
    pub status: &'static str,
    pub upload_date: String,
    pub extracted: Vec<(String, String)>,
    pub line_items: Vec<LineItemView>,
    pub raw_text: Option<String>,
    pub ocr_confidence: Option<String>,
    pub error_log: Option<String>,
    pub loading: bool,
    pub status_message: Option<StatusView>,
}

fn marker(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "\u{25b2}",
        SortDirection::Descending => "\u{25bc}",
    }
}

fn indicators(view: &ViewState) -> SortIndicators {
    let mut out = SortIndicators::default();
    if let Some((key, direction)) = view.sort {
        let mark = marker(direction);
        match key {
            SortKey::Id => out.id = mark,
            SortKey::Filename => out.filename = mark,
            SortKey::Status => out.status = mark,
            SortKey::UploadDate => out.upload_date = mark,
        }
    }
    out
}

fn list_row(record: &DocumentRecord) -> ListRow {
    ListRow {
        id: record.id,
        filename: record.filename.clone(),
        status: record.processing_status.as_str(),
        upload_date: record.upload_date.clone().unwrap_or_default(),
    }
}

fn money(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${:.2}", v),
        None => "N/A".to_string(),
    }
}

fn quantity(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{}", v),
        None => "N/A".to_string(),
    }
}

/// Projects the store under the view state and packages the result for the
/// list template.
pub fn list_view(store: &DocumentStore, view: &ViewState) -> ListView {
    ListView {
        rows: query::project(store, view).iter().map(list_row).collect(),
        search_term: view.search_term.clone(),
        indicators: indicators(view),
        loading: view.loading,
        status: view.status.as_ref().map(StatusView::from_message),
        pending_delete: view.pending_delete,
    }
}

/// Packages a fetched detail record for the detail template.
pub fn detail_view(detail: &DocumentDetail, view: &ViewState) -> DetailView {
    let extracted = detail
        .extracted_data
        .iter()
        .map(|(key, value)| (key.clone(), display_value(value)))
        .collect();

    let line_items = detail
        .line_items
        .iter()
        .map(|item| LineItemView {
            description: item.description.clone().unwrap_or_default(),
            quantity: quantity(item.quantity),
            unit_price: money(item.unit_price),
            line_total: money(item.line_total),
        })
        .collect();

    DetailView {
        id: detail.id,
        filename: detail.filename.clone(),
        status: detail.processing_status.as_str(),
        upload_date: detail.upload_date.clone().unwrap_or_default(),
        extracted,
        line_items,
        raw_text: detail.raw_text.clone(),
        ocr_confidence: detail
            .ocr_confidence
            .map(|confidence| format!("{:.0}%", confidence * 100.0)),
        error_log: detail.error_log.clone(),
        loading: view.loading,
        status_message: view.status.as_ref().map(StatusView::from_message),
    }
}
