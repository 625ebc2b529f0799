//! Pure projection of the document store under the current view state.
//!
//! `project` is deterministic and side-effect-free: the same store and view
//! state always produce the same sequence.

use crate::controller::store::DocumentStore;
use crate::controller::view::{SortDirection, SortKey, ViewState};
use crate::models::document::DocumentRecord;
use chrono::NaiveDateTime;
use std::cmp::Ordering;

/// Comparable form of a record's value at a sort key.
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Int(i64),
    Text(String),
    Time(NaiveDateTime),
}

impl SortValue {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Int(a), SortValue::Int(b)) => a.cmp(b),
            (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            // Mixed forms only arise when one timestamp failed to parse;
            // fall back to comparing their text forms.
            _ => self.as_text().cmp(&other.as_text()),
        }
    }

    fn as_text(&self) -> String {
        match self {
            SortValue::Int(v) => v.to_string(),
            SortValue::Text(v) => v.clone(),
            SortValue::Time(v) => v.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

fn sort_value(record: &DocumentRecord, key: SortKey) -> Option<SortValue> {
    match key {
        SortKey::Id => Some(SortValue::Int(record.id)),
        SortKey::Filename => Some(SortValue::Text(record.filename.clone())),
        SortKey::Status => Some(SortValue::Text(record.processing_status.to_string())),
        SortKey::UploadDate => record.upload_date.as_deref().map(parse_timestamp),
    }
}

/// Timestamps arrive as `YYYY-MM-DD HH:MM:SS` from the backend; RFC 3339 is
/// accepted as well. Anything else sorts by its raw text.
fn parse_timestamp(raw: &str) -> SortValue {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return SortValue::Time(parsed);
    }
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return SortValue::Time(parsed.naive_utc());
    }
    SortValue::Text(raw.to_string())
}

/// Filtered and sorted view of the store.
///
/// A record passes the filter iff the case-insensitive string form of at
/// least one of its field values contains the case-insensitive search term;
/// the empty term passes everything. When a sort key is active the output is
/// a stable sort of the filtered rows, with records missing a value at the
/// key ordered after every present value (the whole comparison reverses for
/// descending order). Without a sort key, store order is preserved.
pub fn project(store: &DocumentStore, view: &ViewState) -> Vec<DocumentRecord> {
    let term = view.search_term.to_lowercase();

    let mut rows: Vec<DocumentRecord> = store
        .records()
        .iter()
        .filter(|record| {
            term.is_empty()
                || record
                    .field_strings()
                    .iter()
                    .any(|value| value.to_lowercase().contains(&term))
        })
        .cloned()
        .collect();

    if let Some((key, direction)) = view.sort {
        rows.sort_by(|a, b| {
            let ordering = match (sort_value(a, key), sort_value(b, key)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(left), Some(right)) => left.compare(&right),
            };
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    rows
}
