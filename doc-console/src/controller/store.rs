//! In-memory authoritative cache of the last-fetched document collection.

use crate::models::document::{DocumentId, DocumentRecord};

/// Ordered collection of document records; insertion order is the server
/// response order. Replaced wholesale on refresh, never partially merged.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    records: Vec<DocumentRecord>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the entire collection.
    pub fn replace_all(&mut self, records: Vec<DocumentRecord>) {
        self.records = records;
    }

    /// Removes the matching record. An absent id is a no-op; the caller has
    /// already confirmed existence through a successful delete call.
    pub fn remove_by_id(&mut self, id: DocumentId) {
        self.records.retain(|record| record.id != id);
    }

    pub fn get_by_id(&self, id: DocumentId) -> Option<&DocumentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::ProcessingStatus;

    fn record(id: DocumentId, filename: &str) -> DocumentRecord {
        DocumentRecord {
            id,
            filename: filename.to_string(),
            processing_status: ProcessingStatus::Processed,
            upload_date: None,
            extracted_data: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_replace_all_overwrites_collection() {
        let mut store = DocumentStore::new();
        store.replace_all(vec![record(1, "a.pdf"), record(2, "b.pdf")]);
        store.replace_all(vec![record(3, "c.pdf")]);

        assert_eq!(store.len(), 1);
        assert!(store.get_by_id(1).is_none());
        assert_eq!(store.get_by_id(3).unwrap().filename, "c.pdf");
    }

    #[test]
    fn test_remove_by_id_removes_exactly_one_and_keeps_order() {
        let mut store = DocumentStore::new();
        store.replace_all(vec![record(1, "a.pdf"), record(2, "b.pdf"), record(3, "c.pdf")]);

        store.remove_by_id(2);

        let ids: Vec<_> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_by_id_missing_is_noop() {
        let mut store = DocumentStore::new();
        store.replace_all(vec![record(1, "a.pdf")]);

        store.remove_by_id(42);

        assert_eq!(store.len(), 1);
    }
}
