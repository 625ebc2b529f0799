//! The view controller: exclusive owner of the document store and view
//! state, driving every transition between them in response to user actions.
//!
//! All operations are infallible at the API surface; gateway failures turn
//! into status messages, never into propagated errors. Operations take
//! `&mut self`, so sharing a controller (the HTTP surface keeps it behind a
//! `tokio::sync::Mutex`) serializes mutations and keeps each operation
//! atomic with respect to the render that follows it.

pub mod query;
pub mod render;
pub mod store;
pub mod view;

use crate::models::document::{DocumentDetail, DocumentId};
use crate::services::gateway::{DocumentGateway, FilePayload};
use render::{DetailView, ListView};
use std::sync::Arc;
use store::DocumentStore;
use view::{Screen, SortKey, StatusKind, StatusMessage, ViewState};

pub struct ViewController {
    gateway: Arc<dyn DocumentGateway>,
    store: DocumentStore,
    view: ViewState,
    /// Detail record cached for rendering while on the detail screen.
    detail: Option<DocumentDetail>,
}

impl ViewController {
    pub fn new(gateway: Arc<dyn DocumentGateway>) -> Self {
        Self {
            gateway,
            store: DocumentStore::new(),
            view: ViewState::new(),
            detail: None,
        }
    }

    /// Refreshes the collection from the backend. On success the store is
    /// replaced wholesale and any stale status message is cleared; on
    /// failure the previous collection stays untouched.
    pub async fn load_documents(&mut self) {
        self.view.loading = true;
        let result = self.gateway.list().await;
        self.view.loading = false;

        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "Document list refreshed");
                self.store.replace_all(records);
                self.view.status = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load documents");
                self.view.status = Some(StatusMessage::error(format!(
                    "Failed to load documents: {}. Is the backend running?",
                    e
                )));
            }
        }
    }

    /// Uploads a file and refreshes the collection. A missing or empty
    /// selection is rejected locally; the gateway is never called.
    pub async fn upload(&mut self, file: Option<FilePayload>) {
        let Some(file) = file.filter(|f| !f.is_empty()) else {
            self.view.status = Some(StatusMessage::error("Please select a file to upload."));
            return;
        };

        self.view.loading = true;
        self.view.status = Some(StatusMessage::info(format!(
            "Uploading and processing {}...",
            file.filename
        )));

        let result = self.gateway.upload(file).await;
        match result {
            Ok(receipt) => {
                let text = match receipt.message {
                    Some(message) => message,
                    None => "Document uploaded and processed successfully!".to_string(),
                };
                self.load_documents().await;
                // A refresh failure outranks the upload acknowledgement.
                if !self.has_error_status() {
                    self.view.status = Some(StatusMessage::success(text));
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Upload failed");
                self.view.status = Some(StatusMessage::error(format!("Upload failed: {}", e)));
            }
        }
        self.view.loading = false;
    }

    /// Fetches the full record and switches to the detail screen. On failure
    /// the selection stays unset and the list screen stays active.
    pub async fn select_document(&mut self, id: DocumentId) {
        self.view.loading = true;
        let result = self.gateway.get(id).await;
        self.view.loading = false;

        match result {
            Ok(detail) => {
                self.detail = Some(detail);
                self.view.selected_id = Some(id);
            }
            Err(e) => {
                tracing::error!(document_id = id, error = %e, "Failed to load document details");
                self.view.status = Some(StatusMessage::error(format!(
                    "Failed to load document details: {}",
                    e
                )));
            }
        }
    }

    /// Records a delete request awaiting confirmation. No network effect.
    pub fn request_delete(&mut self, id: DocumentId) {
        self.view.pending_delete = Some(id);
    }

    /// Declines the pending delete. Side-effect-free beyond clearing the
    /// confirmation state.
    pub fn cancel_delete(&mut self) {
        self.view.pending_delete = None;
    }

    /// Performs the confirmed delete. On success exactly the matching record
    /// leaves the store; on failure the store is untouched.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.view.pending_delete.take() else {
            return;
        };

        self.view.loading = true;
        let result = self.gateway.delete(id).await;
        self.view.loading = false;

        match result {
            Ok(()) => {
                self.store.remove_by_id(id);
                if self.view.selected_id == Some(id) {
                    self.return_to_list();
                }
                self.view.status = Some(StatusMessage::success(format!(
                    "Document {} deleted successfully.",
                    id
                )));
            }
            Err(e) => {
                tracing::error!(document_id = id, error = %e, "Failed to delete document");
                self.view.status = Some(StatusMessage::error(format!(
                    "Failed to delete document {}: {}",
                    id, e
                )));
            }
        }
    }

    /// Returns to the list screen unconditionally. No network effect.
    pub fn return_to_list(&mut self) {
        self.view.selected_id = None;
        self.detail = None;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.search_term = term.into();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.view.toggle_sort(key);
    }

    pub fn dismiss_status(&mut self) {
        self.view.status = None;
    }

    pub fn screen(&self) -> Screen {
        self.view.screen()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn detail(&self) -> Option<&DocumentDetail> {
        self.detail.as_ref()
    }

    /// View model for the list screen.
    pub fn list_view(&self) -> ListView {
        render::list_view(&self.store, &self.view)
    }

    /// View model for the detail screen, when one is cached.
    pub fn detail_view(&self) -> Option<DetailView> {
        self.detail
            .as_ref()
            .map(|detail| render::detail_view(detail, &self.view))
    }

    fn has_error_status(&self) -> bool {
        matches!(
            &self.view.status,
            Some(StatusMessage {
                kind: StatusKind::Error,
                ..
            })
        )
    }
}
