//! Ephemeral view state: search, sort, selection, loading and status.
//!
//! Nothing here is persisted; it is derived state owned by the controller
//! and rebuilt from user actions alone.

use crate::models::document::DocumentId;

/// Sortable list columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Filename,
    Status,
    UploadDate,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Filename => "filename",
            SortKey::Status => "status",
            SortKey::UploadDate => "upload_date",
        }
    }

    /// Parses the route parameter form used by the sort endpoints.
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "id" => Some(SortKey::Id),
            "filename" => Some(SortKey::Filename),
            "status" => Some(SortKey::Status),
            "upload_date" => Some(SortKey::UploadDate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
            StatusKind::Info => "info",
        }
    }
}

/// The single user-visible status message; superseded, never queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }
}

/// Top-level screens. `loading` is an overlay flag, not a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub search_term: String,
    pub sort: Option<(SortKey, SortDirection)>,
    pub selected_id: Option<DocumentId>,
    pub loading: bool,
    pub status: Option<StatusMessage>,
    pub pending_delete: Option<DocumentId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles direction when invoked with the active key, otherwise sorts
    /// ascending by the new key.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some((current, direction)) if current == key => Some((key, direction.toggled())),
            _ => Some((key, SortDirection::Ascending)),
        };
    }

    pub fn screen(&self) -> Screen {
        if self.selected_id.is_some() {
            Screen::Detail
        } else {
            Screen::List
        }
    }
}
