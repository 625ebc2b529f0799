//! Action routes: each translates one user gesture into a controller call
//! and redirects back to the single render route.

use crate::controller::view::SortKey;
use crate::models::document::DocumentId;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use console_core::error::AppError;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

pub async fn search(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Redirect {
    state.controller.lock().await.set_search_term(form.q);
    Redirect::to("/")
}

pub async fn sort(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Redirect, AppError> {
    let key = SortKey::from_param(&key)
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("unknown sort key: {}", key)))?;
    state.controller.lock().await.set_sort(key);
    Ok(Redirect::to("/"))
}

pub async fn refresh(State(state): State<AppState>) -> Redirect {
    state.controller.lock().await.load_documents().await;
    Redirect::to("/")
}

pub async fn select(State(state): State<AppState>, Path(id): Path<DocumentId>) -> Redirect {
    state.controller.lock().await.select_document(id).await;
    Redirect::to("/")
}

pub async fn request_delete(State(state): State<AppState>, Path(id): Path<DocumentId>) -> Redirect {
    state.controller.lock().await.request_delete(id);
    Redirect::to("/")
}

pub async fn confirm_delete(State(state): State<AppState>) -> Redirect {
    state.controller.lock().await.confirm_delete().await;
    Redirect::to("/")
}

pub async fn cancel_delete(State(state): State<AppState>) -> Redirect {
    state.controller.lock().await.cancel_delete();
    Redirect::to("/")
}

pub async fn back(State(state): State<AppState>) -> Redirect {
    state.controller.lock().await.return_to_list();
    Redirect::to("/")
}

pub async fn dismiss_status(State(state): State<AppState>) -> Redirect {
    state.controller.lock().await.dismiss_status();
    Redirect::to("/")
}
