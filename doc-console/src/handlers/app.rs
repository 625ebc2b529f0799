use crate::controller::render::{DetailView, ListView};
use crate::AppState;
use askama::Template;
use axum::{extract::State, response::IntoResponse};

#[derive(Template)]
#[template(path = "pages/documents.html")]
pub struct DocumentsTemplate {
    pub view: ListView,
}

#[derive(Template)]
#[template(path = "pages/detail.html")]
pub struct DetailTemplate {
    pub view: DetailView,
}

/// Renders whichever screen the controller is on.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let controller = state.controller.lock().await;
    match controller.detail_view() {
        Some(view) => DetailTemplate { view }.into_response(),
        None => DocumentsTemplate {
            view: controller.list_view(),
        }
        .into_response(),
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}
