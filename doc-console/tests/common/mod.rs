//! Shared test harness: an in-process stub of the processing backend plus a
//! fully built console application bound to a random port.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use doc_console::config::{BackendSettings, ServerSettings, Settings};
use doc_console::startup::Application;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Programmable state behind the stub backend.
#[derive(Default)]
pub struct StubState {
    pub documents: Vec<Value>,
    pub details: HashMap<i64, Value>,
    pub fail_list: Option<String>,
    pub fail_upload: Option<String>,
    pub fail_delete: Option<String>,
    pub upload_count: usize,
    pub delete_count: usize,
    pub next_id: i64,
}

pub type SharedStub = Arc<Mutex<StubState>>;

pub fn stub_document(id: i64, filename: &str, status: &str) -> Value {
    json!({
        "id": id,
        "filename": filename,
        "processing_status": status,
        "upload_date": format!("2024-03-{:02} 10:00:00", id),
        "extracted_data": {}
    })
}

async fn stub_list(State(state): State<SharedStub>) -> impl IntoResponse {
    let state = state.lock().unwrap();
    if let Some(detail) = &state.fail_list {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response();
    }
    Json(state.documents.clone()).into_response()
}

async fn stub_get(State(state): State<SharedStub>, Path(id): Path<i64>) -> impl IntoResponse {
    let state = state.lock().unwrap();
    match state.details.get(&id) {
        Some(document) => Json(document.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Document not found" })),
        )
            .into_response(),
    }
}

async fn stub_upload(State(state): State<SharedStub>, mut multipart: Multipart) -> impl IntoResponse {
    let mut filename = String::from("unnamed");
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            if let Some(name) = field.file_name() {
                filename = name.to_string();
            }
            let _ = field.bytes().await;
        }
    }

    let mut state = state.lock().unwrap();
    if let Some(detail) = &state.fail_upload {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response();
    }
    state.upload_count += 1;
    state.next_id += 1;
    let document = stub_document(state.next_id, &filename, "processed");
    state.documents.push(document);
    Json(json!({
        "message": "Document uploaded and processed successfully!",
        "filename": filename
    }))
    .into_response()
}

async fn stub_delete(State(state): State<SharedStub>, Path(id): Path<i64>) -> impl IntoResponse {
    let mut state = state.lock().unwrap();
    if let Some(detail) = &state.fail_delete {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response();
    }
    state.delete_count += 1;
    state.documents.retain(|document| document["id"].as_i64() != Some(id));
    Json(json!({})).into_response()
}

async fn spawn_stub(initial: StubState) -> (String, SharedStub) {
    let state: SharedStub = Arc::new(Mutex::new(initial));
    let router = Router::new()
        .route("/documents", get(stub_list))
        .route("/documents/:id", get(stub_get).delete(stub_delete))
        .route("/upload", post(stub_upload))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    (address, state)
}

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub backend: SharedStub,
}

impl TestApp {
    pub async fn spawn(initial: StubState) -> Self {
        let (backend_url, backend) = spawn_stub(initial).await;

        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            backend: BackendSettings {
                base_url: backend_url,
                request_timeout_secs: 5,
            },
        };

        let app = Application::build(settings)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();

        // Wait for the server to answer before handing it to the test.
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            client,
            backend,
        }
    }

    /// Current render of the console (follows the action redirects).
    pub async fn page(&self) -> String {
        self.client
            .get(format!("{}/", self.address))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap()
    }

    /// Posts an action route and returns the page it redirects to.
    pub async fn post(&self, path: &str) -> String {
        self.client
            .post(format!("{}{}", self.address, path))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap()
    }
}
