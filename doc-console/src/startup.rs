use crate::config::Settings;
use crate::controller::ViewController;
use crate::handlers::{
    app::{health_check, index},
    documents, metrics, upload,
};
use crate::services::gateway::HttpDocumentGateway;
use crate::AppState;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use console_core::error::AppError;
use console_core::middleware::{metrics::metrics_middleware, request_id::request_id_middleware};
use console_core::observability::metrics::init_metrics;
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics::metrics))
        .route("/search", post(documents::search))
        .route("/sort/:key", post(documents::sort))
        .route("/refresh", post(documents::refresh))
        .route("/upload", post(upload::upload))
        .route("/documents/:id/select", post(documents::select))
        .route("/documents/:id/delete", post(documents::request_delete))
        .route("/delete/confirm", post(documents::confirm_delete))
        .route("/delete/cancel", post(documents::cancel_delete))
        .route("/back", post(documents::back))
        .route("/status/dismiss", post(documents::dismiss_status))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        init_metrics();

        let gateway = HttpDocumentGateway::new(settings.backend.clone()).map_err(|e| {
            tracing::error!(error = %e, "Failed to construct backend gateway");
            AppError::InternalError(e)
        })?;

        let mut controller = ViewController::new(Arc::new(gateway));
        // First render wants a populated list; an unreachable backend simply
        // becomes a status message on it.
        controller.load_documents().await;

        let state = AppState::new(controller);
        let app = build_router(state.clone());

        let address = format!("{}:{}", settings.server.host, settings.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port, "doc-console listening");

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
