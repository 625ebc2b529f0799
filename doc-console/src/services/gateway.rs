//! HTTP client for the document processing backend.
//!
//! The backend owns parsing, extraction and persistence; the console only
//! consumes its JSON surface. All calls go through the [`DocumentGateway`]
//! trait so the controller can be exercised against an in-process fake.

use crate::config::BackendSettings;
use crate::models::document::{DocumentDetail, DocumentId, DocumentRecord};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{multipart, Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Failure taxonomy for backend calls. The `Display` form is the
/// user-visible message.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No response reached the client.
    #[error("network error: is the backend running?")]
    Network(String),

    /// Non-2xx response; `message` is the backend's `detail` field when it
    /// sent one, else the HTTP status text.
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// 2xx response whose body failed to decode.
    #[error("invalid response from the backend")]
    Decode(String),

    /// The upload payload could not be turned into a request.
    #[error("invalid upload payload: {0}")]
    InvalidPayload(String),
}

/// A file selected for upload.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl FilePayload {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Backend acknowledgement of a processed upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Error body shape used by the backend for failed requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// The remote document collection, as the controller sees it.
#[async_trait]
pub trait DocumentGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<DocumentRecord>, GatewayError>;
    async fn get(&self, id: DocumentId) -> Result<DocumentDetail, GatewayError>;
    async fn upload(&self, file: FilePayload) -> Result<UploadReceipt, GatewayError>;
    async fn delete(&self, id: DocumentId) -> Result<(), GatewayError>;
}

/// Production gateway speaking HTTP/JSON to the processing backend.
pub struct HttpDocumentGateway {
    client: Client,
    settings: BackendSettings,
}

impl HttpDocumentGateway {
    pub fn new(settings: BackendSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        Ok(Self { client, settings })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    /// Maps a non-2xx response to [`GatewayError::Server`], preferring the
    /// backend's structured `detail` field over the status text.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody {
                detail: Some(detail),
            }) => detail,
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };

        Err(GatewayError::Server { status, message })
    }
}

#[async_trait]
impl DocumentGateway for HttpDocumentGateway {
    async fn list(&self) -> Result<Vec<DocumentRecord>, GatewayError> {
        let url = self.url("/documents");
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "List documents request failed");
            GatewayError::Network(e.to_string())
        })?;

        let response = Self::check(response).await?;
        response.json::<Vec<DocumentRecord>>().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to decode document list");
            GatewayError::Decode(e.to_string())
        })
    }

    async fn get(&self, id: DocumentId) -> Result<DocumentDetail, GatewayError> {
        let url = self.url(&format!("/documents/{}", id));
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(document_id = id, error = %e, "Get document request failed");
            GatewayError::Network(e.to_string())
        })?;

        let response = Self::check(response).await?;
        response.json::<DocumentDetail>().await.map_err(|e| {
            tracing::error!(document_id = id, error = %e, "Failed to decode document detail");
            GatewayError::Decode(e.to_string())
        })
    }

    async fn upload(&self, file: FilePayload) -> Result<UploadReceipt, GatewayError> {
        let url = self.url("/upload");
        let filename = file.filename.clone();

        let part = multipart::Part::bytes(file.data)
            .file_name(file.filename)
            .mime_str(&file.content_type)
            .map_err(|e| GatewayError::InvalidPayload(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(filename = %filename, error = %e, "Upload request failed");
                GatewayError::Network(e.to_string())
            })?;

        let response = Self::check(response).await?;
        response.json::<UploadReceipt>().await.map_err(|e| {
            tracing::error!(filename = %filename, error = %e, "Failed to decode upload receipt");
            GatewayError::Decode(e.to_string())
        })
    }

    async fn delete(&self, id: DocumentId) -> Result<(), GatewayError> {
        let url = self.url(&format!("/documents/{}", id));
        let response = self.client.delete(&url).send().await.map_err(|e| {
            tracing::error!(document_id = id, error = %e, "Delete request failed");
            GatewayError::Network(e.to_string())
        })?;

        Self::check(response).await?;
        Ok(())
    }
}
