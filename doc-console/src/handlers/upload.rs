use crate::services::gateway::FilePayload;
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    response::Redirect,
};
use console_core::error::AppError;

/// Reads the multipart form and hands the (possibly absent) file to the
/// controller; selection validation lives there, not here.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut file: Option<FilePayload> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("invalid multipart request: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| {
                tracing::error!(filename = %filename, error = %e, "Failed to read uploaded file");
                AppError::BadRequest(anyhow::anyhow!("failed to read uploaded file: {}", e))
            })?
            .to_vec();

        // Browsers submit an empty unnamed part when nothing was picked.
        if filename.is_empty() && data.is_empty() {
            continue;
        }

        file = Some(FilePayload {
            filename,
            content_type,
            data,
        });
    }

    state.controller.lock().await.upload(file).await;
    Ok(Redirect::to("/"))
}
