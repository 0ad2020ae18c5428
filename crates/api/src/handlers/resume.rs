//! Handler for the `/resume` download.

use std::path::Path;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Subdirectory of the upload root holding resume PDFs.
const RESUME_DIR: &str = "resume";

/// GET /resume
///
/// Serves the newest PDF in `<upload_dir>/resume` as an attachment, where
/// "newest" is the highest-sorting filename (date-stamped files pick the
/// latest). 404 when the directory is missing or holds no PDF.
pub async fn download(State(state): State<AppState>) -> AppResult<Response> {
    let dir = Path::new(&state.config.upload_dir).join(RESUME_DIR);

    let mut entries = match tokio::fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(_) => return Err(AppError::NotFound("No resume available".into())),
    };

    let mut pdfs: Vec<String> = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::InternalError(format!("Resume directory read failed: {e}")))?
    {
        let name = entry.file_name().to_string_lossy().to_string();
        if name.to_lowercase().ends_with(".pdf") {
            pdfs.push(name);
        }
    }

    pdfs.sort();
    let Some(name) = pdfs.pop() else {
        return Err(AppError::NotFound("No resume available".into()));
    };

    let bytes = tokio::fs::read(dir.join(&name))
        .await
        .map_err(|e| AppError::InternalError(format!("Resume read failed: {e}")))?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{name}\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}
