//! API handlers for the policy server

use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::{
    extract::{Multipart, State},
    Json,
};
use policy_engine::{DirectorySink, PipelineOutput};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::error::ServerError;
use crate::AppState;

/// Multipart field carrying the policy document
const FILE_FIELD: &str = "file";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "API is running",
        service: "policy-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Simplified summary response
#[derive(Serialize)]
pub struct SimplifyResponse {
    pub status: &'static str,
    pub data: String,
}

/// True when the filename has a `.pdf` extension (any case)
pub fn is_pdf_filename(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Write one request's artifacts into `<dir>/<document id>/`
pub fn persist_artifacts(
    dir: &Path,
    document_id: &str,
    output: &PipelineOutput,
) -> Result<PathBuf, ServerError> {
    let target = dir.join(document_id);
    output.write_to(&mut DirectorySink::new(target.clone()))?;
    debug!("Artifacts for {} written to {}", document_id, target.display());
    Ok(target)
}

struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, ServerError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::InvalidRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ServerError::InvalidRequest(e.to_string()))?;
        return Ok(Upload {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    Err(ServerError::MissingFile)
}

/// Handler: POST /api/simplify-policy
pub async fn handle_simplify_policy(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SimplifyResponse>, ServerError> {
    info!("Received request to /api/simplify-policy");

    let upload = read_upload(multipart).await?;
    if upload.filename.is_empty() {
        return Err(ServerError::EmptyFilename);
    }
    if !is_pdf_filename(&upload.filename) {
        error!("Invalid file type: {}", upload.filename);
        return Err(ServerError::UnsupportedFileType(upload.filename));
    }
    debug!("Upload {}: {} bytes", upload.filename, upload.bytes.len());

    let engine = state.engine.clone();
    let output_dir = state.output_dir.clone();
    let task = tokio::task::spawn_blocking(move || -> Result<String, ServerError> {
        let document = shared_pdf::extract_document(&upload.bytes, &upload.filename)?;
        let output = engine.process(&document.raw_text());
        if let Some(dir) = output_dir {
            persist_artifacts(&dir, &document.id, &output)?;
        }
        Ok(output.summary.content)
    });

    let summary = tokio::time::timeout(Duration::from_millis(state.timeout_ms), task)
        .await
        .map_err(|_| ServerError::Timeout(state.timeout_ms))?
        .map_err(|e| ServerError::Internal(e.to_string()))?
        .inspect_err(|e| error!("Error processing file: {}", e))?;

    info!("Simplified summary generated ({} bytes)", summary.len());
    Ok(Json(SimplifyResponse {
        status: "success",
        data: summary,
    }))
}
