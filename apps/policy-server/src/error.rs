//! Error types for the policy server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared_pdf::PdfError;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("No file selected")]
    EmptyFilename,

    #[error("File type not allowed. Only PDF files are accepted.")]
    UnsupportedFileType(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Error processing file: {0}")]
    Processing(String),

    #[error("Processing timeout after {0}ms")]
    Timeout(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    status: &'static str,
    message: String,
    code: &'static str,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::MissingFile => (StatusCode::BAD_REQUEST, "MISSING_FILE"),
            ServerError::EmptyFilename => (StatusCode::BAD_REQUEST, "EMPTY_FILENAME"),
            ServerError::UnsupportedFileType(_) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_FILE_TYPE")
            }
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ServerError::Processing(_) => (StatusCode::INTERNAL_SERVER_ERROR, "PROCESSING_ERROR"),
            ServerError::Timeout(_) => (StatusCode::REQUEST_TIMEOUT, "TIMEOUT"),
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            status: "error",
            message: self.to_string(),
            code,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PdfError> for ServerError {
    fn from(err: PdfError) -> Self {
        ServerError::Processing(err.to_string())
    }
}

impl From<policy_engine::PolicyError> for ServerError {
    fn from(err: policy_engine::PolicyError) -> Self {
        ServerError::Internal(err.to_string())
    }
}
