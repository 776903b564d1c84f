use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown template key: {0}")]
    UnknownTemplate(String),

    #[error("unknown signer key: {0}")]
    UnknownSigner(String),

    #[error("no PDF files in upload")]
    EmptyBatch,

    #[error("unsupported upload (expected .pdf): {0}")]
    InvalidUpload(String),

    #[error("text extraction failed for {name}: {reason}")]
    Extraction { name: String, reason: String },

    #[error("document rendering failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownTemplate(_)
            | AppError::UnknownSigner(_)
            | AppError::EmptyBatch
            | AppError::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        let status = self.status();
        let body = axum::Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
