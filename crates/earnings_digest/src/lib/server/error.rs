use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use transcript_pdf::PdfError;

use crate::error::ServiceError;

/// Error body returned by every endpoint: `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.detail });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::Validation(e) => Self::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            ServiceError::Pdf(e @ (PdfError::FileNotFound(_) | PdfError::UnreadablePdf { .. })) => {
                Self::bad_request(e.to_string())
            }
            ServiceError::Upstream(e) => Self::new(StatusCode::BAD_GATEWAY, e.to_string()),
            ServiceError::Pdf(PdfError::Io(e)) | ServiceError::Io(e) => {
                tracing::error!(error = %e, "Error processing PDF file");
                Self::internal("Failed to process the uploaded PDF file.")
            }
            ServiceError::Task(e) => {
                tracing::error!(error = %e, "Unexpected error");
                Self::internal("An unexpected error occurred.")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        Self::new(error.status(), error.body_text())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(error: std::io::Error) -> Self {
        ServiceError::Io(error).into()
    }
}
