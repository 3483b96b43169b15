use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use transcript_pdf::PdfTextExtractor;

use crate::{
    server::error::ApiError, tokens::TokenCounter, ContentGenerator, DigestService, ServiceError,
    SummaryRecord, SummaryRequest,
};

const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn summarize_transcript<G, C, P>(
    State(service): State<Arc<DigestService<G, C, P>>>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryRecord>, ApiError>
where
    G: ContentGenerator + Send + Sync + 'static,
    C: TokenCounter + Send + Sync + 'static,
    P: PdfTextExtractor + Send + Sync + 'static,
{
    let Json(request) = payload?;
    let summary = service.summarize_text(&request).await?;
    Ok(Json(summary))
}

pub async fn summarize_transcript_from_pdf<G, C, P>(
    State(service): State<Arc<DigestService<G, C, P>>>,
    mut multipart: Multipart,
) -> Result<Json<SummaryRecord>, ApiError>
where
    G: ContentGenerator + Send + Sync + 'static,
    C: TokenCounter + Send + Sync + 'static,
    P: PdfTextExtractor + Send + Sync + 'static,
{
    let mut company_name: Option<String> = None;
    let mut pdf_bytes: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "company_name" => company_name = Some(field.text().await?),
            "pdf_file" => {
                if field.content_type() != Some(PDF_CONTENT_TYPE) {
                    tracing::error!(content_type = ?field.content_type(), "Uploaded file is not a PDF");
                    return Err(ApiError::bad_request(
                        "Invalid file type. Only PDF files are accepted.",
                    ));
                }
                pdf_bytes = Some(field.bytes().await?);
            }
            _ => tracing::debug!(field = %name, "Ignoring unexpected form field"),
        }
    }

    let company_name =
        company_name.ok_or_else(|| ApiError::bad_request("Missing form field: company_name"))?;
    let pdf_bytes = pdf_bytes.ok_or_else(|| ApiError::bad_request("Missing form field: pdf_file"))?;

    tracing::info!(%company_name, "Received request for summarizing PDF transcript");

    // removed from disk when dropped, whichever way the request ends
    let tmp = tempfile::Builder::new().suffix(".pdf").tempfile()?;
    tokio::fs::write(tmp.path(), &pdf_bytes).await?;
    tracing::info!(path = ?tmp.path(), "PDF file saved temporarily");

    // validation failures on uploaded text are reported as bad requests
    let summary = service
        .summarize_pdf(&company_name, tmp.path())
        .await
        .map_err(|e| match e {
            ServiceError::Validation(e) => ApiError::bad_request(e.to_string()),
            other => ApiError::from(other),
        })?;

    tracing::info!(%company_name, "PDF transcript summarized successfully");
    Ok(Json(summary))
}
