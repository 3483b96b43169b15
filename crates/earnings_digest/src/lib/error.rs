use transcript_pdf::PdfError;

/// No `{...}` span was found in the model response.
#[derive(Debug, thiserror::Error)]
#[error("Failed to extract JSON from AI model response")]
pub struct ExtractionError;

/// Everything that can go wrong between handing the prompt to the model and
/// holding a decoded [`SummaryRecord`](crate::SummaryRecord).
///
/// Messages are safe to hand to clients; the underlying cause is only
/// reachable through [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Summary could not be generated due to an error.")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("Failed to parse AI model response into JSON.")]
    Decode(#[source] serde_json::Error),
    #[error("AI model response does not match the summary schema.")]
    Schema(#[source] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("company_name cannot be empty")]
    EmptyCompanyName,
    #[error("transcript_text cannot be empty")]
    EmptyTranscript,
    #[error(
        "transcript_text exceeds the maximum allowed token limit of {limit} tokens. \
         Current token count: {count}."
    )]
    TokenLimitExceeded { count: usize, limit: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Pdf(#[from] PdfError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
