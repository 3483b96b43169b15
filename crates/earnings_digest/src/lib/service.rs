use std::{path::Path, sync::Arc};

use transcript_pdf::PdfTextExtractor;

use crate::{
    error::ServiceError, normalize::normalize, tokens::TokenCounter, ContentGenerator,
    SummaryRecord, SummaryRequest, TranscriptSummarizer,
};

pub mod builder;

/// Validates incoming transcripts and hands them to the summarizer.
///
/// Holds no per-request state, so one instance can be shared behind an `Arc`
/// by every request the host serves.
#[derive(Debug)]
pub struct DigestService<G, C, P> {
    pub(crate) summarizer: TranscriptSummarizer<G>,
    pub(crate) token_counter: C,
    pub(crate) pdf_extractor: Arc<P>,
    pub(crate) max_transcript_tokens: usize,
}

impl<G, C, P> DigestService<G, C, P>
where
    G: ContentGenerator + Send + Sync + 'static,
    C: TokenCounter + Send + Sync + 'static,
    P: PdfTextExtractor + Send + Sync + 'static,
{
    /// Summarizes a transcript supplied as text.
    #[tracing::instrument(skip_all, fields(company_name = %request.company_name))]
    pub async fn summarize_text(
        &self,
        request: &SummaryRequest,
    ) -> Result<SummaryRecord, ServiceError> {
        tracing::info!("Received request for summarizing transcript");

        request
            .validate(&self.token_counter, self.max_transcript_tokens)
            .inspect_err(|e| tracing::error!(error = %e, "Validation error"))?;

        let summary = self
            .summarizer
            .summarize(request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Summarization error"))?;

        tracing::info!("Transcript summarized successfully");
        Ok(summary)
    }

    /// Extracts and normalizes the text of the PDF at `path`, then summarizes it.
    #[tracing::instrument(skip(self))]
    pub async fn summarize_pdf(
        &self,
        company_name: &str,
        path: &Path,
    ) -> Result<SummaryRecord, ServiceError> {
        let transcript_text = self.load_pdf_transcript(path).await?;
        let request = SummaryRequest::new(company_name, transcript_text);
        self.summarize_text(&request).await
    }

    /// Returns the normalized text of the PDF at `path`.
    pub async fn load_pdf_transcript(&self, path: &Path) -> Result<String, ServiceError> {
        let extractor = Arc::clone(&self.pdf_extractor);
        let path = path.to_path_buf();

        let raw_text = tokio::task::spawn_blocking(move || extractor.extract_text(&path))
            .await?
            .inspect_err(|e| tracing::error!(error = %e, "PDF processing error"))?;

        let cleaned = normalize(&raw_text);
        tracing::info!(
            raw_chars = raw_text.len(),
            cleaned_chars = cleaned.len(),
            "PDF text extracted and cleaned successfully"
        );
        Ok(cleaned)
    }
}
