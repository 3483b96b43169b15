use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::{Map, Value};

use crate::{
    error::UpstreamError,
    parser::{extract_json, unwrap_code_fences},
    ContentGenerator, SummaryRecord, SummaryRequest,
};

const SUMMARY_PROMPT: &str = include_str!("./llm/prompts/summary_0.txt");

static PROMPT_PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(company_name|transcript_text)\}").unwrap());

/// Drives a single summary request: prompt the model, then unwrap, extract
/// and decode whatever it sends back.
#[derive(Debug, Clone)]
pub struct TranscriptSummarizer<G> {
    generator: G,
}

impl<G> TranscriptSummarizer<G>
where
    G: ContentGenerator + Send + Sync,
{
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryRecord, UpstreamError> {
        self.request_summary(&request.company_name, &request.transcript_text)
            .await
    }

    #[tracing::instrument(skip(self, transcript_text), fields(transcript_len = transcript_text.len()))]
    pub async fn request_summary(
        &self,
        company_name: &str,
        transcript_text: &str,
    ) -> Result<SummaryRecord, UpstreamError> {
        let prompt = build_prompt(company_name, transcript_text);

        let response = self
            .generator
            .generate(&prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error during summarization"))
            .map_err(|e| UpstreamError::Model(Box::new(e)))?;

        let summary_text = response.trim();
        tracing::info!(response = %summary_text, "AI model response");

        parse_summary(summary_text)
    }
}

/// Fills the summary prompt template in a single pass, so text inside the
/// transcript that looks like a placeholder is left untouched.
pub fn build_prompt(company_name: &str, transcript_text: &str) -> String {
    PROMPT_PLACEHOLDER_RE
        .replace_all(SUMMARY_PROMPT, |caps: &Captures| match &caps[1] {
            "company_name" => company_name,
            _ => transcript_text,
        })
        .into_owned()
}

/// Turns a raw model response into a [`SummaryRecord`].
///
/// The extracted span must be a JSON object; binding it to the record then
/// fails if any of the six keys is missing or is not a string.
pub fn parse_summary(raw_response: &str) -> Result<SummaryRecord, UpstreamError> {
    let unwrapped = unwrap_code_fences(raw_response);
    let json_str = extract_json(&unwrapped)?;

    let object = serde_json::from_str::<Map<String, Value>>(json_str)
        .inspect_err(|e| {
            tracing::error!(error = %e, response = %raw_response, "JSON decode error");
        })
        .map_err(UpstreamError::Decode)?;

    serde_json::from_value::<SummaryRecord>(Value::Object(object))
        .inspect_err(|e| {
            tracing::error!(error = %e, response = %raw_response, "Summary schema mismatch");
        })
        .map_err(UpstreamError::Schema)
}
