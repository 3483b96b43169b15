use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, tokens::TokenCounter};

/// Upper bound on transcript size accepted before the model is called.
pub const DEFAULT_MAX_TRANSCRIPT_TOKENS: usize = 20_000;

/// A transcript to summarize on behalf of `company_name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryRequest {
    pub company_name: String,
    pub transcript_text: String,
}

impl SummaryRequest {
    pub fn new(company_name: impl Into<String>, transcript_text: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            transcript_text: transcript_text.into(),
        }
    }

    /// Rejects requests that must never reach the model: blank company names,
    /// blank transcripts and transcripts over `max_tokens`.
    ///
    /// Returns the token count on success so callers can log it.
    pub fn validate<C: TokenCounter>(
        &self,
        counter: &C,
        max_tokens: usize,
    ) -> Result<usize, ValidationError> {
        if self.company_name.trim().is_empty() {
            return Err(ValidationError::EmptyCompanyName);
        }
        if self.transcript_text.trim().is_empty() {
            return Err(ValidationError::EmptyTranscript);
        }

        let count = counter.count_tokens(&self.transcript_text);
        if count > max_tokens {
            return Err(ValidationError::TokenLimitExceeded {
                count,
                limit: max_tokens,
            });
        }

        tracing::info!(token_count = count, "Token count for transcript_text");
        Ok(count)
    }
}

/// Fixed-schema earnings call summary.
///
/// Every field is required when decoding; an empty string means the category
/// was not mentioned in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub company_name: String,
    pub financial_performance: String,
    pub market_dynamics: String,
    pub expansion_plans: String,
    pub environmental_risks: String,
    pub regulatory_or_policy_changes: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct WordCounter;

    impl TokenCounter for WordCounter {
        fn count_tokens(&self, text: &str) -> usize {
            text.split_whitespace().count()
        }
    }

    #[test]
    fn test_validate_accepts_transcript_within_limit() {
        let request = SummaryRequest::new("Acme", "revenue grew ten percent");
        assert_eq!(request.validate(&WordCounter, 10).unwrap(), 4);
    }

    #[test]
    fn test_validate_accepts_transcript_at_limit() {
        let request = SummaryRequest::new("Acme", "one two three");
        assert!(request.validate(&WordCounter, 3).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_transcript() {
        let request = SummaryRequest::new("Acme", "   \n\t ");
        assert!(matches!(
            request.validate(&WordCounter, 10),
            Err(ValidationError::EmptyTranscript)
        ));
    }

    #[test]
    fn test_validate_rejects_blank_company() {
        let request = SummaryRequest::new(" ", "some transcript");
        assert!(matches!(
            request.validate(&WordCounter, 10),
            Err(ValidationError::EmptyCompanyName)
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_transcript() {
        let request = SummaryRequest::new("Acme", "a b c d e");
        let err = request.validate(&WordCounter, 4).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TokenLimitExceeded { count: 5, limit: 4 }
        ));
        assert!(err.to_string().contains("Current token count: 5."));
    }

    #[test]
    fn test_record_requires_every_field() {
        let missing = json!({
            "company_name": "Acme",
            "financial_performance": "Up",
            "market_dynamics": "",
            "expansion_plans": "",
            "environmental_risks": ""
        });
        let err = serde_json::from_value::<SummaryRecord>(missing).unwrap_err();
        assert!(err.to_string().contains("regulatory_or_policy_changes"));
    }

    #[test]
    fn test_record_rejects_non_string_field() {
        let value = json!({
            "company_name": "Acme",
            "financial_performance": null,
            "market_dynamics": "",
            "expansion_plans": "",
            "environmental_risks": "",
            "regulatory_or_policy_changes": ""
        });
        assert!(serde_json::from_value::<SummaryRecord>(value).is_err());
    }
}
