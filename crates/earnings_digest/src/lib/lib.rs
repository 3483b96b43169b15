mod error;
mod llm;
pub mod normalize;
pub mod parser;
mod service;
pub mod server;
mod summarizer;
pub mod tokens;
pub mod tracing;
mod types;

pub use error::{ExtractionError, ServiceError, UpstreamError, ValidationError};
pub use llm::gemini;
pub use llm::ContentGenerator;
pub use service::{builder::DigestServiceBuilder, DigestService};
pub use summarizer::{build_prompt, parse_summary, TranscriptSummarizer};
pub use types::{SummaryRecord, SummaryRequest, DEFAULT_MAX_TRANSCRIPT_TOKENS};
