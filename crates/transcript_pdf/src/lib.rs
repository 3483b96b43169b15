//! # Transcript PDF
//!
//! This crate provides functionality for turning an uploaded earnings-call
//! transcript PDF into plain text.
//!
//! Extraction sits behind the [`PdfTextExtractor`] trait so that callers can
//! swap the backend (or stub it in tests) without touching the summary pipeline.

mod error;
mod extractor;

pub use error::PdfError;
pub use extractor::backend::PdfExtractBackend;
pub use extractor::PdfTextExtractor;
