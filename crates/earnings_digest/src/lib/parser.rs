//! # Model response parser
//!
//! Turns the free-form text a model hands back into the JSON object the
//! summary pipeline decodes: strip markdown code fences, then slice out the
//! brace-delimited object.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractionError;

static LEADING_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A```(?:[\w+.-]*[ \t]*\r?\n)?").unwrap());

static TRAILING_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*```\z").unwrap());

static JSON_OBJECT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Removes a markdown code fence (with an optional language tag) wrapping
/// `text` and trims the result.
///
/// Fences are only recognised at the very start and end of the text. Nested
/// wrappers are peeled until none are left, so the function is idempotent.
pub fn unwrap_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    let mut current = trimmed.to_string();

    loop {
        let unwrapped = {
            let without_leading = LEADING_FENCE_RE.replace(&current, "");
            TRAILING_FENCE_RE
                .replace(&without_leading, "")
                .trim()
                .to_string()
        };

        if unwrapped == current {
            break;
        }
        current = unwrapped;
    }

    if current != trimmed {
        tracing::info!("Code fences removed from the AI response");
    }

    current
}

/// Returns the span from the first `{` to the last `}` in `text`, inclusive.
///
/// Brace balance is not checked; a malformed span is handed back as-is and
/// fails later when decoded. Two sibling objects in one response come back as
/// a single (invalid) span.
pub fn extract_json(text: &str) -> Result<&str, ExtractionError> {
    match JSON_OBJECT_RE.find(text) {
        Some(m) => {
            tracing::info!("JSON object extracted from the AI response");
            Ok(m.as_str())
        }
        None => {
            tracing::error!("No JSON object found in the AI response");
            Err(ExtractionError)
        }
    }
}
