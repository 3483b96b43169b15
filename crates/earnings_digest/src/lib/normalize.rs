//! Cleanup for text extracted from transcript PDFs.
//!
//! The placeholder denylist is intentionally narrow: it only knows the literal
//! assignments that show up in coding-exercise boilerplate (`nums`, `target`,
//! `l1`, `l2`) and must not grow into general code stripping.

use std::sync::LazyLock;

use regex::Regex;

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#.*").unwrap());

static BLANK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*$").unwrap());

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:nums|l1|l2)\s*=\s*\[.*?\]|target\s*=\s*\d+").unwrap()
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes raw extracted text into a single line.
///
/// Total over every input and idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let text = COMMENT_RE.replace_all(text, "");
    let text = BLANK_LINE_RE.replace_all(&text, "");
    let mut text = WHITESPACE_RE.replace_all(&text, " ").into_owned();

    // removing one placeholder can splice together the text of another
    while PLACEHOLDER_RE.is_match(&text) {
        text = PLACEHOLDER_RE.replace_all(&text, "").into_owned();
    }

    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}
