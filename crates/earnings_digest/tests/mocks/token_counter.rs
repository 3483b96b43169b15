use earnings_digest::tokens::TokenCounter;

/// Counts whitespace-separated words, which keeps limits easy to reason about.
#[derive(Clone, Default)]
pub struct MockTokenCounter;

impl TokenCounter for MockTokenCounter {
    fn count_tokens(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}
