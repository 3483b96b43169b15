use another_tiktoken_rs::CoreBPE;

pub trait TokenCounter {
    fn count_tokens(&self, text: &str) -> usize;
}

impl<T: TokenCounter + ?Sized> TokenCounter for &T {
    fn count_tokens(&self, text: &str) -> usize {
        (**self).count_tokens(text)
    }
}

impl<T: TokenCounter + ?Sized> TokenCounter for std::sync::Arc<T> {
    fn count_tokens(&self, text: &str) -> usize {
        (**self).count_tokens(text)
    }
}

/// Counts tokens locally with the `cl100k_base` BPE.
///
/// This is an approximation of the hosted model's own tokenizer; the ceiling
/// it guards is a cost/latency guard, not a hard context limit.
pub struct TiktokenCounter {
    bpe: CoreBPE,
}

impl TiktokenCounter {
    pub fn new() -> anyhow::Result<Self> {
        let bpe = another_tiktoken_rs::cl100k_base()
            .inspect_err(|e| tracing::error!(error = %e, "Failed to load cl100k_base tokenizer"))?;
        tracing::info!("Tokenizer initialized successfully");
        Ok(Self { bpe })
    }
}

impl TokenCounter for TiktokenCounter {
    fn count_tokens(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}
