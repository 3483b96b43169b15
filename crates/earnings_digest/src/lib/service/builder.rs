use std::sync::Arc;

use transcript_pdf::PdfTextExtractor;

use crate::{
    tokens::TokenCounter, types::DEFAULT_MAX_TRANSCRIPT_TOKENS, ContentGenerator, DigestService,
    TranscriptSummarizer,
};

pub struct DigestServiceBuilder<G = (), C = (), P = ()> {
    generator: G,
    token_counter: C,
    pdf_extractor: P,
    max_transcript_tokens: usize,
}

impl DigestServiceBuilder {
    pub fn new() -> Self {
        Self {
            generator: (),
            token_counter: (),
            pdf_extractor: (),
            max_transcript_tokens: DEFAULT_MAX_TRANSCRIPT_TOKENS,
        }
    }
}

impl Default for DigestServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, C, P> DigestServiceBuilder<G, C, P> {
    pub fn generator<G2: ContentGenerator + Send + Sync + 'static>(
        self,
        generator: G2,
    ) -> DigestServiceBuilder<G2, C, P> {
        DigestServiceBuilder {
            generator,
            token_counter: self.token_counter,
            pdf_extractor: self.pdf_extractor,
            max_transcript_tokens: self.max_transcript_tokens,
        }
    }

    pub fn token_counter<C2: TokenCounter + Send + Sync + 'static>(
        self,
        token_counter: C2,
    ) -> DigestServiceBuilder<G, C2, P> {
        DigestServiceBuilder {
            generator: self.generator,
            token_counter,
            pdf_extractor: self.pdf_extractor,
            max_transcript_tokens: self.max_transcript_tokens,
        }
    }

    pub fn pdf_extractor<P2: PdfTextExtractor + Send + Sync + 'static>(
        self,
        pdf_extractor: P2,
    ) -> DigestServiceBuilder<G, C, P2> {
        DigestServiceBuilder {
            generator: self.generator,
            token_counter: self.token_counter,
            pdf_extractor,
            max_transcript_tokens: self.max_transcript_tokens,
        }
    }

    pub fn max_transcript_tokens(mut self, max_transcript_tokens: usize) -> Self {
        self.max_transcript_tokens = max_transcript_tokens;
        self
    }
}

impl<G, C, P> DigestServiceBuilder<G, C, P>
where
    G: ContentGenerator + Send + Sync + 'static,
    C: TokenCounter + Send + Sync + 'static,
    P: PdfTextExtractor + Send + Sync + 'static,
{
    pub fn build(self) -> DigestService<G, C, P> {
        DigestService {
            summarizer: TranscriptSummarizer::new(self.generator),
            token_counter: self.token_counter,
            pdf_extractor: Arc::new(self.pdf_extractor),
            max_transcript_tokens: self.max_transcript_tokens,
        }
    }
}
