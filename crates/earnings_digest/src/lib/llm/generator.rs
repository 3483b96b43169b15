use std::future::Future;

/// Anything that can turn a prompt into response text.
pub trait ContentGenerator {
    type Error: std::error::Error + Send + Sync + 'static;

    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

impl<T: ContentGenerator + Send + Sync> ContentGenerator for &T {
    type Error = T::Error;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        (**self).generate(prompt).await
    }
}

impl<T: ContentGenerator + Send + Sync> ContentGenerator for std::sync::Arc<T> {
    type Error = T::Error;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        (**self).generate(prompt).await
    }
}
