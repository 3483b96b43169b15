use std::sync::{Arc, Mutex};

use earnings_digest::ContentGenerator;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MockGeneratorError(pub String);

#[derive(Clone)]
pub struct MockGenerator {
    pub response: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockGenerator {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            response: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl ContentGenerator for MockGenerator {
    type Error = MockGeneratorError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(prompt.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(MockGeneratorError(msg.clone()));
        }
        Ok(self.response.clone())
    }
}
