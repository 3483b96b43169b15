use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use transcript_pdf::{PdfError, PdfTextExtractor};

#[derive(Clone)]
pub struct MockPdfExtractor {
    pub text: String,
    pub calls: Arc<Mutex<Vec<PathBuf>>>,
    pub unreadable: bool,
}

impl MockPdfExtractor {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            unreadable: false,
        }
    }

    pub fn unreadable() -> Self {
        Self {
            unreadable: true,
            ..Self::new("")
        }
    }
}

impl PdfTextExtractor for MockPdfExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, PdfError> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        if self.unreadable {
            return Err(PdfError::UnreadablePdf {
                path: path.to_path_buf(),
                reason: "mock decode failure".into(),
            });
        }
        if !path.exists() {
            return Err(PdfError::FileNotFound(path.to_path_buf()));
        }
        Ok(self.text.clone())
    }
}
