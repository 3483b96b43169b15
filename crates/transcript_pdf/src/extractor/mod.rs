use std::path::Path;

use crate::PdfError;

pub mod backend;

pub trait PdfTextExtractor {
    /// Returns the text of every page in `path`, concatenated in page order.
    fn extract_text(&self, path: &Path) -> Result<String, PdfError>;
}

impl<T: PdfTextExtractor + ?Sized> PdfTextExtractor for &T {
    fn extract_text(&self, path: &Path) -> Result<String, PdfError> {
        (**self).extract_text(path)
    }
}

impl<T: PdfTextExtractor + ?Sized> PdfTextExtractor for std::sync::Arc<T> {
    fn extract_text(&self, path: &Path) -> Result<String, PdfError> {
        (**self).extract_text(path)
    }
}
