use std::{
    io::ErrorKind,
    panic::{catch_unwind, AssertUnwindSafe},
    path::Path,
};

use crate::{PdfError, PdfTextExtractor};

/// Pure-Rust extraction backend built on the `pdf-extract` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        PdfExtractBackend
    }
}

impl PdfTextExtractor for PdfExtractBackend {
    #[tracing::instrument(skip(self))]
    fn extract_text(&self, path: &Path) -> Result<String, PdfError> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PdfError::FileNotFound(path.to_path_buf()),
            _ => PdfError::Io(e),
        })?;

        // pdf-extract panics on some malformed documents instead of returning an error
        let result = catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&bytes)
        }));

        let text = match result {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Failed to decode PDF");
                return Err(PdfError::UnreadablePdf {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                tracing::error!("PDF backend panicked while decoding document");
                return Err(PdfError::UnreadablePdf {
                    path: path.to_path_buf(),
                    reason: "malformed document".into(),
                });
            }
        };

        tracing::debug!(chars = text.len(), "Extracted PDF text");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_file_is_file_not_found() {
        let path = Path::new("/definitely/not/here/transcript.pdf");
        let result = PdfExtractBackend::new().extract_text(path);
        assert!(
            matches!(result, Err(PdfError::FileNotFound(ref p)) if p == path),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn test_non_pdf_bytes_are_unreadable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is plain text, not a pdf").unwrap();

        let result = PdfExtractBackend::new().extract_text(file.path());
        assert!(
            matches!(result, Err(PdfError::UnreadablePdf { .. })),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = PdfError::FileNotFound("/tmp/call.pdf".into());
        assert_eq!(err.to_string(), "File not found: /tmp/call.pdf");

        let err = PdfError::UnreadablePdf {
            path: "/tmp/call.pdf".into(),
            reason: "bad xref".into(),
        };
        assert_eq!(
            err.to_string(),
            "Could not read or decode the PDF file: bad xref"
        );
    }
}
