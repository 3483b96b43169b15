use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not read or decode the PDF file: {reason}")]
    UnreadablePdf { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
