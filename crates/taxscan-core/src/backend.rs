use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open document: {0}")]
    Open(String),
    #[error("failed to extract text from page {page}: {message}")]
    Page { page: usize, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for document text extraction backends.
///
/// Implementors provide the low-level open step; the per-page fold and
/// signal detection live in [`crate::analyzer`].
pub trait PdfBackend: Send + Sync {
    /// Open a document file for page-wise text extraction.
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentPages>, BackendError>;
}

/// An opened document that can produce flattened text per page.
pub trait DocumentPages {
    fn page_count(&self) -> usize;

    /// Extract the text of one page as a single flattened string.
    /// `page_number` is 1-based. A failure here is scoped to that page only.
    fn page_text(&self, page_number: usize) -> Result<String, BackendError>;
}
