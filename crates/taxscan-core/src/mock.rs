//! Mock document backend for testing.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, DocumentPages, PdfBackend};

/// An in-memory document: each entry is one page's text, or a per-page
/// extraction failure message.
pub struct MockDocument {
    pages: Vec<Result<String, String>>,
    extraction_calls: AtomicUsize,
}

impl MockDocument {
    pub fn new(pages: Vec<Result<String, String>>) -> Self {
        Self {
            pages,
            extraction_calls: AtomicUsize::new(0),
        }
    }

    /// Create a document where every page extracts successfully.
    pub fn with_pages(pages: Vec<&str>) -> Self {
        Self::new(pages.into_iter().map(|p| Ok(p.to_string())).collect())
    }

    /// How many times `page_text()` has been called.
    pub fn extraction_calls(&self) -> usize {
        self.extraction_calls.load(Ordering::SeqCst)
    }
}

impl DocumentPages for MockDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, page_number: usize) -> Result<String, BackendError> {
        self.extraction_calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(page_number - 1) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(message)) => Err(BackendError::Page {
                page: page_number,
                message: message.clone(),
            }),
            None => Err(BackendError::Page {
                page: page_number,
                message: "page out of range".to_string(),
            }),
        }
    }
}

/// A [`PdfBackend`] serving fixed in-memory pages, or failing to open.
pub enum MockBackend {
    Pages(Vec<Result<String, String>>),
    OpenFailure(String),
}

impl MockBackend {
    pub fn with_pages(pages: Vec<&str>) -> Self {
        Self::Pages(pages.into_iter().map(|p| Ok(p.to_string())).collect())
    }

    /// A backend whose `open` always fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self::OpenFailure(message.to_string())
    }
}

impl PdfBackend for MockBackend {
    fn open(&self, _path: &Path) -> Result<Box<dyn DocumentPages>, BackendError> {
        match self {
            Self::Pages(pages) => Ok(Box::new(MockDocument::new(pages.clone()))),
            Self::OpenFailure(message) => Err(BackendError::Open(message.clone())),
        }
    }
}
