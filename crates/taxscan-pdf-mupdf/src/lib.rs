use std::path::Path;

use mupdf::{Document, TextPageFlags};

use taxscan_core::{BackendError, DocumentPages, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island — it isolates the mupdf dependency
/// (which is AGPL-3.0) so that non-PDF code paths do not transitively
/// depend on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentPages>, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::Open("invalid path encoding".into()))?;

        let document = Document::open(path_str).map_err(|e| BackendError::Open(e.to_string()))?;
        let page_count = document
            .page_count()
            .map_err(|e| BackendError::Open(e.to_string()))? as usize;

        Ok(Box::new(MupdfDocument {
            document,
            page_count,
        }))
    }
}

struct MupdfDocument {
    document: Document,
    page_count: usize,
}

impl DocumentPages for MupdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_text(&self, page_number: usize) -> Result<String, BackendError> {
        let page_err = |message: String| BackendError::Page {
            page: page_number,
            message,
        };

        let page = self
            .document
            .load_page(page_number as i32 - 1)
            .map_err(|e| page_err(e.to_string()))?;
        let text_page = page
            .to_text_page(TextPageFlags::empty())
            .map_err(|e| page_err(e.to_string()))?;

        // Flatten lines into one space-joined string so marker matching is
        // insensitive to line breaks within a page.
        let mut page_text = String::new();
        for block in text_page.blocks() {
            for line in block.lines() {
                let line_text: String = line
                    .chars()
                    .map(|c| c.char().unwrap_or('\u{FFFD}'))
                    .collect();
                if !page_text.is_empty() {
                    page_text.push(' ');
                }
                page_text.push_str(line_text.trim_end());
            }
        }
        Ok(page_text)
    }
}
