//! Document-level orchestration: fold every page of an opened document into
//! an accumulator and finalize it.

use crate::accumulator::TaxAccumulator;
use crate::backend::DocumentPages;
use crate::{AnalyzeError, TaxSummary};

/// Analyze an opened document.
///
/// Pages are folded one at a time in increasing page-number order — the
/// ordering is a correctness requirement, because the investment level is
/// last-write-wins and first-occurrence dedup depends on append order.
///
/// A page whose text cannot be extracted is logged and skipped; it never
/// aborts the document. Finalization runs unconditionally, so a document
/// where every page fails still yields a default (basic) summary.
pub fn analyze_document(pages: &dyn DocumentPages) -> TaxSummary {
    analyze_document_with_progress(pages, |_, _| {})
}

/// [`analyze_document`] with a per-page progress callback `(pages_done,
/// total_pages)`, invoked after each page attempt (including skipped ones).
pub fn analyze_document_with_progress(
    pages: &dyn DocumentPages,
    progress: impl Fn(usize, usize),
) -> TaxSummary {
    let total = pages.page_count();
    let mut acc = TaxAccumulator::new();

    for page_number in 1..=total {
        match pages.page_text(page_number) {
            Ok(text) => acc.apply_page_text(&text),
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "skipping unreadable page");
            }
        }
        progress(page_number, total);
    }

    let summary = acc.finalize();
    tracing::debug!(
        pages = total,
        tier = %summary.estimated_complexity,
        "document analysis complete"
    );
    summary
}

/// Open `path` with `backend` and analyze it. An unopenable document is the
/// single fatal failure shape; everything past open succeeds.
pub fn analyze_path(
    backend: &dyn crate::backend::PdfBackend,
    path: &std::path::Path,
) -> Result<TaxSummary, AnalyzeError> {
    let document = backend.open(path).map_err(AnalyzeError::DocumentOpen)?;
    Ok(analyze_document(&*document))
}
