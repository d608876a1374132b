use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use taxscan_core::analyzer::{analyze_document, analyze_document_with_progress};
use taxscan_core::{AnalyzeError, PdfBackend, TaxSummary};

// Re-export domain types for convenience
pub use taxscan_core::{ComplexityTier, InvestmentComplexity};

/// Default input size cap: 50 MiB.
pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum IngestError {
    /// Input failed the type/size guard; the core was never invoked.
    #[error("invalid input: {0}")]
    Validation(String),
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-page progress callback: `(pages_done, total_pages)`.
pub type ProgressFn = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Options for [`analyze_file_with`].
#[derive(Clone, Default)]
pub struct AnalyzeOptions {
    /// Size cap override; `None` means [`MAX_FILE_SIZE_BYTES`].
    pub max_file_size_bytes: Option<u64>,
    pub progress: Option<ProgressFn>,
}

impl std::fmt::Debug for AnalyzeOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzeOptions")
            .field("max_file_size_bytes", &self.max_file_size_bytes)
            .field("progress", &self.progress.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Validate the declared type (extension) and size of an input file before
/// the core runs. Returns the file size on success.
pub fn validate_input(path: &Path, max_size_bytes: u64) -> Result<u64, IngestError> {
    let is_pdf = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(IngestError::Validation(
            "unsupported file type, only PDF files are supported".to_string(),
        ));
    }

    let size = std::fs::metadata(path)?.len();
    if size > max_size_bytes {
        return Err(IngestError::Validation(format!(
            "file size {} bytes exceeds maximum of {} bytes",
            size, max_size_bytes
        )));
    }
    Ok(size)
}

/// Analyze a document file with an explicit backend.
///
/// This is the async outward-facing unit of work: validation happens up
/// front, then open + page fold run on the blocking pool. Pages of one
/// document still fold strictly in page order; per-page failures are
/// logged and skipped inside the fold.
pub async fn analyze_file_with<B>(
    path: impl Into<PathBuf>,
    backend: B,
    options: AnalyzeOptions,
) -> Result<TaxSummary, IngestError>
where
    B: PdfBackend + 'static,
{
    let path = path.into();
    let max_size = options.max_file_size_bytes.unwrap_or(MAX_FILE_SIZE_BYTES);
    validate_input(&path, max_size)?;

    tracing::info!(path = %path.display(), "analyzing document");

    let progress = options.progress;
    let handle = tokio::task::spawn_blocking(move || {
        let document = backend.open(&path).map_err(AnalyzeError::DocumentOpen)?;
        let summary = match progress {
            Some(cb) => analyze_document_with_progress(&*document, |done, total| cb(done, total)),
            None => analyze_document(&*document),
        };
        Ok::<_, AnalyzeError>(summary)
    });

    let summary = handle
        .await
        .map_err(|e| IngestError::Io(std::io::Error::other(e)))??;
    Ok(summary)
}

/// Analyze a document file with the default MuPDF backend.
#[cfg(feature = "pdf")]
pub async fn analyze_file(
    path: impl Into<PathBuf>,
    options: AnalyzeOptions,
) -> Result<TaxSummary, IngestError> {
    analyze_file_with(path, taxscan_pdf_mupdf::MupdfBackend::new(), options).await
}
