use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod accumulator;
pub mod analyzer;
pub mod backend;
pub mod catalog;
pub mod config_file;
pub mod mock;
pub mod scoring;

// Re-export for convenience
pub use accumulator::TaxAccumulator;
pub use analyzer::{analyze_document, analyze_document_with_progress};
pub use backend::{BackendError, DocumentPages, PdfBackend};
pub use catalog::{SIGNAL_CATALOG, SignalCategory, SignalEffect, SignalRule};
pub use scoring::{complexity_score, tier_for_score};

/// How involved the filer's investment activity looks, judged purely from
/// which investment-related schedules appear in the document.
///
/// Later pages overwrite earlier ones: a `Schedule B` on page 5 downgrades a
/// `Schedule D` seen on page 2 to `Moderate`. This mirrors the original
/// scan-order semantics and is covered by a test in [`analyzer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentComplexity {
    #[default]
    Simple,
    Moderate,
    Complex,
}

impl std::fmt::Display for InvestmentComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        };
        f.write_str(s)
    }
}

/// Overall preparation complexity tier, derived from the finalized signal
/// counts by [`scoring::tier_for_score`]. Never set independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

/// The finalized, immutable result of analyzing one document.
///
/// Produced by [`TaxAccumulator::finalize`]. The three label lists are
/// deduplicated with first-occurrence order preserved, and
/// `estimated_complexity` is a pure function of the other fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSummary {
    pub schedules: Vec<String>,
    pub income_types: Vec<String>,
    pub deduction_categories: Vec<String>,
    pub has_business_income: bool,
    pub has_rental_property: bool,
    pub investment_complexity: InvestmentComplexity,
    pub estimated_complexity: ComplexityTier,
}

/// Fatal analysis failure. Per-page extraction problems are not errors —
/// they are logged and skipped inside the page fold.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("failed to open document: {0}")]
    DocumentOpen(#[source] BackendError),
}

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn summary_serializes_with_camel_case_keys() {
        let summary = TaxSummary {
            schedules: vec!["Schedule C".to_string()],
            income_types: vec!["W-2".to_string()],
            deduction_categories: vec![],
            has_business_income: true,
            has_rental_property: false,
            investment_complexity: InvestmentComplexity::Moderate,
            estimated_complexity: ComplexityTier::Intermediate,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["hasBusinessIncome"], true);
        assert_eq!(json["investmentComplexity"], "moderate");
        assert_eq!(json["estimatedComplexity"], "intermediate");
        assert_eq!(json["incomeTypes"][0], "W-2");
    }

    #[test]
    fn default_summary_is_basic_and_simple() {
        let summary = TaxSummary::default();
        assert_eq!(summary.investment_complexity, InvestmentComplexity::Simple);
        assert_eq!(summary.estimated_complexity, ComplexityTier::Basic);
    }
}
