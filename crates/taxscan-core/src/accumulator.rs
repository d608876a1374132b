//! Mutable per-document working state and the rule interpreter that folds
//! page text into it.

use crate::catalog::{SIGNAL_CATALOG, SignalCategory, SignalEffect};
use crate::{InvestmentComplexity, TaxSummary};

/// Working state for one document, mutated once per page.
///
/// Owned exclusively by a single analysis run; concurrent documents each get
/// their own accumulator. The label lists are append-only and may hold
/// duplicates mid-run — deduplication happens only in [`finalize`].
///
/// [`finalize`]: TaxAccumulator::finalize
#[derive(Debug, Clone, Default)]
pub struct TaxAccumulator {
    pub schedules: Vec<String>,
    pub income_types: Vec<String>,
    pub deduction_categories: Vec<String>,
    pub has_business_income: bool,
    pub has_rental_property: bool,
    pub investment_complexity: InvestmentComplexity,
}

impl TaxAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every catalog rule whose marker occurs in `text`.
    ///
    /// Matching is exact, case-sensitive substring search; rules fire in
    /// catalog declaration order and a page can match several at once.
    /// Never fails — a missing marker is simply a no-match.
    pub fn apply_page_text(&mut self, text: &str) {
        for rule in SIGNAL_CATALOG {
            if !text.contains(rule.marker) {
                continue;
            }
            for effect in rule.effects {
                match *effect {
                    SignalEffect::Append(label) => {
                        let list = match rule.category {
                            SignalCategory::Schedule => &mut self.schedules,
                            SignalCategory::IncomeType => &mut self.income_types,
                            SignalCategory::Deduction => &mut self.deduction_categories,
                        };
                        list.push(label.to_string());
                    }
                    SignalEffect::SetBusinessIncome => self.has_business_income = true,
                    SignalEffect::SetRentalProperty => self.has_rental_property = true,
                    SignalEffect::SetInvestmentLevel(level) => {
                        self.investment_complexity = level;
                    }
                }
            }
        }
    }

    /// Finalize into an immutable [`TaxSummary`]: deduplicate the label
    /// lists (first occurrence wins) and derive the complexity tier.
    ///
    /// Pure and infallible: the same accumulator state always yields the
    /// same summary.
    pub fn finalize(self) -> TaxSummary {
        let schedules = dedup_preserving_order(self.schedules);
        let income_types = dedup_preserving_order(self.income_types);
        let deduction_categories = dedup_preserving_order(self.deduction_categories);

        let score = crate::scoring::complexity_score(
            schedules.len(),
            self.has_business_income,
            self.has_rental_property,
            self.investment_complexity,
        );

        TaxSummary {
            schedules,
            income_types,
            deduction_categories,
            has_business_income: self.has_business_income,
            has_rental_property: self.has_rental_property,
            investment_complexity: self.investment_complexity,
            estimated_complexity: crate::scoring::tier_for_score(score),
        }
    }
}

/// Keep each distinct value once, preserving the order of first occurrence.
fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComplexityTier;

    #[test]
    fn empty_text_matches_nothing() {
        let mut acc = TaxAccumulator::new();
        acc.apply_page_text("");
        acc.apply_page_text("Form 1040 U.S. Individual Income Tax Return");
        let summary = acc.finalize();
        assert_eq!(summary, TaxSummary::default());
        assert_eq!(summary.estimated_complexity, ComplexityTier::Basic);
    }

    #[test]
    fn schedule_c_sets_business_income() {
        let mut acc = TaxAccumulator::new();
        acc.apply_page_text("Attached: Schedule C (Form 1040) Profit or Loss From Business");
        assert!(acc.has_business_income);
        assert_eq!(acc.schedules, vec!["Schedule C"]);
    }

    #[test]
    fn one_page_can_match_several_rules() {
        let mut acc = TaxAccumulator::new();
        acc.apply_page_text("Schedule C and Schedule E income, W-2 wages, Medical expenses");
        assert_eq!(acc.schedules, vec!["Schedule C", "Schedule E"]);
        assert_eq!(acc.income_types, vec!["W-2"]);
        assert_eq!(acc.deduction_categories, vec!["Medical Expenses"]);
        assert!(acc.has_business_income);
        assert!(acc.has_rental_property);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mut acc = TaxAccumulator::new();
        acc.apply_page_text("schedule c and SCHEDULE E and w-2");
        assert!(acc.schedules.is_empty());
        assert!(acc.income_types.is_empty());
    }

    #[test]
    fn deduction_markers_map_to_display_labels() {
        let mut acc = TaxAccumulator::new();
        acc.apply_page_text("Charitable gifts and Mortgage Interest paid");
        assert_eq!(
            acc.deduction_categories,
            vec!["Charitable Contributions", "Mortgage Interest"]
        );
    }

    #[test]
    fn duplicates_accumulate_mid_run_and_dedup_at_finalize() {
        let mut acc = TaxAccumulator::new();
        acc.apply_page_text("Schedule C");
        acc.apply_page_text("Schedule C continued");
        assert_eq!(acc.schedules.len(), 2);

        let summary = acc.finalize();
        assert_eq!(summary.schedules, vec!["Schedule C"]);
        assert!(summary.has_business_income);
    }

    #[test]
    fn repeated_pages_are_idempotent_after_finalize() {
        let page = "W-2 wages, Schedule B interest, Charitable donations";

        let mut once = TaxAccumulator::new();
        once.apply_page_text(page);

        let mut thrice = TaxAccumulator::new();
        for _ in 0..3 {
            thrice.apply_page_text(page);
        }

        assert_eq!(once.finalize(), thrice.finalize());
    }

    #[test]
    fn dedup_preserves_first_occurrence_order() {
        let deduped = dedup_preserving_order(
            ["b", "a", "b", "c", "a"].iter().map(|s| s.to_string()).collect(),
        );
        assert_eq!(deduped, vec!["b", "a", "c"]);
    }

    #[test]
    fn investment_level_is_last_write_wins() {
        let mut acc = TaxAccumulator::new();
        acc.apply_page_text("Schedule D capital gains");
        assert_eq!(acc.investment_complexity, InvestmentComplexity::Complex);
        acc.apply_page_text("Schedule B interest and dividends");
        assert_eq!(acc.investment_complexity, InvestmentComplexity::Moderate);
    }

    #[test]
    fn booleans_are_monotonic() {
        let mut acc = TaxAccumulator::new();
        acc.apply_page_text("Schedule C");
        acc.apply_page_text("no markers on this page");
        assert!(acc.has_business_income);
    }
}
