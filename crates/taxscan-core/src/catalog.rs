//! The static signal catalog: which literal markers to look for in page
//! text, and what each one means for the summary.

use crate::InvestmentComplexity;

/// Which summary list a rule's appended label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalCategory {
    Schedule,
    IncomeType,
    Deduction,
}

/// One side-effect of a matched rule.
///
/// Rules are a tagged-variant list consumed by a single interpreter loop in
/// [`crate::accumulator`], so adding a marker never means adding a new
/// per-field conditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalEffect {
    /// Append this label to the list for the rule's category.
    Append(&'static str),
    SetBusinessIncome,
    SetRentalProperty,
    /// Overwrite the investment level (last write in scan order wins).
    SetInvestmentLevel(InvestmentComplexity),
}

/// A single detection rule: an exact, case-sensitive substring and the
/// effects applied when it occurs in a page's text.
#[derive(Debug, Clone, Copy)]
pub struct SignalRule {
    pub marker: &'static str,
    pub category: SignalCategory,
    pub effects: &'static [SignalEffect],
}

/// The full rule catalog, applied in declaration order to every page.
/// Read-only for the lifetime of the process.
pub static SIGNAL_CATALOG: &[SignalRule] = &[
    SignalRule {
        marker: "Schedule C",
        category: SignalCategory::Schedule,
        effects: &[
            SignalEffect::Append("Schedule C"),
            SignalEffect::SetBusinessIncome,
        ],
    },
    SignalRule {
        marker: "Schedule E",
        category: SignalCategory::Schedule,
        effects: &[
            SignalEffect::Append("Schedule E"),
            SignalEffect::SetRentalProperty,
        ],
    },
    SignalRule {
        marker: "Schedule B",
        category: SignalCategory::Schedule,
        effects: &[
            SignalEffect::Append("Schedule B"),
            SignalEffect::SetInvestmentLevel(InvestmentComplexity::Moderate),
        ],
    },
    SignalRule {
        marker: "Schedule D",
        category: SignalCategory::Schedule,
        effects: &[
            SignalEffect::Append("Schedule D"),
            SignalEffect::SetInvestmentLevel(InvestmentComplexity::Complex),
        ],
    },
    SignalRule {
        marker: "W-2",
        category: SignalCategory::IncomeType,
        effects: &[SignalEffect::Append("W-2")],
    },
    SignalRule {
        marker: "1099-NEC",
        category: SignalCategory::IncomeType,
        effects: &[SignalEffect::Append("1099-NEC")],
    },
    SignalRule {
        marker: "1099-DIV",
        category: SignalCategory::IncomeType,
        effects: &[SignalEffect::Append("1099-DIV")],
    },
    SignalRule {
        marker: "1099-INT",
        category: SignalCategory::IncomeType,
        effects: &[SignalEffect::Append("1099-INT")],
    },
    SignalRule {
        marker: "Charitable",
        category: SignalCategory::Deduction,
        effects: &[SignalEffect::Append("Charitable Contributions")],
    },
    SignalRule {
        marker: "Mortgage Interest",
        category: SignalCategory::Deduction,
        effects: &[SignalEffect::Append("Mortgage Interest")],
    },
    SignalRule {
        marker: "Medical",
        category: SignalCategory::Deduction,
        effects: &[SignalEffect::Append("Medical Expenses")],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_categories() {
        let has = |c: SignalCategory| SIGNAL_CATALOG.iter().any(|r| r.category == c);
        assert!(has(SignalCategory::Schedule));
        assert!(has(SignalCategory::IncomeType));
        assert!(has(SignalCategory::Deduction));
    }

    #[test]
    fn every_rule_appends_exactly_one_label() {
        for rule in SIGNAL_CATALOG {
            let appends = rule
                .effects
                .iter()
                .filter(|e| matches!(e, SignalEffect::Append(_)))
                .count();
            assert_eq!(appends, 1, "rule {:?} should append one label", rule.marker);
        }
    }

    #[test]
    fn markers_are_unique() {
        for (i, a) in SIGNAL_CATALOG.iter().enumerate() {
            for b in &SIGNAL_CATALOG[i + 1..] {
                assert_ne!(a.marker, b.marker);
            }
        }
    }
}
