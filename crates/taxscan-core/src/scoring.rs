//! Deterministic complexity scoring over finalized signal counts.

use crate::{ComplexityTier, InvestmentComplexity};

/// Integer complexity score:
/// `2 × schedules + 3 × business + 2 × rental + investment term`,
/// where the investment term is 3 for complex, 1 for moderate, 0 for simple.
///
/// `schedule_count` must be the deduplicated count.
pub fn complexity_score(
    schedule_count: usize,
    has_business_income: bool,
    has_rental_property: bool,
    investment: InvestmentComplexity,
) -> u32 {
    let investment_term = match investment {
        InvestmentComplexity::Complex => 3,
        InvestmentComplexity::Moderate => 1,
        InvestmentComplexity::Simple => 0,
    };

    schedule_count as u32 * 2
        + if has_business_income { 3 } else { 0 }
        + if has_rental_property { 2 } else { 0 }
        + investment_term
}

/// Map a score to a tier: `> 6` advanced, `> 3` intermediate, else basic.
/// Bounds are strict below and inclusive above (3 is basic, 6 is
/// intermediate).
pub fn tier_for_score(score: u32) -> ComplexityTier {
    if score > 6 {
        ComplexityTier::Advanced
    } else if score > 3 {
        ComplexityTier::Intermediate
    } else {
        ComplexityTier::Basic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulator_scores_zero_basic() {
        let score = complexity_score(0, false, false, InvestmentComplexity::Simple);
        assert_eq!(score, 0);
        assert_eq!(tier_for_score(score), ComplexityTier::Basic);
    }

    #[test]
    fn one_schedule_with_business_income_is_intermediate() {
        // 2 + 3 = 5
        let score = complexity_score(1, true, false, InvestmentComplexity::Simple);
        assert_eq!(score, 5);
        assert_eq!(tier_for_score(score), ComplexityTier::Intermediate);
    }

    #[test]
    fn three_schedules_with_complex_investments_is_advanced() {
        // 2*3 + 3 = 9
        let score = complexity_score(3, false, false, InvestmentComplexity::Complex);
        assert_eq!(score, 9);
        assert_eq!(tier_for_score(score), ComplexityTier::Advanced);
    }

    #[test]
    fn score_three_is_still_basic() {
        // one schedule + moderate investments: 2 + 1 = 3
        let score = complexity_score(1, false, false, InvestmentComplexity::Moderate);
        assert_eq!(score, 3);
        assert_eq!(tier_for_score(score), ComplexityTier::Basic);
    }

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(tier_for_score(3), ComplexityTier::Basic);
        assert_eq!(tier_for_score(4), ComplexityTier::Intermediate);
        assert_eq!(tier_for_score(6), ComplexityTier::Intermediate);
        assert_eq!(tier_for_score(7), ComplexityTier::Advanced);
    }

    #[test]
    fn scoring_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                complexity_score(2, true, true, InvestmentComplexity::Moderate),
                2 * 2 + 3 + 2 + 1
            );
        }
    }
}
