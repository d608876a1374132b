//! End-to-end engine tests over mock multi-page documents.

use taxscan_core::mock::MockDocument;
use taxscan_core::{ComplexityTier, TaxSummary, analyze_document};

#[test]
fn every_page_is_attempted_exactly_once() {
    let doc = MockDocument::new(vec![
        Ok("W-2".to_string()),
        Err("unreadable".to_string()),
        Ok("Schedule B".to_string()),
        Err("unreadable".to_string()),
    ]);
    analyze_document(&doc);
    assert_eq!(doc.extraction_calls(), 4);
}

#[test]
fn realistic_return_lands_in_advanced() {
    let doc = MockDocument::with_pages(vec![
        "Form 1040 U.S. Individual Income Tax Return",
        "W-2 Wage and Tax Statement, employer withholding",
        "Schedule C Profit or Loss From Business, 1099-NEC nonemployee compensation",
        "Schedule E Supplemental Income and Loss from rental real estate",
        "Schedule D Capital Gains and Losses, 1099-DIV dividends",
        "Itemized deductions: Mortgage Interest, Charitable gifts, Medical expenses",
    ]);
    let summary = analyze_document(&doc);

    assert_eq!(
        summary.schedules,
        vec!["Schedule C", "Schedule E", "Schedule D"]
    );
    assert_eq!(summary.income_types, vec!["W-2", "1099-NEC", "1099-DIV"]);
    assert_eq!(
        summary.deduction_categories,
        vec!["Charitable Contributions", "Mortgage Interest", "Medical Expenses"]
    );
    assert!(summary.has_business_income);
    assert!(summary.has_rental_property);
    // 3 schedules * 2 + 3 + 2 + complex 3 = 14
    assert_eq!(summary.estimated_complexity, ComplexityTier::Advanced);
}

#[test]
fn zero_page_document_finalizes_to_default() {
    let doc = MockDocument::new(vec![]);
    assert_eq!(analyze_document(&doc), TaxSummary::default());
}

#[test]
fn concurrent_documents_do_not_interfere() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let pages = if i % 2 == 0 {
                    vec!["Schedule C and W-2"]
                } else {
                    vec!["Charitable donations only"]
                };
                (i, analyze_document(&MockDocument::with_pages(pages)))
            })
        })
        .collect();

    for handle in handles {
        let (i, summary) = handle.join().unwrap();
        if i % 2 == 0 {
            assert!(summary.has_business_income);
            assert_eq!(summary.estimated_complexity, ComplexityTier::Intermediate);
        } else {
            assert!(!summary.has_business_income);
            assert_eq!(summary.deduction_categories, vec!["Charitable Contributions"]);
            assert_eq!(summary.estimated_complexity, ComplexityTier::Basic);
        }
    }
}
