use std::io::Write;

use owo_colors::OwoColorize;
use taxscan_core::{ComplexityTier, TaxSummary};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the full terminal report for one analyzed document.
pub fn print_summary_report(
    w: &mut dyn Write,
    file_name: &str,
    summary: &TaxSummary,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{} {}", "Summary for".bold(), file_name.bold())?;
    } else {
        writeln!(w, "Summary for {}", file_name)?;
    }
    writeln!(w)?;

    let tier_label = summary.estimated_complexity.to_string().to_uppercase();
    if color.enabled() {
        match summary.estimated_complexity {
            ComplexityTier::Basic => {
                writeln!(w, "Estimated complexity: {}", tier_label.green())?
            }
            ComplexityTier::Intermediate => {
                writeln!(w, "Estimated complexity: {}", tier_label.yellow())?
            }
            ComplexityTier::Advanced => {
                writeln!(w, "Estimated complexity: {}", tier_label.red())?
            }
        }
    } else {
        writeln!(w, "Estimated complexity: {}", tier_label)?;
    }
    writeln!(w)?;

    print_list(w, "Schedules", &summary.schedules, color)?;
    print_list(w, "Income types", &summary.income_types, color)?;
    print_list(w, "Deductions", &summary.deduction_categories, color)?;
    writeln!(w)?;

    print_flag(w, "Business income", summary.has_business_income)?;
    print_flag(w, "Rental property", summary.has_rental_property)?;
    writeln!(
        w,
        "Investment complexity: {}",
        summary.investment_complexity
    )?;

    Ok(())
}

fn print_list(
    w: &mut dyn Write,
    label: &str,
    values: &[String],
    color: ColorMode,
) -> std::io::Result<()> {
    if values.is_empty() {
        if color.enabled() {
            writeln!(w, "{}: {}", label, "(none detected)".dimmed())?;
        } else {
            writeln!(w, "{}: (none detected)", label)?;
        }
    } else {
        writeln!(w, "{}: {}", label, values.join(", "))?;
    }
    Ok(())
}

fn print_flag(w: &mut dyn Write, label: &str, value: bool) -> std::io::Result<()> {
    writeln!(w, "{}: {}", label, if value { "yes" } else { "no" })
}
