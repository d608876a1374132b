use std::io::Write;
use std::path::Path;

use taxscan_core::TaxSummary;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Markdown,
    Json,
}

impl ExportFormat {
    /// Parse a format name as used in config files and CLI flags.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "markdown" | "md" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Export a summary to the given path.
pub fn export_summary(
    summary: &TaxSummary,
    format: ExportFormat,
    path: &Path,
) -> Result<(), String> {
    let content = match format {
        ExportFormat::Text => render_text(summary),
        ExportFormat::Markdown => render_markdown(summary),
        ExportFormat::Json => render_json(summary),
    };

    let mut file =
        std::fs::File::create(path).map_err(|e| format!("Failed to create file: {}", e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| format!("Failed to write: {}", e))?;
    Ok(())
}

fn list_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

/// Clipboard-style plain text block, field per line.
pub fn render_text(summary: &TaxSummary) -> String {
    let mut out = String::new();
    out.push_str("Tax Return Summary\n");
    out.push_str("==================\n");
    out.push_str(&format!(
        "Estimated complexity: {}\n",
        summary.estimated_complexity
    ));
    out.push_str(&format!("Schedules: {}\n", list_or_none(&summary.schedules)));
    out.push_str(&format!(
        "Income types: {}\n",
        list_or_none(&summary.income_types)
    ));
    out.push_str(&format!(
        "Deductions: {}\n",
        list_or_none(&summary.deduction_categories)
    ));
    out.push_str(&format!(
        "Business income: {}\n",
        yes_no(summary.has_business_income)
    ));
    out.push_str(&format!(
        "Rental property: {}\n",
        yes_no(summary.has_rental_property)
    ));
    out.push_str(&format!(
        "Investment complexity: {}\n",
        summary.investment_complexity
    ));
    out
}

pub fn render_markdown(summary: &TaxSummary) -> String {
    let mut out = String::new();
    out.push_str("# Tax Return Summary\n\n");
    out.push_str(&format!(
        "**Estimated complexity:** {}\n\n",
        summary.estimated_complexity
    ));
    out.push_str("| Field | Value |\n|---|---|\n");
    out.push_str(&format!(
        "| Schedules | {} |\n",
        list_or_none(&summary.schedules)
    ));
    out.push_str(&format!(
        "| Income types | {} |\n",
        list_or_none(&summary.income_types)
    ));
    out.push_str(&format!(
        "| Deductions | {} |\n",
        list_or_none(&summary.deduction_categories)
    ));
    out.push_str(&format!(
        "| Business income | {} |\n",
        yes_no(summary.has_business_income)
    ));
    out.push_str(&format!(
        "| Rental property | {} |\n",
        yes_no(summary.has_rental_property)
    ));
    out.push_str(&format!(
        "| Investment complexity | {} |\n",
        summary.investment_complexity
    ));
    out
}

/// Pretty-printed JSON via the summary's serde representation.
pub fn render_json(summary: &TaxSummary) -> String {
    // TaxSummary serialization is infallible (strings, bools, unit enums).
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}
