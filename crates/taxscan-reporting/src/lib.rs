pub mod export;

pub use export::{ExportFormat, export_summary, render_json, render_markdown, render_text};
