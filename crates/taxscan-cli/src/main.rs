use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

mod output;

use output::ColorMode;
use taxscan_ingest::AnalyzeOptions;
use taxscan_reporting::ExportFormat;

/// Tax Return Analyzer - Estimate preparation complexity from a return PDF
#[derive(Parser, Debug)]
#[command(name = "taxscan", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a tax return PDF and print its complexity summary
    Analyze {
        /// Path to the PDF file to analyze
        file_path: PathBuf,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Print the summary as JSON instead of the text report
        #[arg(long)]
        json: bool,

        /// Write an exported summary to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format for --output: text, markdown, or json
        #[arg(long)]
        format: Option<String>,

        /// Maximum accepted file size in MiB
        #[arg(long)]
        max_size_mb: Option<u64>,
    },
}

/// Process-wide tracing setup. Idempotent: repeated calls are no-ops.
fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            file_path,
            no_color,
            json,
            output,
            format,
            max_size_mb,
        } => analyze(file_path, no_color, json, output, format, max_size_mb).await,
    }
}

async fn analyze(
    file_path: PathBuf,
    no_color: bool,
    json: bool,
    output: Option<PathBuf>,
    format: Option<String>,
    max_size_mb: Option<u64>,
) -> anyhow::Result<()> {
    let config = taxscan_core::config_file::load_config();

    // Resolve configuration: CLI flags > env vars > config file > defaults
    let max_size_mb = max_size_mb
        .or_else(|| {
            std::env::var("TAXSCAN_MAX_SIZE_MB")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or_else(|| config.limits.as_ref().and_then(|l| l.max_file_size_mb));

    let config_color = config.display.as_ref().and_then(|d| d.color).unwrap_or(true);
    let color = ColorMode(!no_color && !json && config_color);

    if !file_path.exists() {
        anyhow::bail!("File not found: {}", file_path.display());
    }

    // Resolve the export format up front so a bad --format fails before the scan
    let export_format = match (&output, &format) {
        (Some(_), Some(name)) => Some(
            ExportFormat::parse(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown export format: {}", name))?,
        ),
        (Some(_), None) => Some(
            config
                .export
                .as_ref()
                .and_then(|e| e.default_format.as_deref())
                .and_then(ExportFormat::parse)
                .unwrap_or(ExportFormat::Text),
        ),
        (None, _) => None,
    };

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner:.cyan} scanning pages [{bar:40.cyan/dim}] {pos}/{len}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    let bar = progress.clone();
    let options = AnalyzeOptions {
        max_file_size_bytes: max_size_mb.map(|mb| mb * 1024 * 1024),
        progress: Some(Arc::new(move |done, total| {
            if bar.length() == Some(0) {
                bar.set_length(total as u64);
            }
            bar.set_position(done as u64);
        })),
    };

    let summary = taxscan_ingest::analyze_file(&file_path, options).await?;
    progress.finish_and_clear();

    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.display().to_string());

    let mut writer: Box<dyn Write> = Box::new(std::io::stdout());
    if json {
        writeln!(writer, "{}", taxscan_reporting::render_json(&summary))?;
    } else {
        output::print_summary_report(&mut writer, &file_name, &summary, color)?;
    }

    if let (Some(output_path), Some(export_format)) = (output, export_format) {
        taxscan_reporting::export_summary(&summary, export_format, &output_path)
            .map_err(|e| anyhow::anyhow!(e))?;
        writeln!(writer)?;
        writeln!(writer, "Summary exported to {}", output_path.display())?;
    }

    Ok(())
}
