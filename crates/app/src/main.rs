use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use saldo_import::{export, StatementLayout, StatementTableExtractor};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod input;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
}

/// Extract the movements table of a bank statement from its page texts.
#[derive(Parser, Debug)]
#[command(name = "saldo", version, about, long_about = None)]
struct Args {
    /// Page text files (form-feed separated) or JSON arrays of page strings
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Write records here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file overriding the statement markers and column labels
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Read every movements section on a page, not only the first
    #[arg(long)]
    all_sections: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_layout(args: &Args) -> Result<StatementLayout> {
    let mut layout = match &args.layout {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read layout {}", path.display()))?;
            StatementLayout::from_toml(&content)
                .with_context(|| format!("Invalid layout {}", path.display()))?
        }
        None => StatementLayout::default(),
    };
    layout.all_sections |= args.all_sections;
    Ok(layout)
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let layout = load_layout(&args)?.compile().context("Invalid layout")?;
    let extractor = StatementTableExtractor::new(layout);

    let mut pages = Vec::new();
    for path in &args.inputs {
        let file_pages = input::read_pages(path)?;
        tracing::debug!("Read {} page(s) from {}", file_pages.len(), path.display());
        pages.extend(file_pages);
    }

    let report = extractor.extract(&pages);
    tracing::info!(
        "Total transactions extracted: {} ({} of {} page(s) skipped)",
        report.records.len(),
        report.skipped_pages(),
        pages.len()
    );

    if report.is_empty() {
        bail!("No transactions found in {} page(s)", pages.len());
    }

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(std::io::BufWriter::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    let written = match args.format {
        Format::Json => export::write_json(writer, &report.records),
        Format::Csv => export::write_csv(writer, &report.records),
    };
    written.context("Failed to write records")?;

    if let Some(path) = &args.output {
        tracing::info!("Saved records to {}", path.display());
    }
    Ok(())
}
