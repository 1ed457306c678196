use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use retrolens_core::{analyze, normalize};
use retrolens_ingest::{decode_rows, DecodedTable};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Retrospective analytics for agile work-item exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive the dashboard datasets from a work-item export
    Analyze(AnalyzeArgs),
    /// Dump the canonical work items for a work-item export
    Items(ItemsArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Path to the exported .xlsx, .xls, or .csv file
    file: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Args, Debug)]
struct ItemsArgs {
    /// Path to the exported .xlsx, .xls, or .csv file
    file: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
        Command::Items(args) => handle_items(args),
    }
}

fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let decoded = decode_file(&args.file)?;
    let dashboard = analyze(&decoded.rows).context("uploaded export contained no data rows")?;

    match args.output {
        OutputFormat::Json => {
            let value = render::dashboard_json(&dashboard);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => render::print_dashboard(&dashboard),
    }
    Ok(())
}

fn handle_items(args: ItemsArgs) -> Result<()> {
    let decoded = decode_file(&args.file)?;
    let items = normalize(&decoded.rows).context("uploaded export contained no data rows")?;
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}

fn decode_file(path: &Path) -> Result<DecodedTable> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let decoded = decode_rows(&bytes).context("failed to decode input file")?;
    info!(
        decoder = decoded.decoder,
        sheet = decoded.sheet.as_deref().unwrap_or("-"),
        rows = decoded.rows.len(),
        "decoded input"
    );
    Ok(decoded)
}
