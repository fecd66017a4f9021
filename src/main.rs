use std::path::PathBuf;

use clap::{Parser, Subcommand};
use competency_tools::codes::CuratedPrefixes;
use competency_tools::model::{DEFAULT_ROOT_ID, ProgramContext};
use competency_tools::{Result, ToolError, batch, sync};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;
    match cli.command {
        Command::Reformat(args) => execute_reformat(args),
        Command::Batch(args) => execute_batch(args),
    }
}

fn execute_reformat(args: ReformatArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(ToolError::MissingInput(args.input));
    }

    let curated = load_prefixes(args.prefixes.as_ref())?;
    let program = args
        .input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let context = ProgramContext::new(program, args.root_id);
    sync::reformat_file(&args.input, &args.output, &context, &curated)
}

fn execute_batch(args: BatchArgs) -> Result<()> {
    if !args.input_dir.exists() {
        return Err(ToolError::MissingInput(args.input_dir));
    }

    let curated = load_prefixes(args.prefixes.as_ref())?;
    let options = batch::BatchOptions {
        root_id: args.root_id,
        curated,
    };
    let summary = batch::run(&args.input_dir, &args.output_dir, &options)?;
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        "batch finished"
    );
    Ok(())
}

fn load_prefixes(path: Option<&PathBuf>) -> Result<CuratedPrefixes> {
    match path {
        Some(path) => {
            let data = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        }
        None => Ok(CuratedPrefixes::default()),
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Reformat competency framework exports for bulk import."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reformat a single program export.
    Reformat(ReformatArgs),
    /// Reformat every export found in a directory.
    Batch(BatchArgs),
}

#[derive(clap::Args)]
struct ReformatArgs {
    /// Input file path (.csv, .xls, or .xlsx).
    #[arg(long)]
    input: PathBuf,

    /// Output CSV file path.
    #[arg(long)]
    output: PathBuf,

    /// Framework identifier in the target system.
    #[arg(long, default_value = DEFAULT_ROOT_ID)]
    root_id: String,

    /// Optional JSON table of curated program-name-to-prefix overrides.
    #[arg(long)]
    prefixes: Option<PathBuf>,
}

#[derive(clap::Args)]
struct BatchArgs {
    /// Directory scanned (non-recursively) for exports.
    #[arg(long)]
    input_dir: PathBuf,

    /// Directory receiving the reformatted CSV files.
    #[arg(long)]
    output_dir: PathBuf,

    /// Framework identifier applied to every file; prompted per file when omitted.
    #[arg(long)]
    root_id: Option<String>,

    /// Optional JSON table of curated program-name-to-prefix overrides.
    #[arg(long)]
    prefixes: Option<PathBuf>,
}
