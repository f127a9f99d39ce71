use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use fixdartimports::{
    FileFinder, FileOutcome, FileRecord, ImportRewriter, ReportFormat, Reporter, RunSummary,
};

/// fixdartimports - Fix broken relative import paths in Flutter projects (Dart)
#[derive(Parser, Debug)]
#[command(name = "fixdartimports")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the Flutter project root (the directory containing lib/)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show what would change without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output the summary
    #[arg(short, long)]
    quiet: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Compact,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Compact => ReportFormat::Compact,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completions
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("fixdartimports v{}", env!("CARGO_PKG_VERSION"));

    run_rewrite(&cli)
}

fn run_rewrite(cli: &Cli) -> Result<()> {
    use std::time::Instant;

    let start_time = Instant::now();

    // Step 1: Discover files
    info!("Discovering files...");
    let finder = FileFinder::new();
    let files = finder.find_files(&cli.path);

    info!("Found {} Dart files", files.len());

    let terminal = matches!(cli.format, OutputFormat::Terminal);

    if files.is_empty() && terminal && !cli.quiet {
        println!(
            "{}",
            format!("No Dart files found under {}/lib.", cli.path.display()).yellow()
        );
    }

    if cli.dry_run && terminal && !cli.quiet {
        println!("{}", "Dry run: no files will be written.".cyan());
    }

    // Step 2: Build the rewriter over the built-in mapping table
    let rewriter = ImportRewriter::new().into_diagnostic()?.dry_run(cli.dry_run);

    // Step 3: Process every file, sequentially and best-effort
    let mut reporter = Reporter::new(cli.format.into())
        .with_output_path(cli.output.clone())
        .quiet(cli.quiet)
        .dry_run(cli.dry_run);
    reporter.start(files.len());

    let mut summary = RunSummary::default();

    for file in &files {
        let record = match rewriter.process_file(file) {
            FileOutcome::Unchanged => {
                debug!("processed {}", file.display());
                FileRecord::unchanged(file)
            }
            FileOutcome::Modified => FileRecord::modified(file),
            FileOutcome::Failed(error) => FileRecord::failed(file, error.to_string()),
        };
        summary.record(record.status);
        reporter.record(record);
    }

    // Step 4: Final summary
    reporter.finish(&summary)?;

    let elapsed = start_time.elapsed();
    info!(
        "Processed {} files in {:.2}s",
        summary.scanned,
        elapsed.as_secs_f64()
    );

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();
}
