mod colors;
mod json;

pub use json::JsonReporter;

use std::path::{Path, PathBuf};

use colors::{BoxChars, StatusSymbol, StructureColors};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use miette::Result;
use serde::Serialize;

/// Output format for run reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Default terminal output with colors and a progress bar
    #[default]
    Terminal,
    /// One uncolored line per modified/failed file
    Compact,
    /// JSON machine-readable format
    Json,
}

/// Per-file processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Unchanged,
    Modified,
    Failed,
}

/// One processed file, as recorded for the report
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileRecord {
    pub fn unchanged(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            status: FileStatus::Unchanged,
            error: None,
        }
    }

    pub fn modified(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            status: FileStatus::Modified,
            error: None,
        }
    }

    pub fn failed(path: &Path, error: String) -> Self {
        Self {
            path: path.to_path_buf(),
            status: FileStatus::Failed,
            error: Some(error),
        }
    }
}

/// Aggregated counts for one run
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RunSummary {
    /// Files discovered and iterated
    pub scanned: usize,
    /// Files whose content changed
    pub modified: usize,
    /// Files skipped because of a read/write error
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, status: FileStatus) {
        self.scanned += 1;
        match status {
            FileStatus::Unchanged => {}
            FileStatus::Modified => self.modified += 1,
            FileStatus::Failed => self.failed += 1,
        }
    }
}

/// Streams per-file status lines and prints the final run summary.
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    quiet: bool,
    dry_run: bool,
    records: Vec<FileRecord>,
    progress: Option<ProgressBar>,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            output_path: None,
            quiet: false,
            dry_run: false,
            records: Vec::new(),
            progress: None,
        }
    }

    /// Output file for the JSON format (stdout when unset).
    pub fn with_output_path(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }

    /// Quiet mode suppresses per-file lines and the progress bar.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Annotate the summary when no file was actually written.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Begin a run over `total` files.
    pub fn start(&mut self, total: usize) {
        if self.format == ReportFormat::Terminal && !self.quiet && total > 0 {
            // Status lines and the bar share stdout so they interleave cleanly.
            let pb = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stdout());
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            self.progress = Some(pb);
        }
    }

    /// Record one processed file, emitting its status line when appropriate.
    pub fn record(&mut self, record: FileRecord) {
        if !self.quiet {
            match (self.format, record.status) {
                (ReportFormat::Terminal, FileStatus::Modified) => {
                    self.println(format!(
                        "{} {} {}",
                        StatusSymbol::modified(),
                        StructureColors::modified_label("modified:"),
                        StructureColors::file_path(&record.path.display().to_string())
                    ));
                }
                (ReportFormat::Terminal, FileStatus::Failed) => {
                    self.println(format!(
                        "{} {} ({}): {}",
                        StatusSymbol::failed(),
                        StructureColors::error_label("error"),
                        StructureColors::file_path(&record.path.display().to_string()),
                        record.error.as_deref().unwrap_or("unknown error")
                    ));
                }
                (ReportFormat::Compact, FileStatus::Modified) => {
                    println!("modified: {}", record.path.display());
                }
                (ReportFormat::Compact, FileStatus::Failed) => {
                    println!(
                        "error ({}): {}",
                        record.path.display(),
                        record.error.as_deref().unwrap_or("unknown error")
                    );
                }
                _ => {}
            }
        }

        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
        self.records.push(record);
    }

    /// Finish the run: clear the progress bar and emit the summary.
    pub fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }

        match self.format {
            ReportFormat::Json => {
                JsonReporter::new(self.output_path.clone()).report(&self.records, summary)
            }
            ReportFormat::Terminal => {
                self.print_summary(summary);
                Ok(())
            }
            ReportFormat::Compact => {
                println!("{}/{} files modified", summary.modified, summary.scanned);
                if summary.failed > 0 {
                    println!("{} files errored", summary.failed);
                }
                Ok(())
            }
        }
    }

    fn print_summary(&self, summary: &RunSummary) {
        println!();
        println!("{}", BoxChars::light_line(40).dimmed());

        let dry_run_note = if self.dry_run {
            " (dry run)".dimmed().to_string()
        } else {
            String::new()
        };

        println!(
            "{}/{} files modified{}",
            StructureColors::count(&summary.modified.to_string()),
            StructureColors::count(&summary.scanned.to_string()),
            dry_run_note
        );

        if summary.failed > 0 {
            println!(
                "{} {} files errored",
                "⚠".yellow(),
                StructureColors::count(&summary.failed.to_string())
            );
        }
    }

    fn println(&self, line: String) {
        match &self.progress {
            Some(pb) => pb.println(line),
            None => println!("{}", line),
        }
    }
}
