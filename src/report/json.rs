//! JSON reporter - machine-readable run output

use std::fs;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::report::{FileRecord, RunSummary};

#[derive(Serialize)]
struct JsonReport<'a> {
    tool: &'static str,
    version: &'static str,
    files: &'a [FileRecord],
    summary: &'a RunSummary,
}

/// Writes the full run record as pretty-printed JSON.
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, records: &[FileRecord], summary: &RunSummary) -> Result<()> {
        let report = JsonReport {
            tool: "fixdartimports",
            version: env!("CARGO_PKG_VERSION"),
            files: records,
            summary,
        };

        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;

        match &self.output_path {
            Some(path) => fs::write(path, json + "\n").into_diagnostic()?,
            None => println!("{}", json),
        }

        Ok(())
    }
}
