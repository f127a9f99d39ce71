//! Import path rewriting
//!
//! The engine compiles the mapping table into quote-aware rules once, then
//! runs each file through a read-modify-write cycle. Failures are scoped to
//! the file that raised them; the run always continues.

mod engine;

pub use engine::ImportRewriter;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while processing a single file.
///
/// Never fatal: the caller records the failure and moves on to the next file.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The file could not be read, including non-UTF-8 content.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rewritten content could not be written back.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of one file's read-modify-write cycle.
#[derive(Debug)]
pub enum FileOutcome {
    /// No mapping entry matched; the file was left untouched.
    Unchanged,
    /// At least one import was rewritten and the file was written back
    /// (or would have been, in dry-run mode).
    Modified,
    /// The file could not be processed.
    Failed(RewriteError),
}
