use std::borrow::Cow;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::mappings::{self, MappingEntry};
use crate::rewrite::{FileOutcome, RewriteError};

/// One mapping entry compiled into its matchable form.
///
/// The pattern anchors on the `import`/`export` keyword and the quote pair so
/// that a mapped path occurring elsewhere (comments, ordinary string
/// literals) is never touched.
struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    fn compile(entry: &MappingEntry) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r#"\b(import|export)\s+['"]{}['"]"#,
            regex::escape(entry.old)
        ))?;
        // The keyword is preserved; quote style and spacing are normalized.
        let replacement = format!("${{1}} '{}'", entry.new);
        Ok(Self {
            pattern,
            replacement,
        })
    }
}

/// Applies the mapping table to Dart source files.
///
/// Rules are applied strictly in table order, so an entry whose target is a
/// later entry's key chains within a single pass.
pub struct ImportRewriter {
    rules: Vec<Rule>,
    dry_run: bool,
}

impl ImportRewriter {
    /// Build a rewriter over the built-in mapping table.
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_mappings(mappings::builtin_mappings())
    }

    /// Build a rewriter over an arbitrary ordered mapping slice.
    pub fn with_mappings(mappings: &[MappingEntry]) -> Result<Self, regex::Error> {
        let rules = mappings
            .iter()
            .map(Rule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rules,
            dry_run: false,
        })
    }

    /// In dry-run mode, files are never written back.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Apply every rule, in table order, to the given content.
    pub fn rewrite_content(&self, input: &str) -> String {
        let mut content = input.to_string();
        for rule in &self.rules {
            if let Cow::Owned(next) = rule.pattern.replace_all(&content, rule.replacement.as_str()) {
                content = next;
            }
        }
        content
    }

    /// Read, rewrite, and write back a single file.
    ///
    /// All failure modes are folded into the returned outcome; this never
    /// panics and never aborts the surrounding run.
    pub fn process_file(&self, path: &Path) -> FileOutcome {
        let original = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                return FileOutcome::Failed(RewriteError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let rewritten = self.rewrite_content(&original);
        if rewritten == original {
            return FileOutcome::Unchanged;
        }

        if !self.dry_run {
            if let Err(source) = fs::write(path, &rewritten) {
                return FileOutcome::Failed(RewriteError::Write {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }

        FileOutcome::Modified
    }
}
