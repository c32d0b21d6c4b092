//! Batch driver.
//!
//! Processes documents strictly one at a time: exclusion check, read,
//! rewrite decision, and, when applying, write-back. Every per-document
//! failure degrades that document to a skip and the batch continues; only
//! setup-level discovery failures abort the run.

use std::path::Path;

use crate::document::Document;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::overrides::OverrideTable;
use crate::report::{BatchReport, Outcome};
use crate::rewrite::{Rewrite, rewrite_document};
use crate::scan::is_excluded_path;

/// Batch driver over a [`FileSystem`] collaborator.
pub struct Fixer<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> Fixer<F> {
    /// Create a driver over the given filesystem.
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Process every document under `root`.
    ///
    /// With `apply` false (dry run) the rewrite is computed but nothing is
    /// persisted; affected documents are reported as `would_change`.
    pub fn process(
        &self,
        root: &Path,
        overrides: &OverrideTable,
        apply: bool,
    ) -> Result<BatchReport> {
        let mut report = BatchReport::new();
        let files = self.fs.list_documents(root)?;

        for path in files {
            let rel = relative_key(root, &path);
            if is_excluded_path(&rel) {
                report.record(rel, Outcome::SkippedExcluded);
                continue;
            }

            let contents = match self.fs.read_to_string(&path) {
                Ok(contents) => contents,
                Err(err) => {
                    report.warn(format!("read {rel}: {err}"));
                    report.record(rel, Outcome::Skipped);
                    continue;
                }
            };

            let doc = Document::parse(rel.clone(), &contents);
            match rewrite_document(&doc, overrides) {
                Rewrite::Unchanged => report.record(rel, Outcome::Unchanged),
                Rewrite::NoHeading => report.record(rel, Outcome::SkippedNoHeading),
                Rewrite::Inserted(lines) => {
                    if !apply {
                        report.record(rel, Outcome::WouldChange);
                        continue;
                    }
                    match self.fs.write_string(&path, &doc.render(&lines)) {
                        Ok(()) => report.record(rel, Outcome::Changed),
                        Err(err) => {
                            report.warn(format!("write {rel}: {err}"));
                            report.record(rel, Outcome::Skipped);
                        }
                    }
                }
            }
        }

        Ok(report)
    }
}

/// Repository-relative key in forward-slash form. Paths outside the root
/// fall back to their full form.
fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
