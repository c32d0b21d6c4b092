//! Report types and formatting for batch runs.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// Per-document outcome of a batch run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The document already carries the block.
    Unchanged,
    /// A block would be inserted, but the run was a dry run.
    WouldChange,
    /// A block was inserted and written back.
    Changed,
    /// The document lies in the excluded subtree and was never scanned.
    SkippedExcluded,
    /// No level-1 title, so nothing could be synthesized.
    SkippedNoHeading,
    /// The document was degraded to a skip by a read or write failure;
    /// details are in the report warnings.
    Skipped,
}

impl Outcome {
    /// Human-readable label used in text reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::WouldChange => "would change",
            Self::Changed => "changed",
            Self::SkippedExcluded => "skipped (excluded)",
            Self::SkippedNoHeading => "skipped (no heading)",
            Self::Skipped => "skipped (error)",
        }
    }
}

/// Outcome of one document in the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocReport {
    /// Repository-relative path of the document.
    pub path: String,
    /// What happened to it.
    pub outcome: Outcome,
}

/// Totals per outcome category.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Documents already carrying the block.
    pub unchanged: usize,
    /// Documents that would change in a dry run.
    pub would_change: usize,
    /// Documents rewritten on disk.
    pub changed: usize,
    /// Documents in the excluded subtree.
    pub skipped_excluded: usize,
    /// Documents with no level-1 title.
    pub skipped_no_heading: usize,
    /// Documents skipped by read or write failures.
    pub skipped: usize,
}

/// Full report for a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// Per-document outcomes in batch order.
    pub entries: Vec<DocReport>,
    /// Warnings surfaced during the run (override rows, read/write errors).
    pub warnings: Vec<String>,
}

impl BatchReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one document's outcome.
    pub fn record(&mut self, path: impl Into<String>, outcome: Outcome) {
        self.entries.push(DocReport {
            path: path.into(),
            outcome,
        });
    }

    /// Record a warning.
    pub fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Count entries per outcome category.
    pub fn totals(&self) -> Totals {
        let mut totals = Totals::default();
        for entry in &self.entries {
            match entry.outcome {
                Outcome::Unchanged => totals.unchanged += 1,
                Outcome::WouldChange => totals.would_change += 1,
                Outcome::Changed => totals.changed += 1,
                Outcome::SkippedExcluded => totals.skipped_excluded += 1,
                Outcome::SkippedNoHeading => totals.skipped_no_heading += 1,
                Outcome::Skipped => totals.skipped += 1,
            }
        }
        totals
    }
}

/// Render a batch report as plain text.
pub fn render_text(report: &BatchReport) -> String {
    let mut output = String::new();
    for entry in &report.entries {
        if entry.outcome == Outcome::Unchanged {
            continue;
        }
        let _ = writeln!(output, "{}: {}", entry.outcome.label(), entry.path);
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(output, "Warnings:");
        for warning in &report.warnings {
            let _ = writeln!(output, "- {warning}");
        }
    }

    let totals = report.totals();
    let _ = writeln!(output, "Summary:");
    let _ = writeln!(output, "- unchanged: {}", totals.unchanged);
    let _ = writeln!(output, "- would change: {}", totals.would_change);
    let _ = writeln!(output, "- changed: {}", totals.changed);
    let _ = writeln!(output, "- skipped (excluded): {}", totals.skipped_excluded);
    let _ = writeln!(
        output,
        "- skipped (no heading): {}",
        totals.skipped_no_heading
    );
    let _ = writeln!(output, "- skipped (error): {}", totals.skipped);
    output
}

/// Render a batch report as Markdown.
pub fn render_markdown(report: &BatchReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# AdocFix Report\n");

    let actionable: Vec<&DocReport> = report
        .entries
        .iter()
        .filter(|entry| entry.outcome != Outcome::Unchanged)
        .collect();
    if actionable.is_empty() {
        let _ = writeln!(output, "No documents need attention.\n");
    } else {
        let _ = writeln!(output, "## Documents\n");
        for entry in actionable {
            let _ = writeln!(output, "- `{}` — {}", entry.path, entry.outcome.label());
        }
        let _ = writeln!(output);
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(output, "## Warnings\n");
        for warning in &report.warnings {
            let _ = writeln!(output, "- {warning}");
        }
        let _ = writeln!(output);
    }

    let totals = report.totals();
    let _ = writeln!(output, "## Summary\n");
    let _ = writeln!(output, "- unchanged: {}", totals.unchanged);
    let _ = writeln!(output, "- would change: {}", totals.would_change);
    let _ = writeln!(output, "- changed: {}", totals.changed);
    let _ = writeln!(output, "- skipped (excluded): {}", totals.skipped_excluded);
    let _ = writeln!(
        output,
        "- skipped (no heading): {}",
        totals.skipped_no_heading
    );
    let _ = writeln!(output, "- skipped (error): {}", totals.skipped);
    output
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

#[cfg(test)]
mod tests {
    use super::{BatchReport, Outcome, render_json, render_markdown, render_text};

    fn sample_report() -> BatchReport {
        let mut report = BatchReport::new();
        report.record("docs/a.adoc", Outcome::Unchanged);
        report.record("docs/b.adoc", Outcome::WouldChange);
        report.record("docs/c.adoc", Outcome::Changed);
        report.record("website/d.adoc", Outcome::SkippedExcluded);
        report.record("docs/e.adoc", Outcome::SkippedNoHeading);
        report.record("docs/f.adoc", Outcome::Skipped);
        report.warn("override file: skipping malformed row 3");
        report
    }

    #[test]
    fn totals_count_each_category() {
        let totals = sample_report().totals();
        assert_eq!(totals.unchanged, 1);
        assert_eq!(totals.would_change, 1);
        assert_eq!(totals.changed, 1);
        assert_eq!(totals.skipped_excluded, 1);
        assert_eq!(totals.skipped_no_heading, 1);
        assert_eq!(totals.skipped, 1);
    }

    #[test]
    fn text_report_lists_actionable_documents_and_summary() {
        let output = render_text(&sample_report());
        assert!(output.contains("would change: docs/b.adoc"));
        assert!(output.contains("changed: docs/c.adoc"));
        assert!(output.contains("skipped (excluded): website/d.adoc"));
        assert!(output.contains("skipped (no heading): docs/e.adoc"));
        assert!(!output.contains("unchanged: docs/a.adoc"));
        assert!(output.contains("Warnings:"));
        assert!(output.contains("malformed row 3"));
        assert!(output.contains("- unchanged: 1"));
        assert!(output.contains("- would change: 1"));
    }

    #[test]
    fn markdown_report_covers_branches() {
        let output = render_markdown(&sample_report());
        assert!(output.contains("# AdocFix Report"));
        assert!(output.contains("`docs/b.adoc` — would change"));
        assert!(output.contains("## Warnings"));
        assert!(output.contains("## Summary"));

        let quiet = render_markdown(&BatchReport::new());
        assert!(quiet.contains("No documents need attention."));
        assert!(!quiet.contains("## Warnings"));
    }

    #[test]
    fn json_report_uses_snake_case_outcomes() {
        let json = render_json(&sample_report()).expect("json");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed["entries"][1]["outcome"], "would_change");
        assert_eq!(parsed["entries"][3]["outcome"], "skipped_excluded");
        assert!(parsed["warnings"].is_array());
    }
}
