#![deny(missing_docs)]
//! AdocFix command-line interface.
//!
//! Scans a documentation tree for `.adoc` files missing the
//! `[role="_abstract"]` shortdesc block and repairs them in place, or
//! previews the repairs with `--dry-run`.

use adocfix_core::{
    BatchReport, Fixer, OverrideTable, StdFileSystem, render_json, render_markdown, render_text,
};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "adocfix", version, about = "Repair missing AsciiDoc shortdesc blocks")]
struct Cli {
    /// Root directory containing `.adoc` files.
    #[arg(default_value = ".")]
    root: PathBuf,
    /// Preview changes without writing files.
    #[arg(long)]
    dry_run: bool,
    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[cfg(not(test))]
fn main() -> CliResult<()> {
    env_logger::init();
    let cli = Cli::parse();
    run(&cli.root, cli.dry_run, cli.format, cli.report_output.as_deref())
}

#[cfg(test)]
fn main() {}

fn run(
    root: &Path,
    dry_run: bool,
    format: OutputFormat,
    report_output: Option<&Path>,
) -> CliResult<()> {
    if !root.is_dir() {
        return Err(format!("root is not a directory: {}", root.display()).into());
    }

    let fs = StdFileSystem::new();
    let (overrides, override_warnings) = OverrideTable::load(&fs, root);

    let fixer = Fixer::new(fs);
    let mut report = fixer.process(root, &overrides, !dry_run)?;
    let mut warnings = override_warnings;
    warnings.append(&mut report.warnings);
    report.warnings = warnings;
    for warning in &report.warnings {
        log::warn!("{warning}");
    }

    emit_report(&report, format, report_output)
}

fn emit_report(
    report: &BatchReport,
    format: OutputFormat,
    report_output: Option<&Path>,
) -> CliResult<()> {
    let contents = match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Markdown => render_markdown(report),
        OutputFormat::Json => render_json(report)?,
    };

    if let Some(path) = report_output {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
    } else {
        print!("{contents}");
    }
    Ok(())
}
