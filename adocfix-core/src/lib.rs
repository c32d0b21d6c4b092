#![deny(missing_docs)]
//! AdocFix core library.
//!
//! This crate contains the scanning, derivation, and rewriting primitives
//! that power the `adocfix` shortdesc repair tool.

pub mod document;
pub mod error;
pub mod fixer;
pub mod fs;
pub mod overrides;
pub mod report;
pub mod rewrite;
pub mod scan;
pub mod shortdesc;

pub use document::Document;
pub use error::{AdocFixError, Result};
pub use fixer::Fixer;
pub use fs::{FileSystem, StdFileSystem};
pub use overrides::{OVERRIDES_FILENAME, OverrideTable};
pub use report::{
    BatchReport, DocReport, Outcome, Totals, render_json, render_markdown, render_text,
};
pub use rewrite::{Rewrite, rewrite_document};
pub use scan::{ABSTRACT_MARKER, EXCLUDED_DIR, ScanStatus, is_excluded_path, scan};
pub use shortdesc::{SHORTDESC_MAX, SHORTDESC_MIN, derive_from_title, normalize};
