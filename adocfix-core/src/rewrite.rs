//! Per-document rewrite decisions.
//!
//! Pure transformation: the insertion index is computed first, then the new
//! line sequence is built in one pass. Persistence belongs to the driver.

use crate::document::Document;
use crate::overrides::OverrideTable;
use crate::scan::{ABSTRACT_MARKER, ScanStatus, scan};
use crate::shortdesc::{derive_from_title, normalize};

/// Outcome of rewriting a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// The document already carries the block; leave it byte-identical.
    Unchanged,
    /// No level-1 title to derive from; a reportable skip, not a silent one.
    NoHeading,
    /// A block was spliced in; the new line sequence replaces the old.
    Inserted(Vec<String>),
}

/// Decide what to do with one document and produce the new line sequence
/// when a block is missing.
pub fn rewrite_document(doc: &Document, overrides: &OverrideTable) -> Rewrite {
    match scan(&doc.lines) {
        ScanStatus::HasBlock => Rewrite::Unchanged,
        ScanStatus::MissingNoHeading => Rewrite::NoHeading,
        ScanStatus::MissingWithHeading { title, insert_at } => {
            let candidate = match overrides.lookup(&doc.rel_path) {
                Some(text) => text.to_string(),
                None => derive_from_title(&title),
            };
            let shortdesc = normalize(&candidate);
            Rewrite::Inserted(insert_block(&doc.lines, insert_at, &shortdesc))
        }
    }
}

/// Splice the abstract block at the computed offset. The role marker stays
/// immediately adjacent to its paragraph.
fn insert_block(lines: &[String], insert_at: usize, shortdesc: &str) -> Vec<String> {
    let mut output = Vec::with_capacity(lines.len() + 4);
    output.extend_from_slice(&lines[..insert_at]);
    output.push(String::new());
    output.push(ABSTRACT_MARKER.to_string());
    output.push(shortdesc.to_string());
    output.push(String::new());
    output.extend_from_slice(&lines[insert_at..]);
    output
}
