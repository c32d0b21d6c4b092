//! Structural scanning of document lines.
//!
//! The scanner decides whether a document already carries the abstract
//! block, and if not, where a new block belongs: immediately after the
//! level-1 title and any blank, attribute, or comment lines that follow it.

/// Full-line marker that opens the shortdesc block.
pub const ABSTRACT_MARKER: &str = "[role=\"_abstract\"]";

/// Top-level directory whose documents are never repaired.
pub const EXCLUDED_DIR: &str = "website";

/// Result of scanning a document's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStatus {
    /// The abstract marker is already present somewhere in the document.
    HasBlock,
    /// No marker, and a level-1 title to derive from.
    MissingWithHeading {
        /// Title text of the first level-1 heading.
        title: String,
        /// Line index at which a new block should be spliced.
        insert_at: usize,
    },
    /// No marker and no level-1 title; nothing can be synthesized.
    MissingNoHeading,
}

/// Scan a document's lines for the abstract block and insertion point.
pub fn scan(lines: &[String]) -> ScanStatus {
    if lines.iter().any(|line| line.trim() == ABSTRACT_MARKER) {
        return ScanStatus::HasBlock;
    }

    let Some((heading_index, title)) = find_level_one_heading(lines) else {
        return ScanStatus::MissingNoHeading;
    };

    // Blocks follow the title and any document-level attributes or
    // comments, never interleaving with prose.
    let mut insert_at = heading_index + 1;
    while insert_at < lines.len() {
        let trimmed = lines[insert_at].trim();
        if trimmed.is_empty() || is_attribute_line(trimmed) || trimmed.starts_with("//") {
            insert_at += 1;
        } else {
            break;
        }
    }

    ScanStatus::MissingWithHeading { title, insert_at }
}

/// Whether a repository-relative path lies in the excluded subtree.
pub fn is_excluded_path(rel_path: &str) -> bool {
    rel_path.split('/').any(|part| part == EXCLUDED_DIR)
}

/// Find the first level-1 heading (`= Title`). Deeper headings (`==`, `===`)
/// never qualify.
fn find_level_one_heading(lines: &[String]) -> Option<(usize, String)> {
    for (index, line) in lines.iter().enumerate() {
        if let Some(rest) = line.strip_prefix("= ") {
            let title = rest.trim();
            if !title.is_empty() && !title.starts_with('=') {
                return Some((index, title.to_string()));
            }
        }
    }
    None
}

/// Attribute-declaration shape: leading colon, non-empty name, closing colon.
fn is_attribute_line(trimmed: &str) -> bool {
    let Some(rest) = trimmed.strip_prefix(':') else {
        return false;
    };
    matches!(rest.find(':'), Some(position) if position > 0)
}
