//! Operator-supplied shortdesc overrides.
//!
//! An optional CSV file at the scan root maps repository-relative paths to
//! literal shortdesc text, bypassing title derivation for those documents.
//! The table is loaded once per run and read-only afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use crate::fs::FileSystem;

/// Name of the optional override file at the scan root.
pub const OVERRIDES_FILENAME: &str = "shortdesc_overrides.csv";

/// Immutable mapping from repository-relative path to shortdesc text.
///
/// Duplicate paths follow the last row in the file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OverrideTable {
    entries: BTreeMap<String, String>,
}

impl OverrideTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from (path, shortdesc) pairs. Later pairs win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Load the override table from `root/shortdesc_overrides.csv`.
    ///
    /// A missing file yields an empty table. An unreadable file or a
    /// malformed row yields a warning and is otherwise ignored; loading
    /// never fails the batch.
    pub fn load<F: FileSystem>(fs: &F, root: &Path) -> (Self, Vec<String>) {
        let path = root.join(OVERRIDES_FILENAME);
        let contents = match fs.read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.is_not_found() => return (Self::empty(), Vec::new()),
            Err(err) => {
                let warning = format!("override file {}: {err}", path.display());
                return (Self::empty(), vec![warning]);
            }
        };

        let mut entries = BTreeMap::new();
        let mut warnings = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_row(line) {
                Some((rel_path, shortdesc)) => {
                    entries.insert(rel_path, shortdesc);
                }
                None => {
                    warnings.push(format!(
                        "override file {}: skipping malformed row {}",
                        path.display(),
                        index + 1
                    ));
                }
            }
        }

        (Self { entries }, warnings)
    }

    /// Look up the override text for a repository-relative path.
    pub fn lookup(&self, rel_path: &str) -> Option<&str> {
        self.entries.get(rel_path).map(String::as_str)
    }

    /// Number of loaded overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a CSV row into its first two columns.
///
/// Double-quoted fields may contain commas; `""` inside quotes is a literal
/// quote. Rows with fewer than two columns are malformed. Extra columns are
/// ignored, matching the two-column contract.
fn parse_row(line: &str) -> Option<(String, String)> {
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == ',' {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);

    if fields.len() < 2 {
        return None;
    }
    Some((fields[0].trim().to_string(), fields[1].trim().to_string()))
}
