//! In-memory document model.
//!
//! A document is an ordered sequence of lines plus its repository-relative
//! path. The original line-ending flavor and trailing-newline state are
//! captured at parse time so a rewritten file round-trips byte-for-byte when
//! nothing else changes.

/// Line-ending flavor detected when a document was read.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix `\n` endings.
    Lf,
    /// Windows `\r\n` endings.
    CrLf,
}

impl LineEnding {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// A parsed document: lines without terminators plus rendering metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Repository-relative path in forward-slash form, the stable key used
    /// for override lookup and reporting.
    pub rel_path: String,
    /// Document lines with terminators stripped.
    pub lines: Vec<String>,
    line_ending: LineEnding,
    trailing_newline: bool,
}

impl Document {
    /// Parse file contents into lines, recording the ending flavor.
    pub fn parse(rel_path: impl Into<String>, contents: &str) -> Self {
        let line_ending = if contents.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        };
        let trailing_newline = contents.ends_with('\n');
        let mut lines: Vec<String> = contents
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        if trailing_newline {
            lines.pop();
        }
        if contents.is_empty() {
            lines.clear();
        }

        Self {
            rel_path: rel_path.into(),
            lines,
            line_ending,
            trailing_newline,
        }
    }

    /// Render a line sequence back to file contents with the original
    /// line endings and trailing-newline state.
    pub fn render(&self, lines: &[String]) -> String {
        let ending = self.line_ending.as_str();
        let mut contents = lines.join(ending);
        if self.trailing_newline && !lines.is_empty() {
            contents.push_str(ending);
        }
        contents
    }
}
