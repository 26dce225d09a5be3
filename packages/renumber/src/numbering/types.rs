//! Result types for numbering a single line.

use std::fmt;

use crate::config::FALLBACK_CLASS;

/// Line terminator found at the end of an input line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// Last line of a file without a trailing newline.
    #[default]
    None,
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Detect the terminator of `line`.
    #[must_use]
    pub fn detect(line: &str) -> Self {
        if line.ends_with("\r\n") {
            Self::CrLf
        } else if line.ends_with('\n') {
            Self::Lf
        } else {
            Self::None
        }
    }

    /// The terminator as text.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Hierarchical label such as `XXX` or `XXX.2.1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Sentinel token the label starts with.
    pub prefix: String,
    /// Counter values appended after the prefix.
    pub segments: Vec<usize>,
}

impl Label {
    /// Create a new label.
    #[must_use]
    pub fn new(prefix: impl Into<String>, segments: Vec<usize>) -> Self {
        Self {
            prefix: prefix.into(),
            segments,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        for segment in &self.segments {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}

/// Header rendered with `#` markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularHeaderLine {
    /// Number of `#` markers.
    pub depth: usize,
    pub label: Label,
    /// Header text with any previous label removed.
    pub text: String,
    /// Terminator copied from the input line.
    pub line_ending: LineEnding,
}

impl RegularHeaderLine {
    /// Render as `## XXX.1 Text` plus the original line ending.
    ///
    /// The space after the label is always written, so a header without
    /// text renders as `## XXX.1 `.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{} {} {}{}",
            "#".repeat(self.depth),
            self.label,
            self.text,
            self.line_ending.as_str()
        )
    }
}

/// Header deeper than the regular maximum, rendered as a paragraph block.
///
/// The `#` markers are dropped and the block always ends with a blank line,
/// whatever the input line ending was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackBlockLine {
    /// Number of `#` markers on the input line.
    pub depth: usize,
    pub label: Label,
    /// Header text with any previous label removed.
    pub text: String,
}

impl FallbackBlockLine {
    /// Render as `<p class="h7">XXX.1 Text</p>` followed by two newlines.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "<p class=\"{FALLBACK_CLASS}\">{} {}</p>\n\n",
            self.label, self.text
        )
    }
}

/// Outcome of feeding one line to the numberer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberedLine<'a> {
    /// Not a header; the input line verbatim.
    Unchanged(&'a str),
    /// Header within the regular depth range.
    Regular(RegularHeaderLine),
    /// Header past the regular depth range.
    Fallback(FallbackBlockLine),
}

impl NumberedLine<'_> {
    /// Output text for this line.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Unchanged(line) => (*line).to_string(),
            Self::Regular(header) => header.render(),
            Self::Fallback(block) => block.render(),
        }
    }
}
