//! Header extraction from full documents.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::MAX_EXTRACT_DEPTH;
use crate::numbering::strip_existing_label;

/// Header line as seen by the document rewriter: 1 to 7 `#` at the very
/// start of the line, whitespace, then non-blank text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOCUMENT_HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(#{{1,{MAX_EXTRACT_DEPTH}}})\s+(\S.*)$")).expect("valid regex")
});

/// A header found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Zero-based line index in the document.
    pub position: usize,
    /// Number of `#` markers.
    pub depth: usize,
    /// The line exactly as it appeared.
    pub raw_text: String,
    /// Header text without markers or a previous label.
    pub label_text: String,
}

/// Whether a single line (without terminator) is a header for the rewriter.
///
/// # Examples
/// ```
/// use header_renumber::document::is_header_line;
///
/// assert!(is_header_line("### Setup"));
/// assert!(!is_header_line("######## Too deep"));
/// assert!(!is_header_line("  # Indented"));
/// ```
pub fn is_header_line(line: &str) -> bool {
    DOCUMENT_HEADER_PATTERN.is_match(line)
}

/// Find every header in `content`, in document order.
///
/// Lines are split on `\n`; `prefix` is used to strip labels left by an
/// earlier run from [`Header::label_text`].
pub fn extract_headers(content: &str, prefix: &str) -> Vec<Header> {
    content
        .split('\n')
        .enumerate()
        .filter_map(|(position, line)| {
            let caps = DOCUMENT_HEADER_PATTERN.captures(line)?;
            let depth = caps.get(1)?.as_str().len();
            let text = caps.get(2)?.as_str().trim();
            Some(Header {
                position,
                depth,
                raw_text: line.to_string(),
                label_text: strip_existing_label(text, prefix).to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_positions_and_depths() {
        let content = "# Title\n## Sub\nBody\n## Sub2\n";
        let headers = extract_headers(content, "XXX");

        let found: Vec<(usize, usize)> = headers.iter().map(|h| (h.position, h.depth)).collect();
        assert_eq!(found, vec![(0, 1), (1, 2), (3, 2)]);
        assert_eq!(headers[0].raw_text, "# Title");
        assert_eq!(headers[2].label_text, "Sub2");
    }

    #[test]
    fn test_extract_depth_seven_but_not_eight() {
        let content = "####### Seven\n######## Eight\n";
        let headers = extract_headers(content, "XXX");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].depth, 7);
    }

    #[test]
    fn test_extract_strips_previous_label() {
        let headers = extract_headers("## XXX.3 Setup", "XXX");
        assert_eq!(headers[0].label_text, "Setup");
        assert_eq!(headers[0].raw_text, "## XXX.3 Setup");
    }

    #[test]
    fn test_extract_ignores_non_headers() {
        let content = "#tag\n   # indented\n##   \nplain\n";
        assert!(extract_headers(content, "XXX").is_empty());
    }

    #[test]
    fn test_extract_keeps_carriage_return_in_raw_text() {
        let headers = extract_headers("# Title\r\nBody\r\n", "XXX");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].raw_text, "# Title\r");
        assert_eq!(headers[0].label_text, "Title");
    }

    #[test]
    fn test_is_header_line() {
        assert!(is_header_line("# A"));
        assert!(is_header_line("####### G"));
        assert!(!is_header_line("#A"));
        assert!(!is_header_line(""));
        assert!(!is_header_line("<p class=\"h7\">XXX.1 A</p>"));
    }
}
