//! Extract, number, substitute and space headers in a document.

use super::extract::{extract_headers, Header};
use super::spacing::ensure_header_spacing;
use crate::config::NumbererConfig;
use crate::numbering::HeaderNumberer;

/// Outcome of rewriting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Final document text.
    pub content: String,
    /// Headers found in the input, in document order.
    pub headers: Vec<Header>,
    /// Numbered header lines produced for `headers`, in the same order.
    pub numbered: Vec<String>,
}

impl Rewrite {
    /// Number of header positions that received a numbered line.
    #[must_use]
    pub fn substituted(&self) -> usize {
        self.headers.len().min(self.numbered.len())
    }

    /// Whether the input contained no headers at all.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.headers.is_empty()
    }
}

/// Renumbers every header of a document and normalises header spacing.
///
/// Each call runs its own numbering pass, so one rewriter can be reused for
/// many documents and cloned freely across threads.
#[derive(Debug, Clone, Default)]
pub struct DocumentRewriter {
    config: NumbererConfig,
}

impl DocumentRewriter {
    /// Create a rewriter with the given numbering settings.
    #[must_use]
    pub fn new(config: NumbererConfig) -> Self {
        Self { config }
    }

    /// Rewrite `original` and return only the new text.
    ///
    /// # Examples
    /// ```
    /// use header_renumber::DocumentRewriter;
    ///
    /// let out = DocumentRewriter::default().renumber_document("# Title\n## Sub\nBody\n");
    /// assert_eq!(out, "# XXX Title\n\n## XXX.1 Sub\n\nBody\n");
    /// ```
    pub fn renumber_document(&self, original: &str) -> String {
        self.rewrite(original).content
    }

    /// Rewrite `original`, keeping the intermediate header data.
    ///
    /// A document without headers is returned exactly as given, without a
    /// spacing pass.
    pub fn rewrite(&self, original: &str) -> Rewrite {
        let headers = extract_headers(original, &self.config.prefix);
        tracing::debug!(count = headers.len(), "Extracted headers");

        if headers.is_empty() {
            return Rewrite {
                content: original.to_string(),
                headers,
                numbered: Vec::new(),
            };
        }

        let numbered = self.number_headers(&headers);
        let substituted = replace_headers(original, &headers, &numbered);
        let content = ensure_header_spacing(&substituted);

        Rewrite {
            content,
            headers,
            numbered,
        }
    }

    /// Number the header lines on their own, in a fresh pass.
    ///
    /// The headers are staged as a standalone sequence of lines so that no
    /// body text reaches the counters. Blank output lines are dropped, which
    /// is what separates fallback blocks from the next header.
    pub fn number_headers(&self, headers: &[Header]) -> Vec<String> {
        let mut numberer = HeaderNumberer::new(self.config.clone());

        let staged: Vec<String> = headers
            .iter()
            .map(|header| format!("{}\n", header.raw_text))
            .collect();

        let output: String = staged.iter().map(|line| numberer.process(line)).collect();

        output
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Replace the header lines of `original` with their numbered versions.
///
/// `numbered[i]` replaces the line of `headers[i]`. When fewer numbered lines
/// than headers are given, the remaining headers stay as they were.
pub fn replace_headers(original: &str, headers: &[Header], numbered: &[String]) -> String {
    if numbered.len() < headers.len() {
        tracing::debug!(
            headers = headers.len(),
            numbered = numbered.len(),
            "Fewer numbered lines than headers, substituting the first ones only"
        );
    }

    let mut lines: Vec<&str> = original.split('\n').collect();
    for (header, replacement) in headers.iter().zip(numbered) {
        if let Some(line) = lines.get_mut(header.position) {
            *line = replacement.trim();
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_renumber_scenario() {
        let rewrite = DocumentRewriter::default().rewrite("# Title\n## Sub\nBody\n## Sub2\n");

        let depths: Vec<usize> = rewrite.headers.iter().map(|h| h.depth).collect();
        assert_eq!(depths, vec![1, 2, 2]);
        assert_eq!(
            rewrite.numbered,
            vec!["# XXX Title", "## XXX.1 Sub", "## XXX.2 Sub2"]
        );
        assert_eq!(
            rewrite.content,
            "# XXX Title\n\n## XXX.1 Sub\n\nBody\n\n## XXX.2 Sub2\n"
        );
        assert_eq!(rewrite.substituted(), 3);
    }

    #[test]
    fn test_no_headers_is_noop() {
        let input = "Just text\n\n\n\nwith blank runs\n";
        let rewrite = DocumentRewriter::default().rewrite(input);
        assert!(rewrite.is_noop());
        assert_eq!(rewrite.content, input);
    }

    #[test]
    fn test_body_text_does_not_affect_counters() {
        // The indented line looks like a header to the line numberer but is
        // not extracted, so it must not bump any counter.
        let input = "# A\n   ## not extracted\n## B\n";
        let out = DocumentRewriter::default().renumber_document(input);
        assert!(out.contains("## XXX.1 B"));
        assert!(out.contains("   ## not extracted"));
    }

    #[test]
    fn test_renumber_is_idempotent() {
        let input = "# Intro\nText\n## One\n### One.A\n## Two\n####### Seven\n# Next\n## Again\n";
        let rewriter = DocumentRewriter::default();
        let first = rewriter.renumber_document(input);
        let second = rewriter.renumber_document(&first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_depth_seven_becomes_fallback_block() {
        let out = DocumentRewriter::default().renumber_document("# A\n####### Deep\nText\n");
        assert_eq!(out, "# XXX A\n\n<p class=\"h7\">XXX.1 Deep</p>\nText\n");
    }

    #[test]
    fn test_number_headers_drops_blank_lines() {
        let rewriter = DocumentRewriter::default();
        let headers = extract_headers("# A\n####### B\n## C", "XXX");
        let numbered = rewriter.number_headers(&headers);
        assert_eq!(
            numbered,
            vec!["# XXX A", "<p class=\"h7\">XXX.1 B</p>", "## XXX.1 C"]
        );
    }

    #[test]
    fn test_replace_headers_partial() {
        let original = "# A\nbody\n## B\n## C";
        let headers = extract_headers(original, "XXX");
        let numbered = vec!["# XXX A".to_string(), "## XXX.1 B".to_string()];
        assert_eq!(
            replace_headers(original, &headers, &numbered),
            "# XXX A\nbody\n## XXX.1 B\n## C"
        );
    }

    #[test]
    fn test_replace_headers_ignores_out_of_range_positions() {
        let headers = vec![Header {
            position: 10,
            depth: 1,
            raw_text: "# Gone".to_string(),
            label_text: "Gone".to_string(),
        }];
        let out = replace_headers("line", &headers, &["# XXX Gone".to_string()]);
        assert_eq!(out, "line");
    }

    #[test]
    fn test_crlf_header_lines_are_trimmed() {
        let out = DocumentRewriter::default().renumber_document("# A\r\nbody\r\n");
        assert_eq!(out, "# XXX A\n\nbody\r\n");
    }

    #[test]
    fn test_label_only_header_is_trimmed_in_document() {
        let rewriter = DocumentRewriter::default();
        let out = rewriter.renumber_document("# A\n## XXX.3\n");
        assert_eq!(out, "# XXX A\n\n## XXX.1\n");
        assert_eq!(rewriter.renumber_document(&out), out);
    }

    #[test]
    fn test_custom_prefix_rewriter() {
        let config = NumbererConfig::default().with_prefix("§");
        let out = DocumentRewriter::new(config).renumber_document("# A\n## B");
        assert_eq!(out, "# § A\n\n## §.1 B");
    }
}
