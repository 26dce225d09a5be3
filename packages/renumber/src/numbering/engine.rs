//! Line-by-line header numberer.

use std::sync::LazyLock;

use regex::Regex;

use super::counters::CounterState;
use super::types::{FallbackBlockLine, Label, LineEnding, NumberedLine, RegularHeaderLine};
use crate::config::NumbererConfig;

/// Header line: one or more `#`, whitespace, then text.
///
/// Applied to a trimmed line, so the text group never ends in whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+(.+)$").expect("valid regex"));

/// Detect a header in an already trimmed line.
///
/// Returns the marker count and the header text.
///
/// # Examples
/// ```
/// use header_renumber::numbering::detect_header;
///
/// assert_eq!(detect_header("## Setup"), Some((2, "Setup")));
/// assert_eq!(detect_header("##Setup"), None);
/// assert_eq!(detect_header("plain text"), None);
/// ```
pub fn detect_header(trimmed: &str) -> Option<(usize, &str)> {
    let caps = HEADER_PATTERN.captures(trimmed)?;
    let markers = caps.get(1)?;
    let text = caps.get(2)?;
    Some((markers.as_str().len(), text.as_str().trim()))
}

/// Remove a label left by an earlier pass from the start of `text`.
///
/// Strips `prefix`, any number of `.<digits>` segments and the whitespace
/// after them. Text that does not start with `prefix` is returned as is.
///
/// # Examples
/// ```
/// use header_renumber::numbering::strip_existing_label;
///
/// assert_eq!(strip_existing_label("XXX.1.2 Setup", "XXX"), "Setup");
/// assert_eq!(strip_existing_label("XXX Intro", "XXX"), "Intro");
/// assert_eq!(strip_existing_label("Intro", "XXX"), "Intro");
/// ```
pub fn strip_existing_label<'a>(text: &'a str, prefix: &str) -> &'a str {
    let Some(mut rest) = text.strip_prefix(prefix) else {
        return text;
    };

    while let Some(after_dot) = rest.strip_prefix('.') {
        let digits = after_dot
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after_dot.len());
        if digits == 0 {
            break;
        }
        rest = &after_dot[digits..];
    }

    rest.trim_start()
}

/// Stateful numberer for one document pass.
///
/// Feed lines in document order with [`HeaderNumberer::process`]; call
/// [`HeaderNumberer::reset`] before starting on another document.
#[derive(Debug, Clone, Default)]
pub struct HeaderNumberer {
    config: NumbererConfig,
    counters: CounterState,
}

impl HeaderNumberer {
    /// Create a numberer with fresh counters.
    #[must_use]
    pub fn new(config: NumbererConfig) -> Self {
        Self {
            config,
            counters: CounterState::new(),
        }
    }

    /// Current counter state.
    #[must_use]
    pub fn counters(&self) -> &CounterState {
        &self.counters
    }

    /// Clear the counters to start a new pass.
    pub fn reset(&mut self) {
        self.counters.reset();
    }

    /// Number one line and return the tagged result.
    ///
    /// Non-header lines leave the counters untouched.
    pub fn number_line<'a>(&mut self, line: &'a str) -> NumberedLine<'a> {
        let Some((depth, text)) = detect_header(line.trim()) else {
            return NumberedLine::Unchanged(line);
        };

        let text = strip_existing_label(text, &self.config.prefix).to_string();
        self.counters.advance(depth);

        let segments = if depth == 1 {
            Vec::new()
        } else {
            self.counters.label_segments(depth)
        };
        let label = Label::new(self.config.prefix.clone(), segments);

        tracing::trace!(depth, label = %label, "Numbered header");

        if depth > 1 && depth > self.config.max_regular_depth {
            NumberedLine::Fallback(FallbackBlockLine { depth, label, text })
        } else {
            NumberedLine::Regular(RegularHeaderLine {
                depth,
                label,
                text,
                line_ending: LineEnding::detect(line),
            })
        }
    }

    /// Number one line and render it.
    ///
    /// Returns the line unchanged when it is not a header.
    pub fn process(&mut self, line: &str) -> String {
        self.number_line(line).render()
    }
}
