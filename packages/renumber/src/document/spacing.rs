//! Blank-line normalisation around headers.

use super::extract::is_header_line;

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn ends_with_content(lines: &[&str]) -> bool {
    lines.last().is_some_and(|l| !is_blank(l))
}

/// Put exactly one blank line before and after every header.
///
/// Outside of headers, runs of blank lines collapse into one and blank lines
/// at the very start of the document are dropped. Line content itself is
/// never modified.
///
/// # Examples
/// ```
/// use header_renumber::document::ensure_header_spacing;
///
/// assert_eq!(ensure_header_spacing("# A\nBody\n\n\nMore"), "# A\n\nBody\n\nMore");
/// ```
pub fn ensure_header_spacing(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut result: Vec<&str> = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().copied().enumerate() {
        if is_header_line(line) {
            if ends_with_content(&result) {
                result.push("");
            }
            result.push(line);
            if lines.get(i + 1).is_some_and(|next| !is_blank(next)) {
                result.push("");
            }
        } else if is_blank(line) {
            if ends_with_content(&result) {
                result.push(line);
            }
        } else {
            result.push(line);
        }
    }

    result.join("\n")
}
