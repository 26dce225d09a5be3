//! Whole-document header renumbering.
//!
//! The rewriter pulls the header lines out of a document, numbers them in
//! isolation so body text can never disturb the counters, writes the
//! numbered headers back at their original line positions and finally
//! normalises the blank lines around every header.

mod extract;
mod rewriter;
mod spacing;

pub use extract::{extract_headers, is_header_line, Header};
pub use rewriter::{replace_headers, DocumentRewriter, Rewrite};
pub use spacing::ensure_header_spacing;
