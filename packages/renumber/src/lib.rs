//! Header Renumber - hierarchical numbering for markdown headers.
//!
//! This crate rewrites markdown headers so that every header carries a
//! dot-notation label derived from its position in the header tree
//! (`# XXX Title`, `## XXX.1 Section`, `### XXX.1.1 Subsection`). Running it
//! again on its own output changes nothing.
//!
//! # Example
//!
//! ```
//! use header_renumber::DocumentRewriter;
//!
//! let rewriter = DocumentRewriter::default();
//! let out = rewriter.renumber_document("# Guide\n## Install\nRun it.\n## Use\n");
//! assert_eq!(out, "# XXX Guide\n\n## XXX.1 Install\n\nRun it.\n\n## XXX.2 Use\n");
//! ```
//!
//! # Architecture
//!
//! - [`numbering`]: line-by-line numbering state machine
//! - [`document`]: header extraction, substitution and spacing
//! - [`processor`]: file-level entry points with atomic writes
//! - [`config`]: constants, validation and environment configuration
//! - [`error`]: error types and Result alias
//! - [`sample`]: built-in sample document
//! - [`cli`]: command-line interfaces

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod numbering;
pub mod processor;
pub mod sample;

// Re-export main entry points
pub use processor::{process_file, process_markdown_file};

// Re-export commonly used items
pub use config::NumbererConfig;
pub use document::DocumentRewriter;
pub use error::{RenumberError, Result};
pub use numbering::{HeaderNumberer, NumberedLine};
