//! Error types for header renumbering.
//!
//! The numbering engine itself never fails: anything that does not look like
//! a header is passed through. Errors only come from the file layer and from
//! validating command-line options.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the renumber library.
#[derive(Debug, Error)]
pub enum RenumberError {
    /// Input file does not exist.
    #[error("Input file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing a specific file failed.
    #[error("Failed to access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `--max-level` outside the supported range.
    #[error("--max-level must be between {min} and {max}, got {value}")]
    InvalidMaxLevel { value: usize, min: usize, max: usize },

    /// The directory that would receive the output cannot be written.
    #[error("Cannot write to directory '{}'", .0.display())]
    OutputNotWritable(PathBuf),

    /// Numbering prefix that would not survive a second pass.
    #[error("Invalid numbering prefix: '{0}'. Expected a non-empty token without whitespace or '#'")]
    InvalidPrefix(String),

    /// No input path on the command line.
    #[error("No input file specified")]
    MissingInput,

    /// Command-line arguments could not be parsed.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl RenumberError {
    /// Wrap an IO error with the path it happened on.
    ///
    /// A missing file becomes [`RenumberError::NotFound`] so callers can match
    /// on it without inspecting the IO error kind.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::FileAccess { path, source }
        }
    }
}

/// Result type alias for renumber operations.
pub type Result<T> = std::result::Result<T, RenumberError>;
