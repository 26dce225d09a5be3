//! Configuration constants and validation functions for header renumbering.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::error::{RenumberError, Result};

/// Sentinel token that starts every generated label.
pub const DEFAULT_PREFIX: &str = "XXX";

/// Deepest header level rendered with `#` markers by default.
pub const DEFAULT_MAX_LEVEL: usize = 6;

/// Lowest value accepted for `--max-level`.
pub const MIN_CLI_MAX_LEVEL: usize = 1;

/// Highest value accepted for `--max-level`.
pub const MAX_CLI_MAX_LEVEL: usize = 6;

/// Deepest header the document rewriter extracts (`#######`).
pub const MAX_EXTRACT_DEPTH: usize = 7;

/// Counter slots allocated up front. Deeper headers grow the counter state.
pub const COUNTER_SLOTS: usize = 10;

/// CSS class carried by headers deeper than the regular maximum.
pub const FALLBACK_CLASS: &str = "h7";

/// File extensions treated as markdown without a warning.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Environment variable overriding the label prefix.
pub const PREFIX_ENV: &str = "HEADER_RENUMBER_PREFIX";

/// Environment variable overriding the maximum regular header level.
pub const MAX_LEVEL_ENV: &str = "HEADER_RENUMBER_MAX_LEVEL";

/// Settings for one numbering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumbererConfig {
    /// Label sentinel, `XXX` unless overridden.
    pub prefix: String,
    /// Headers deeper than this are rendered as fallback blocks.
    pub max_regular_depth: usize,
}

impl Default for NumbererConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            max_regular_depth: DEFAULT_MAX_LEVEL,
        }
    }
}

impl NumbererConfig {
    /// Build a config from `HEADER_RENUMBER_PREFIX` and
    /// `HEADER_RENUMBER_MAX_LEVEL`, falling back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_max_level(None)
    }

    /// Like [`NumbererConfig::from_env`], but an explicit `max_level` wins
    /// over `HEADER_RENUMBER_MAX_LEVEL`, which is then not read at all.
    ///
    /// A max level from the environment that does not parse is ignored; one
    /// that parses but is out of range is rejected.
    pub fn from_env_with_max_level(max_level: Option<usize>) -> Result<Self> {
        let mut config = Self::default();

        if let Ok(prefix) = std::env::var(PREFIX_ENV) {
            validate_prefix(&prefix)?;
            config.prefix = prefix;
        }

        let level = max_level.or_else(|| {
            std::env::var(MAX_LEVEL_ENV)
                .ok()
                .and_then(|v| v.trim().parse::<usize>().ok())
        });
        if let Some(level) = level {
            validate_max_level(level)?;
            config.max_regular_depth = level;
        }

        Ok(config)
    }

    /// Set the label prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the deepest level rendered as a regular header.
    #[must_use]
    pub fn with_max_regular_depth(mut self, depth: usize) -> Self {
        self.max_regular_depth = depth;
        self
    }
}

/// Validate a `--max-level` value.
///
/// # Examples
/// ```
/// use header_renumber::config::validate_max_level;
///
/// assert!(validate_max_level(4).is_ok());
/// assert!(validate_max_level(0).is_err());
/// assert!(validate_max_level(7).is_err());
/// ```
pub fn validate_max_level(level: usize) -> Result<()> {
    if (MIN_CLI_MAX_LEVEL..=MAX_CLI_MAX_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(RenumberError::InvalidMaxLevel {
            value: level,
            min: MIN_CLI_MAX_LEVEL,
            max: MAX_CLI_MAX_LEVEL,
        })
    }
}

/// Validate a label prefix.
///
/// The prefix has to be recognisable when a numbered document is processed
/// again, so it cannot be empty, contain whitespace or start a header marker.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() || prefix.chars().any(|c| c.is_whitespace() || c == '#') {
        Err(RenumberError::InvalidPrefix(prefix.to_string()))
    } else {
        Ok(())
    }
}

/// Whether the path carries a markdown file extension.
pub fn has_markdown_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Directory that will receive a write to `output`.
///
/// A bare file name resolves to the current directory.
pub fn output_directory(output: &Path) -> PathBuf {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Check that the directory containing `output` exists and accepts new files.
///
/// Probes by creating and removing a hidden file, which reflects ACLs and
/// read-only mounts that permission bits alone do not show.
pub fn validate_output_writable(output: &Path) -> Result<()> {
    let dir = output_directory(output);
    if !dir.is_dir() {
        return Err(RenumberError::OutputNotWritable(dir));
    }

    let probe = dir.join(format!(".header-renumber-probe-{}", std::process::id()));
    match OpenOptions::new().write(true).create_new(true).open(&probe) {
        Ok(file) => {
            drop(file);
            if let Err(e) = std::fs::remove_file(&probe) {
                tracing::warn!(path = %probe.display(), error = %e, "Failed to remove write probe");
            }
            Ok(())
        }
        Err(_) => Err(RenumberError::OutputNotWritable(dir)),
    }
}
