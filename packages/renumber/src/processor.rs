//! File-level entry points that tie reading, numbering and writing together.
//!
//! Two pipelines live here and they deliberately differ:
//!
//! - [`process_file`] runs every line of a file through a [`HeaderNumberer`]
//!   and leaves spacing alone.
//! - [`process_markdown_file`] uses the [`DocumentRewriter`], which numbers
//!   only extracted headers and normalises the blank lines around them.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

use crate::config::output_directory;
use crate::document::{DocumentRewriter, Header};
use crate::error::{RenumberError, Result};
use crate::numbering::HeaderNumberer;

/// Result of [`process_file`].
#[derive(Debug, Clone)]
pub struct FileReport {
    /// File that was read.
    pub input: PathBuf,
    /// File that was written.
    pub output: PathBuf,
    /// Number of lines the numberer changed.
    pub headers_processed: usize,
    /// Full processed text as written.
    pub content: String,
}

/// One line changed by a preview run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based line number.
    pub line_number: usize,
    pub before: String,
    pub after: String,
}

/// Result of [`process_markdown_file`].
#[derive(Debug, Clone)]
pub struct DocumentReport {
    pub path: PathBuf,
    /// Headers found in the original document.
    pub headers: Vec<Header>,
    /// Header lines that were replaced by numbered versions.
    pub substituted: usize,
    /// Whether the file was rewritten. False when it had no headers.
    pub written: bool,
}

/// Read a whole document as UTF-8.
///
/// Returns [`RenumberError::NotFound`] when the path does not exist.
pub fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(RenumberError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|e| RenumberError::from_io(path, e))
}

/// Write `content` to `path` without ever leaving a partial file behind.
///
/// Stages the text in a uniquely named temp file in the target's directory,
/// syncs it and renames it over the target. An existing target keeps its
/// permissions, and a symlinked target is written through the link. The temp
/// file is removed again if any step fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = resolve_symlink(path);
    write_and_persist(&target, content).map_err(|e| RenumberError::from_io(path, e))
}

/// Final file a write to `path` lands in. Dangling links are replaced.
fn resolve_symlink(path: &Path) -> PathBuf {
    if path.is_symlink() {
        if let Ok(resolved) = fs::canonicalize(path) {
            return resolved;
        }
    }
    path.to_path_buf()
}

/// Temp file next to `target`, created with the mode a fresh file would get.
fn staging_file(target: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(output_directory(target))
}

fn write_and_persist(target: &Path, content: &str) -> std::io::Result<()> {
    let mut temp = staging_file(target)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(target) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }

    temp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

/// Number every line of `content` in a fresh pass.
///
/// Returns the processed text and the number of lines that changed. Lines
/// keep their own terminators.
pub fn number_lines(numberer: &mut HeaderNumberer, content: &str) -> (String, usize) {
    numberer.reset();

    let mut changed = 0;
    let mut processed = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        let out = numberer.process(line);
        if out != line {
            changed += 1;
        }
        processed.push_str(&out);
    }

    (processed, changed)
}

/// Number every line of `input` and write the result.
///
/// Writes to `output` when given, otherwise overwrites `input`. Every line
/// is a header candidate; no spacing is adjusted.
pub fn process_file(
    numberer: &mut HeaderNumberer,
    input: &Path,
    output: Option<&Path>,
) -> Result<FileReport> {
    let content = read_document(input)?;
    tracing::debug!(path = %input.display(), bytes = content.len(), "Read input file");

    let (processed, headers_processed) = number_lines(numberer, &content);

    let output = output.unwrap_or(input);
    write_atomic(output, &processed)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        headers = headers_processed,
        "Processed file"
    );

    Ok(FileReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        headers_processed,
        content: processed,
    })
}

/// Show which lines a numbering pass would change, without writing.
///
/// `content` is split on `\n`, so line terminators are not part of
/// [`LineChange::before`].
pub fn preview_document(numberer: &mut HeaderNumberer, content: &str) -> Vec<LineChange> {
    numberer.reset();

    content
        .split('\n')
        .enumerate()
        .filter_map(|(i, line)| {
            let after = numberer.process(line);
            (after != line).then(|| LineChange {
                line_number: i + 1,
                before: line.trim().to_string(),
                after: after.trim().to_string(),
            })
        })
        .collect()
}

/// Read `input` and preview the numbering changes.
pub fn preview_file(numberer: &mut HeaderNumberer, input: &Path) -> Result<Vec<LineChange>> {
    let content = read_document(input)?;
    Ok(preview_document(numberer, &content))
}

/// Renumber the headers of a markdown file in place.
///
/// Reads the file, numbers the extracted headers in isolation, substitutes
/// them, fixes header spacing and writes the file back. A file without
/// headers is left untouched. The target is only replaced once the whole
/// pipeline has succeeded.
pub fn process_markdown_file(rewriter: &DocumentRewriter, path: &Path) -> Result<DocumentReport> {
    tracing::info!(path = %path.display(), "Processing markdown file");

    let original = read_document(path)?;
    let rewrite = rewriter.rewrite(&original);

    for header in &rewrite.headers {
        tracing::debug!(
            line = header.position + 1,
            depth = header.depth,
            text = %header.raw_text,
            "Found header"
        );
    }

    if rewrite.is_noop() {
        tracing::info!(path = %path.display(), "No headers found, nothing to process");
        return Ok(DocumentReport {
            path: path.to_path_buf(),
            headers: rewrite.headers,
            substituted: 0,
            written: false,
        });
    }

    write_atomic(path, &rewrite.content)?;
    let substituted = rewrite.substituted();
    tracing::info!(
        path = %path.display(),
        headers = rewrite.headers.len(),
        substituted,
        "Markdown file processed"
    );

    Ok(DocumentReport {
        path: path.to_path_buf(),
        headers: rewrite.headers,
        substituted,
        written: true,
    })
}
