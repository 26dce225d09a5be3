//! Command-line interfaces for header renumbering.
//!
//! `header-renumber` numbers a file line by line. `header-renumber-document`
//! runs the full document pipeline with header extraction and spacing.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use console::style;

use crate::config::{
    has_markdown_extension, validate_output_writable, NumbererConfig, FALLBACK_CLASS,
};
use crate::document::DocumentRewriter;
use crate::error::{RenumberError, Result};
use crate::numbering::HeaderNumberer;
use crate::processor::{preview_file, process_file, process_markdown_file, DocumentReport};
use crate::sample::{write_sample, SAMPLE_FILE_NAME};

/// Number markdown headers hierarchically (XXX, XXX.1, XXX.1.2, ...).
#[derive(Debug, Parser)]
#[command(name = "header-renumber")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
Examples:
  header-renumber document.md                 Overwrite the original file
  header-renumber input.md output.md          Write to a new file
  header-renumber --max-level 4 document.md   Render levels 5+ as <p class=\"h7\"> blocks")]
pub struct Cli {
    /// Path to the input markdown file
    pub input_file: Option<PathBuf>,

    /// Path to the output markdown file (default: overwrite the input)
    pub output_file: Option<PathBuf>,

    /// Deepest header level rendered with # markers, 1 to 6 (default: 6)
    #[arg(long, value_name = "N")]
    pub max_level: Option<usize>,

    /// Show the changes without writing to file
    #[arg(long)]
    pub preview: bool,

    /// Print configuration and a processing summary
    #[arg(short, long)]
    pub verbose: bool,
}

/// Renumber the headers of a markdown file in place, with header spacing.
#[derive(Debug, Parser)]
#[command(name = "header-renumber-document")]
#[command(version, about, long_about = None)]
pub struct DocumentCli {
    /// Markdown file to process
    pub path: Option<PathBuf>,

    /// Write the built-in sample document to PATH (default: sample.md) before processing
    #[arg(long)]
    pub create_sample: bool,
}

/// Parse arguments, letting clap handle `--help` and `--version`.
fn try_parse<P, I, T>(args: I) -> Result<P>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    P::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        kind => {
            let _ = e.print();
            RenumberError::InvalidArguments(
                kind.as_str().unwrap_or("unrecognised arguments").to_string(),
            )
        }
    })
}

/// Parse `header-renumber` arguments.
///
/// A missing input path is not a parse error; [`execute`] reports it.
pub fn parse_args<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    try_parse(args)
}

/// Parse `header-renumber-document` arguments.
pub fn parse_document_args<I, T>(args: I) -> Result<DocumentCli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    try_parse(args)
}

/// Check the input path before touching anything.
fn validate_input(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(RenumberError::NotFound(input.to_path_buf()));
    }
    if !has_markdown_extension(input) {
        println!(
            "{} '{}' doesn't appear to be a markdown file",
            style("Warning:").yellow().bold(),
            input.display()
        );
    }
    Ok(())
}

/// Execute a parsed `header-renumber` invocation.
///
/// Without an input path the help text is printed and
/// [`RenumberError::MissingInput`] is returned.
pub fn execute(cli: &Cli) -> Result<()> {
    let Some(input) = cli.input_file.as_deref() else {
        let _ = Cli::command().print_help();
        return Err(RenumberError::MissingInput);
    };
    validate_input(input)?;

    let config = NumbererConfig::from_env_with_max_level(cli.max_level)?;
    let output = cli.output_file.as_deref().unwrap_or(input);
    validate_output_writable(output)?;

    if cli.verbose {
        println!("{}", style("Configuration:").bold());
        println!("   Input file: {}", input.display());
        match cli.output_file.as_deref() {
            Some(path) => println!("   Output file: {}", path.display()),
            None => println!("   Output file: {} (overwrite)", input.display()),
        }
        println!("   Max header level: {}", config.max_regular_depth);
        println!("   Prefix: {}", config.prefix);
        println!("   Preview mode: {}", cli.preview);
        println!();
    }

    let mut numberer = HeaderNumberer::new(config);

    if cli.preview {
        println!("{}", style("Preview mode - showing processed content:").bold());
        println!();
        for change in preview_file(&mut numberer, input)? {
            println!("Line {}: {}", change.line_number, change.before);
            println!("    ->: {}", style(&change.after).green());
            println!();
        }
    } else {
        let report = process_file(&mut numberer, input, cli.output_file.as_deref())?;

        if report.output == report.input {
            println!("{} {}", style("Overwrote").bold(), report.output.display());
        } else {
            println!("{} {}", style("Wrote").bold(), report.output.display());
        }
        println!(
            "{} {} headers",
            style("Processed").green().bold(),
            report.headers_processed
        );

        if cli.verbose {
            let summary = Summary::of(&report.content);
            println!();
            println!("{}", style("Processing summary:").bold());
            println!("   Total lines processed: {}", summary.total_lines);
            println!("   Headers found: {}", summary.header_lines);
            println!("   File size: {} characters", summary.characters);
        }
    }

    println!();
    println!("{}", style("Processing completed successfully!").green().bold());
    Ok(())
}

/// Execute a parsed `header-renumber-document` invocation.
pub fn execute_document(cli: &DocumentCli) -> Result<DocumentReport> {
    let path = match (&cli.path, cli.create_sample) {
        (Some(path), _) => path.clone(),
        (None, true) => PathBuf::from(SAMPLE_FILE_NAME),
        (None, false) => {
            eprintln!("Usage: header-renumber-document <FILE.md>");
            eprintln!("       header-renumber-document --create-sample [FILE.md]");
            return Err(RenumberError::MissingInput);
        }
    };

    if cli.create_sample {
        write_sample(&path)?;
        println!("{} {}", style("Created").bold(), path.display());
    }

    if !path.exists() {
        return Err(RenumberError::NotFound(path));
    }

    let rewriter = DocumentRewriter::new(NumbererConfig::from_env()?);
    let report = process_markdown_file(&rewriter, &path)?;

    println!("Found {} headers:", report.headers.len());
    for header in &report.headers {
        println!(
            "  Line {}: H{} - {}",
            header.position + 1,
            header.depth,
            header.raw_text.trim_end()
        );
    }

    if report.written {
        println!(
            "{} {} ({} headers renumbered)",
            style("Updated").green().bold(),
            report.path.display(),
            report.substituted
        );
    } else {
        println!("No headers found in the file. Nothing to process.");
    }

    Ok(report)
}

/// Line statistics printed by `--verbose`.
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    total_lines: usize,
    header_lines: usize,
    characters: usize,
}

impl Summary {
    fn of(content: &str) -> Self {
        let fallback_tag = format!("<p class=\"{FALLBACK_CLASS}\">");
        let lines: Vec<&str> = content.split('\n').collect();
        let header_lines = lines
            .iter()
            .filter(|line| line.trim().starts_with('#') || line.contains(&fallback_tag))
            .count();

        Self {
            total_lines: lines.len(),
            header_lines,
            characters: content.chars().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parse_input_only() {
        let cli = Cli::parse_from(["header-renumber", "doc.md"]);
        assert_eq!(cli.input_file, Some(PathBuf::from("doc.md")));
        assert!(cli.output_file.is_none());
        assert!(cli.max_level.is_none());
        assert!(!cli.preview);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_all_options() {
        let cli = Cli::parse_from([
            "header-renumber",
            "in.md",
            "out.md",
            "--max-level",
            "4",
            "--preview",
            "-v",
        ]);
        assert_eq!(cli.output_file, Some(PathBuf::from("out.md")));
        assert_eq!(cli.max_level, Some(4));
        assert!(cli.preview);
        assert!(cli.verbose);
    }

    #[test]
    fn test_execute_without_input_path() {
        let cli = parse_args(["header-renumber", "--preview"]).unwrap();
        assert!(cli.input_file.is_none());
        assert!(matches!(execute(&cli), Err(RenumberError::MissingInput)));
    }

    #[test]
    fn test_parse_args_rejects_bad_level_value() {
        let err = parse_args(["header-renumber", "doc.md", "--max-level", "abc"]).unwrap_err();
        assert!(matches!(err, RenumberError::InvalidArguments(_)));
    }

    #[test]
    fn test_document_cli_parse() {
        let cli = DocumentCli::parse_from(["header-renumber-document", "--create-sample"]);
        assert!(cli.path.is_none());
        assert!(cli.create_sample);
    }

    #[test]
    fn test_execute_rejects_out_of_range_level() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("doc.md");
        fs::write(&input, "# A\n").unwrap();

        let cli = Cli::parse_from([
            "header-renumber",
            input.to_str().unwrap(),
            "--max-level",
            "7",
        ]);
        let err = execute(&cli).unwrap_err();
        assert!(matches!(err, RenumberError::InvalidMaxLevel { value: 7, .. }));
        assert_eq!(fs::read_to_string(&input).unwrap(), "# A\n");
    }

    #[test]
    fn test_execute_missing_input() {
        let dir = tempdir().unwrap();
        let cli = Cli::parse_from([
            "header-renumber",
            dir.path().join("missing.md").to_str().unwrap(),
        ]);
        assert!(matches!(execute(&cli), Err(RenumberError::NotFound(_))));
    }

    #[test]
    fn test_execute_unwritable_output_directory() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("doc.md");
        fs::write(&input, "# A\n").unwrap();
        let output = dir.path().join("no-such-dir").join("out.md");

        let cli = Cli::parse_from([
            "header-renumber",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);
        assert!(matches!(
            execute(&cli),
            Err(RenumberError::OutputNotWritable(_))
        ));
    }

    #[test]
    fn test_execute_writes_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("doc.md");
        let output = dir.path().join("out.md");
        fs::write(&input, "# A\nbody\n## B\n").unwrap();

        let cli = Cli::parse_from([
            "header-renumber",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);
        execute(&cli).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "# XXX A\nbody\n## XXX.1 B\n"
        );
    }

    #[test]
    fn test_execute_document_without_path() {
        let cli = DocumentCli {
            path: None,
            create_sample: false,
        };
        assert!(matches!(
            execute_document(&cli),
            Err(RenumberError::MissingInput)
        ));
    }

    #[test]
    fn test_execute_document_with_sample() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.md");
        let cli = DocumentCli {
            path: Some(path.clone()),
            create_sample: true,
        };

        let report = execute_document(&cli).unwrap();
        assert!(report.written);
        assert!(fs::read_to_string(&path)
            .unwrap()
            .starts_with("# XXX Cross-Origin"));
    }

    #[test]
    fn test_summary() {
        let content = "# XXX A\nbody\n<p class=\"h7\">XXX.1 B</p>\n";
        assert_eq!(
            Summary::of(content),
            Summary {
                total_lines: 4,
                header_lines: 2,
                characters: content.chars().count(),
            }
        );
    }
}
