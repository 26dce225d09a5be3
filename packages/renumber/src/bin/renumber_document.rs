//! CLI entry point for the document pipeline.
//!
//! Usage:
//!   header-renumber-document notes.md
//!   header-renumber-document --create-sample [sample.md]
//!
//! Headers are extracted, numbered on their own, written back at their
//! original positions and surrounded by exactly one blank line. The file is
//! replaced only after the whole pipeline succeeded.

use console::style;
use header_renumber::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = cli::parse_document_args(std::env::args_os())
        .and_then(|args| cli::execute_document(&args));

    if let Err(e) = result {
        eprintln!("{} {e}", style("Error:").red().bold());
        std::process::exit(1);
    }
}
