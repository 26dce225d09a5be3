//! CLI entry point for line-by-line header numbering.

use console::style;
use header_renumber::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let result = cli::parse_args(std::env::args_os()).and_then(|args| {
        // WARN by default, DEBUG with --verbose, RUST_LOG wins over both
        let default_level = if args.verbose { "debug" } else { "warn" };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();

        cli::execute(&args)
    });

    if let Err(e) = result {
        eprintln!("{} {e}", style("Error:").red().bold());
        std::process::exit(1);
    }
}
