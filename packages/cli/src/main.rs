mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, export, lint, new, store, ApplyArgs, ExportArgs, LintArgs, NewArgs, StoreArgs};
use tracing_subscriber::EnvFilter;

/// Mailblocks CLI - build, edit and export email newsletters
#[derive(Parser, Debug)]
#[command(name = "mailblocks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log editor and exporter activity at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a newsletter document from block types
    New(NewArgs),

    /// Replay a mutation script against a document
    Apply(ApplyArgs),

    /// Export a document to email HTML
    Export(ExportArgs),

    /// Validate documents
    Lint(LintArgs),

    /// Save and fetch newsletters
    Store(StoreArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::New(args) => new(args, &cwd),
                Command::Apply(args) => apply(args, &cwd),
                Command::Export(args) => export(args, &cwd),
                Command::Lint(args) => lint(args, &cwd),
                Command::Store(args) => store(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
