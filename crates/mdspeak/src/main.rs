//! mdspeak CLI - Obsidian Markdown to speech-ready plain text.
//!
//! Provides commands for:
//! - `convert-file`: Convert a single Markdown file
//! - `convert-directory`: Convert a vault tree, mirroring its layout

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConvertDirectoryArgs, ConvertFileArgs};
use output::Output;

/// mdspeak - Markdown to speech text converter.
#[derive(Parser)]
#[command(name = "mdspeak", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single Markdown file to plain text.
    ConvertFile(ConvertFileArgs),
    /// Convert all Markdown files under a directory.
    ConvertDirectory(ConvertDirectoryArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = match &cli.command {
        Commands::ConvertFile(args) => args.verbose,
        Commands::ConvertDirectory(args) => args.verbose,
    };
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::ConvertFile(args) => args.execute(),
        Commands::ConvertDirectory(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
