//! # multiverse CLI
//!
//! Command-line interface for rendering multiverse content trees.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "multiverse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (optional)
    #[arg(long, default_value = "multiverse.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the readable HTML document from a JSON data file
    Build {
        /// Source data file (.json)
        input: PathBuf,

        /// Compilation mode (defaults to the configured mode)
        mode: Option<String>,
    },

    /// List the compilation modes of a data file
    Modes {
        /// Source data file (.json)
        input: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Expand a single address or pointer and print the result
    Expand {
        /// Source data file (.json)
        input: PathBuf,

        /// Address (`chapters.one`) or pointer (`refer@chapters.one #id`)
        address: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Build { input, mode } => {
            commands::build_document(&cli.config, &input, mode.as_deref()).map(|_| ())
        }
        Commands::Modes { input, json } => commands::list_modes(&input, json),
        Commands::Expand { input, address } => {
            commands::expand_address(&cli.config, &input, &address)
        }
    }
}
