//! Cloud Resource Analyzer CLI
//!
//! A command-line driver for the analysis pipeline: reads a JSON resource
//! document, validates it, and prints the analysis report. Also exposes the
//! assistant helpers (template, greeting, rating responses) and a built-in
//! demo dataset.

mod commands;
mod config;
mod output;
mod sample;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Cloud Resource Analyzer CLI
#[derive(Parser)]
#[command(name = "cra")]
#[command(author, version, about = "CLI for the Cloud Resource Analyzer", long_about = None)]
pub struct Cli {
    /// Output format for metrics (falls back to the config file default)
    #[arg(long, short, global = true, env = "CRA_FORMAT")]
    pub format: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a JSON resource document and print the report
    Analyze {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Validate a document and print the derived metrics
    Metrics {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Run the analysis over the built-in sample dataset
    Demo,

    /// Print the JSON input template
    Template,

    /// Respond to a free-text greeting
    Greet {
        /// The user message
        message: String,
    },

    /// Respond to a 1-5 analysis rating
    Rate {
        /// The rating value
        rating: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Verbose mode widens the filter unless RUST_LOG overrides it
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::load()?;
    let format = cli
        .format
        .or_else(|| config.default_format())
        .unwrap_or_default();

    match cli.command {
        Commands::Analyze { file } => commands::analyze::run(file.as_deref()),
        Commands::Metrics { file } => commands::analyze::metrics(file.as_deref(), format),
        Commands::Demo => commands::analyze::demo(),
        Commands::Template => {
            println!("{}", analyzer_lib::assistant::input_template());
            Ok(())
        }
        Commands::Greet { message } => {
            println!("{}", analyzer_lib::assistant::greet(&message));
            Ok(())
        }
        Commands::Rate { rating } => {
            println!("{}", analyzer_lib::assistant::feedback_response(rating));
            Ok(())
        }
    }
}
