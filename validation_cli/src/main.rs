mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fve")]
#[command(version, about = "Field Validation Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a data file against a rules file
    Validate {
        /// Path to the rules file (YAML or TOML)
        rules: String,

        /// Path to the data file (JSON object)
        data: String,

        /// Treat input fields without declared rules as errors
        #[arg(short, long)]
        strict: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a rules file without validating data
    Check {
        /// Path to the rules file (YAML or TOML)
        rules: String,
    },

    /// Write a starter rules file
    Init {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            rules,
            data,
            strict,
            format,
        } => commands::validate::execute(&rules, &data, strict, &format),

        Commands::Check { rules } => commands::check::execute(&rules),

        Commands::Init { output } => commands::init::execute(output.as_deref()),
    }
}
