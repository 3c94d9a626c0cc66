mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orchard", about = "Fruit image classifier")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML config file (model location, input layout)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the model and list the labels it reports
    Labels,
    /// Detect the fruit in one or more images
    Classify(commands::classify::ClassifyArgs),
    /// Print the raw prediction sequence for an image
    Debug(commands::debug::DebugArgs),
    /// Print or save the default config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Labels => commands::labels::run(config_path),
        Commands::Classify(args) => commands::classify::run(args, config_path),
        Commands::Debug(args) => commands::debug::run(args, config_path),
        Commands::Config(args) => commands::config::run(args),
    }
}
