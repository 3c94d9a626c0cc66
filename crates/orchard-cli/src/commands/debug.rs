use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use orchard_core::input::SelectedFile;

use super::{bootstrap, load_config};

#[derive(Args)]
pub struct DebugArgs {
    /// Image to run the model on
    pub image: PathBuf,

    /// Print predictions as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &DebugArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut session = bootstrap(&config)?;

    let file = SelectedFile::from_path(&args.image)?;
    session
        .select_file(&file)
        .with_context(|| format!("Cannot use {}", args.image.display()))?;

    let Some(result) = session.debug_predictions() else {
        anyhow::bail!("No model or preview available");
    };
    let predictions = result.context("Model call failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&predictions)?);
    } else {
        crate::summary::print_predictions(&file.name, &predictions);
    }
    Ok(())
}
