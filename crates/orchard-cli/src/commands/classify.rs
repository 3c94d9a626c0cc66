use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use orchard_core::input::SelectedFile;
use orchard_core::session::Session;
use rayon::prelude::*;

use super::{bootstrap, load_config};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Images to classify
    #[arg(required = true)]
    pub images: Vec<PathBuf>,
}

pub fn run(args: &ClassifyArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let session = bootstrap(&config)?;
    tracing::info!("Classifying {} images", args.images.len());

    let pb = ProgressBar::new(args.images.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Detecting");

    // Every image gets its own copy of the bootstrapped session; the model
    // itself is shared.
    let results: Vec<(&PathBuf, Result<Session>)> = args
        .images
        .par_iter()
        .map(|path| {
            let result = classify_one(session.clone(), path);
            pb.inc(1);
            (path, result)
        })
        .collect();
    pb.finish_and_clear();

    let mut failures = 0;
    for (path, result) in results {
        match result {
            Ok(done) => crate::summary::print_detection(path, &done),
            Err(e) => {
                failures += 1;
                crate::summary::print_failure(path, &e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} images failed", args.images.len());
    }
    Ok(())
}

fn classify_one(mut session: Session, path: &Path) -> Result<Session> {
    let file = SelectedFile::from_path(path)?;
    session.select_file(&file)?;
    session
        .detect()
        .with_context(|| format!("Detection failed for {}", path.display()))?;
    Ok(session)
}
