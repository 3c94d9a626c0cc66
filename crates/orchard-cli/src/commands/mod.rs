pub mod classify;
pub mod config;
pub mod debug;
pub mod labels;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use orchard_core::config::OrchardConfig;
use orchard_core::model::TractLoader;
use orchard_core::session::Session;

/// Defaults when no `--config` is given.
pub fn load_config(path: Option<&Path>) -> Result<OrchardConfig> {
    match path {
        Some(p) => OrchardConfig::load(p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => Ok(OrchardConfig::default()),
    }
}

/// Load the configured model into a fresh session, with a spinner while it
/// downloads.
pub fn bootstrap(config: &OrchardConfig) -> Result<Session> {
    let source = config.model.source();
    let loader = TractLoader::new(config.model.clone());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut session = Session::new();
    if let Some(busy) = session.busy() {
        pb.set_message(busy.to_string());
    }

    let result = session.initialize(&loader, &source);
    pb.finish_with_message(session.status().to_string());

    result.with_context(|| format!("Failed to load model from {}", source.model))?;
    Ok(session)
}
