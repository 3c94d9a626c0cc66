use std::path::Path;

use anyhow::Result;

use super::{bootstrap, load_config};

pub fn run(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let session = bootstrap(&config)?;
    crate::summary::print_labels(&session);
    Ok(())
}
