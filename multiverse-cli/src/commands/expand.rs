//! Expand command implementation.

use anyhow::{Context, Result};
use multiverse_core::{load_document, Config, Expander};
use std::path::Path;

/// Expand one address or pointer token and print it to stdout
pub fn expand_address(config_path: &Path, input: &Path, address: &str) -> Result<()> {
    let config = Config::load_or_default(config_path).context("Failed to load configuration")?;
    let document = load_document(input)
        .with_context(|| format!("Failed to load data file {}", input.display()))?;

    let expanded = Expander::with_config(&document.root, &config.expand)
        .expand(address)
        .with_context(|| format!("Failed to expand '{address}'"))?;

    println!("{expanded}");
    Ok(())
}
