//! Build command implementation.

use anyhow::{Context, Result};
use multiverse_core::{load_document, output_path, Assembler, Config};
use std::fs;
use std::path::{Path, PathBuf};

/// Assemble the document for a mode and write it to disk, returning the
/// path written
pub fn build_document(config_path: &Path, input: &Path, mode: Option<&str>) -> Result<PathBuf> {
    tracing::debug!("Loading config from {:?}", config_path);
    let config = Config::load_or_default(config_path).context("Failed to load configuration")?;
    let mode = mode.unwrap_or(config.mode.as_str());

    tracing::info!("Reading content from {:?}", input);
    let document = load_document(input)
        .with_context(|| format!("Failed to load data file {}", input.display()))?;

    // Assemble fully before touching the output file
    let html = Assembler::from_document(&document)
        .with_config(config.expand.clone())
        .assemble(mode)
        .context("Failed to assemble document")?;

    let output_dir = config.output_dir();
    if let Some(dir) = &output_dir {
        fs::create_dir_all(dir).context("Failed to create output directory")?;
    }

    let output = output_path(input, mode, output_dir.as_deref());
    fs::write(&output, html).with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!("✓ Output written to {:?}", output);
    println!(
        "Content successfully built! Everything from the {} source data file has been written \
         into the more readable {} file, which you can now open in any web browser.",
        input.display(),
        output.display()
    );

    Ok(output)
}
