//! Modes command implementation.

use anyhow::{Context, Result};
use multiverse_core::load_document;
use serde_json::json;
use std::path::Path;

/// Print the compilation modes of a data file with their sequence lengths
pub fn list_modes(input: &Path, json: bool) -> Result<()> {
    let document = load_document(input)
        .with_context(|| format!("Failed to load data file {}", input.display()))?;
    let metadata = &document.metadata;

    if json {
        let modes: Vec<_> = metadata
            .modes()
            .into_iter()
            .map(|mode| {
                json!({
                    "mode": mode,
                    "entries": metadata.sequence(mode).map(<[String]>::len).unwrap_or(0),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&modes)?);
        return Ok(());
    }

    if metadata.versions.is_empty() {
        println!("No compilation modes defined");
        return Ok(());
    }

    for mode in metadata.modes() {
        let entries = metadata.sequence(mode).map(<[String]>::len).unwrap_or(0);
        println!("{mode}\t{entries} entries");
    }

    Ok(())
}
