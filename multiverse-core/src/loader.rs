//! Loading data files and naming the generated documents.

use multiverse_types::SourceDocument;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read and parse a JSON data file
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<SourceDocument, LoadError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    parse_document(&contents)
}

/// Parse a JSON data file already in memory
pub fn parse_document(contents: &str) -> Result<SourceDocument, LoadError> {
    Ok(serde_json::from_str(contents)?)
}

/// File name of the document generated from `input` in `mode`
///
/// A `.json` input drops its extension and every remaining dot, then gets
/// `_<mode>.html`; any other name keeps the full file name.
///
/// ```
/// use multiverse_core::output_file_name;
/// use std::path::Path;
///
/// assert_eq!(output_file_name(Path::new("data/essay.json"), "default"), "essay_default.html");
/// assert_eq!(output_file_name(Path::new("notes.v2.json"), "web"), "notesv2_web.html");
/// assert_eq!(output_file_name(Path::new("essay.txt"), "web"), "essay.txt_web.html");
/// ```
pub fn output_file_name(input: &Path, mode: &str) -> String {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = match file_name.rsplit_once('.') {
        Some((rest, "json")) => rest.replace('.', ""),
        _ => file_name.clone(),
    };

    format!("{stem}_{mode}.html")
}

/// Full output path: `output_dir` when given, else next to the input
pub fn output_path(input: &Path, mode: &str, output_dir: Option<&Path>) -> PathBuf {
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(output_file_name(input, mode))
}
