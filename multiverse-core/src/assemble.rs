//! Document assembly: expands a compilation sequence into one document.

use crate::config::ExpandConfig;
use crate::error::ExpandError;
use crate::expand::Expander;
use multiverse_types::{ContentTree, Metadata, SourceDocument};

/// Class of the container wrapping the instructions block
pub const INSTRUCTIONS_CLASS: &str = "multiverse-instructions";

/// Wrap the instructions text in its container element
pub fn instructions_block(instructions: &str) -> String {
    format!("<div class=\"{INSTRUCTIONS_CLASS}\">{instructions}</div>")
}

/// Assembles the document for a compilation mode
pub struct Assembler<'d> {
    tree: &'d ContentTree,
    metadata: &'d Metadata,
    config: ExpandConfig,
}

impl<'d> Assembler<'d> {
    pub fn new(tree: &'d ContentTree, metadata: &'d Metadata) -> Self {
        Self {
            tree,
            metadata,
            config: ExpandConfig::default(),
        }
    }

    pub fn from_document(document: &'d SourceDocument) -> Self {
        Self::new(&document.root, &document.metadata)
    }

    pub fn with_config(mut self, config: ExpandConfig) -> Self {
        self.config = config;
        self
    }

    /// Expand every address of the mode's sequence, in order, then append the
    /// instructions block
    ///
    /// The first failure aborts the whole document. The result is trimmed of
    /// surrounding whitespace.
    pub fn assemble(&self, mode: &str) -> Result<String, ExpandError> {
        let sequence = self
            .metadata
            .sequence(mode)
            .ok_or_else(|| ExpandError::UnknownMode(mode.to_string()))?;

        tracing::info!("Assembling mode '{}' ({} entries)", mode, sequence.len());

        let expander = Expander::with_config(self.tree, &self.config);
        let mut document = String::new();
        for address in sequence {
            document.push_str(&expander.expand(address)?);
        }
        document.push_str(&instructions_block(&self.metadata.instructions));

        Ok(document.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> SourceDocument {
        serde_json::from_value(json!({
            "metadata": {
                "versions": {
                    "default": ["title", "body.intro", "Plain text. Kept as is"],
                    "short": ["body.intro", "title"],
                    "broken": ["title", "body.missing"],
                },
                "instructions": "Read me",
            },
            "root": {
                "title": "<h1>T</h1>",
                "body": { "intro": ["<p>", "refer@title .inline", "</p>"] },
            },
        }))
        .unwrap()
    }

    #[test]
    fn test_sequence_order_and_instructions() {
        let doc = document();
        let html = Assembler::from_document(&doc).assemble("default").unwrap();

        assert_eq!(
            html,
            concat!(
                "<h1>T</h1>",
                "<p><span class=\"inline\"><h1>T</h1></span></p>",
                "Plain text. Kept as is",
                "<div class=\"multiverse-instructions\">Read me</div>",
            )
        );
    }

    #[test]
    fn test_modes_reorder() {
        let doc = document();
        let html = Assembler::from_document(&doc).assemble("short").unwrap();
        assert!(html.starts_with("<p><span class=\"inline\"><h1>T</h1></span></p><h1>T</h1>"));
    }

    #[test]
    fn test_unknown_mode() {
        let doc = document();
        assert_eq!(
            Assembler::from_document(&doc).assemble("print"),
            Err(ExpandError::UnknownMode("print".into()))
        );
    }

    #[test]
    fn test_failure_aborts_document() {
        let doc = document();
        assert!(matches!(
            Assembler::from_document(&doc).assemble("broken"),
            Err(ExpandError::UnresolvedAddress { .. })
        ));
    }

    #[test]
    fn test_output_trimmed() {
        let doc: SourceDocument = serde_json::from_value(json!({
            "metadata": { "versions": { "default": ["lead"] }, "instructions": "" },
            "root": { "lead": "\n  text" },
        }))
        .unwrap();

        assert_eq!(
            Assembler::from_document(&doc).assemble("default").unwrap(),
            "text<div class=\"multiverse-instructions\"></div>"
        );
    }
}
