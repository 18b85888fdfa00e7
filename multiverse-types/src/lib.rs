//! Shared types for multiverse
//!
//! This crate provides the content model used across the multiverse
//! workspace: the content tree and the metadata block that names the
//! compilation sequences.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Prefix that marks a list entry as a pointer to another fragment
pub const POINTER_MARKER: &str = "refer@";

/// A node in the content tree
///
/// Deserialized untagged from JSON: strings become leaves, arrays of strings
/// become lists, objects become mappings. Anything else is kept as an opaque
/// value so that unreferenced parts of a tree never block loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(String),
    List(Vec<String>),
    Mapping(HashMap<String, Node>),
    Opaque(serde_json::Value),
}

impl Node {
    /// Short name of the node variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Leaf(_) => "leaf",
            Node::List(_) => "list",
            Node::Mapping(_) => "mapping",
            Node::Opaque(_) => "opaque value",
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Leaf(text.to_string())
    }
}

/// Root of a content tree; always a mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTree {
    root: HashMap<String, Node>,
}

impl ContentTree {
    pub fn root(&self) -> &HashMap<String, Node> {
        &self.root
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.root.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl FromIterator<(String, Node)> for ContentTree {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Self {
            root: iter.into_iter().collect(),
        }
    }
}

/// Document-level metadata: compilation sequences and the instructions text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Compilation sequences keyed by mode name
    pub versions: HashMap<String, Vec<String>>,

    /// Trailing reader instructions, appended to every document
    pub instructions: String,
}

impl Metadata {
    /// Compilation sequence for a mode
    pub fn sequence(&self, mode: &str) -> Option<&[String]> {
        self.versions.get(mode).map(Vec::as_slice)
    }

    /// Available mode names, sorted
    pub fn modes(&self) -> Vec<&str> {
        let mut modes: Vec<&str> = self.versions.keys().map(String::as_str).collect();
        modes.sort_unstable();
        modes
    }
}

/// A loaded data file: metadata plus content tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub metadata: Metadata,
    pub root: ContentTree,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_variants_from_json() {
        let tree: ContentTree = serde_json::from_value(json!({
            "title": "Hello",
            "body": ["one", "refer@title"],
            "nested": { "inner": "x" },
            "count": 3,
            "mixed": ["a", 1],
        }))
        .unwrap();

        assert_eq!(tree.get("title"), Some(&Node::Leaf("Hello".into())));
        assert_eq!(
            tree.get("body"),
            Some(&Node::List(vec!["one".into(), "refer@title".into()]))
        );
        assert_eq!(tree.get("nested").map(Node::kind), Some("mapping"));
        assert_eq!(tree.get("count").map(Node::kind), Some("opaque value"));
        assert_eq!(tree.get("mixed").map(Node::kind), Some("opaque value"));
    }

    #[test]
    fn test_metadata_modes_sorted() {
        let metadata: Metadata = serde_json::from_value(json!({
            "versions": { "short": ["a"], "default": ["a", "b"] },
            "instructions": "Read me",
            "author": "ignored",
        }))
        .unwrap();

        assert_eq!(metadata.modes(), vec!["default", "short"]);
        assert_eq!(metadata.sequence("default").map(<[String]>::len), Some(2));
        assert!(metadata.sequence("missing").is_none());
    }
}
