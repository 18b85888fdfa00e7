//! Address resolution against the content tree.

use crate::config::PathPolicy;
use crate::error::ExpandError;
use multiverse_types::{ContentTree, Node};
use std::collections::HashMap;

/// Position of the walk: inside a mapping, or stuck on some other node
#[derive(Clone, Copy)]
enum Cursor<'t> {
    Mapping(&'t HashMap<String, Node>),
    Stale(&'t Node),
}

/// Walks dot-separated addresses through a borrowed content tree
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'t> {
    tree: &'t ContentTree,
    policy: PathPolicy,
}

impl<'t> Resolver<'t> {
    pub fn new(tree: &'t ContentTree) -> Self {
        Self {
            tree,
            policy: PathPolicy::default(),
        }
    }

    pub fn with_policy(tree: &'t ContentTree, policy: PathPolicy) -> Self {
        Self { tree, policy }
    }

    pub fn tree(&self) -> &'t ContentTree {
        self.tree
    }

    /// Resolve an address to its ordered entries
    ///
    /// A leaf becomes a one-element list. Returns `Ok(None)` only under
    /// [`PathPolicy::Lenient`], when the walk got stuck on a non-mapping and
    /// the fragment should produce no output.
    pub fn resolve(&self, address: &str) -> Result<Option<Vec<&'t str>>, ExpandError> {
        let (parents, last) = match address.rsplit_once('.') {
            Some((parents, last)) => (Some(parents), last),
            None => (None, address),
        };

        let mut cursor = Cursor::Mapping(self.tree.root());
        for segment in parents.into_iter().flat_map(|p| p.split('.')) {
            match cursor {
                Cursor::Mapping(children) => {
                    let child = children.get(segment).ok_or_else(|| {
                        ExpandError::UnresolvedAddress {
                            address: address.to_string(),
                            segment: segment.to_string(),
                        }
                    })?;
                    cursor = match child {
                        Node::Mapping(grandchildren) => Cursor::Mapping(grandchildren),
                        other => Cursor::Stale(other),
                    };
                }
                Cursor::Stale(node) => self.mismatch(address, segment, node)?,
            }
        }

        match cursor {
            Cursor::Mapping(children) => match children.get(last) {
                Some(Node::Leaf(text)) => Ok(Some(vec![text.as_str()])),
                Some(Node::List(entries)) => {
                    Ok(Some(entries.iter().map(String::as_str).collect()))
                }
                Some(other) => Err(ExpandError::NotContent {
                    address: address.to_string(),
                    found: other.kind(),
                }),
                None => Err(ExpandError::UnresolvedAddress {
                    address: address.to_string(),
                    segment: last.to_string(),
                }),
            },
            Cursor::Stale(node) => {
                self.mismatch(address, last, node)?;
                Ok(None)
            }
        }
    }

    fn mismatch(&self, address: &str, segment: &str, node: &Node) -> Result<(), ExpandError> {
        match self.policy {
            PathPolicy::Strict => Err(ExpandError::PathMismatch {
                address: address.to_string(),
                segment: segment.to_string(),
                found: node.kind(),
            }),
            PathPolicy::Lenient => {
                tracing::warn!(
                    "Cannot look up '{}' in a {} while resolving '{}'; skipping",
                    segment,
                    node.kind(),
                    address
                );
                Ok(())
            }
        }
    }
}
