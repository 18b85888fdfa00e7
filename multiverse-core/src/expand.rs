//! Recursive fragment expansion.
//!
//! Expansion turns a content string into output text:
//!
//! 1. The string is split into an address and annotations ([`parse_fragment`]).
//! 2. Literal-looking addresses are returned as the original string.
//! 3. Otherwise the address is resolved and its entries are concatenated,
//!    expanding marked entries recursively.
//! 4. Annotated pointers are wrapped in an inline `<span>` carrying the
//!    expanded attributes.

use crate::attributes::expand_attributes;
use crate::classify::is_literal;
use crate::config::ExpandConfig;
use crate::error::ExpandError;
use crate::pointer::{is_pointer, parse_fragment};
use crate::resolve::Resolver;
use multiverse_types::ContentTree;

/// Expands content strings against a borrowed content tree
#[derive(Debug, Clone, Copy)]
pub struct Expander<'t> {
    resolver: Resolver<'t>,
    max_depth: usize,
}

impl<'t> Expander<'t> {
    pub fn new(tree: &'t ContentTree) -> Self {
        Self::with_config(tree, &ExpandConfig::default())
    }

    pub fn with_config(tree: &'t ContentTree, config: &ExpandConfig) -> Self {
        Self {
            resolver: Resolver::with_policy(tree, config.path_policy),
            max_depth: config.max_depth,
        }
    }

    /// Fully expand a pointer token, address, or literal string
    pub fn expand(&self, input: &str) -> Result<String, ExpandError> {
        self.expand_at(input, 0)
    }

    fn expand_at(&self, input: &str, depth: usize) -> Result<String, ExpandError> {
        let fragment = parse_fragment(input);
        let address = fragment.address();

        let attributes = if fragment.annotations().is_empty() {
            None
        } else {
            expand_attributes(fragment.annotations())
        };

        if is_literal(address, self.resolver.tree()) {
            return Ok(input.to_string());
        }

        if depth > self.max_depth {
            return Err(ExpandError::DepthExceeded {
                address: address.to_string(),
                limit: self.max_depth,
            });
        }

        let Some(entries) = self.resolver.resolve(address)? else {
            return Ok(String::new());
        };
        tracing::debug!(address, entries = entries.len(), depth, "Resolved address");

        let mut body = String::new();
        for entry in entries {
            if is_pointer(entry) {
                body.push_str(&self.expand_at(entry, depth + 1)?);
            } else {
                body.push_str(entry);
            }
        }

        Ok(match attributes {
            Some(attributes) => format!("<span {attributes}>{body}</span>"),
            None => body,
        })
    }
}
