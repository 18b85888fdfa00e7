//! Literal-versus-address classification.
//!
//! Prose often contains periods and spaces; a real address never contains a
//! space. A candidate is treated as literal text when its first segment is
//! not a root key and no dot appears before the first space. This is a
//! shape heuristic, so prose that starts with a root key followed directly
//! by a period (`"intro. Then..."`) is still taken as an address.

use multiverse_types::ContentTree;

/// Whether `address` should be emitted verbatim instead of looked up
pub fn is_literal(address: &str, tree: &ContentTree) -> bool {
    let root_key = address.split('.').next().unwrap_or_default();
    let no_match = !tree.contains_key(root_key);

    let space_first = match (address.find(' '), address.find('.')) {
        (Some(space), Some(dot)) => space < dot,
        _ => true,
    };

    no_match && space_first
}
