//! Resolution and assembly errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("Unknown compilation mode: {0}")]
    UnknownMode(String),

    #[error("Unresolved address '{address}': no key '{segment}'")]
    UnresolvedAddress { address: String, segment: String },

    #[error("Cannot look up '{segment}' in a {found} while resolving '{address}'")]
    PathMismatch {
        address: String,
        segment: String,
        found: &'static str,
    },

    #[error("Address '{address}' points to a {found}, not text")]
    NotContent { address: String, found: &'static str },

    #[error("Expanding '{address}' exceeded the maximum depth of {limit}")]
    DepthExceeded { address: String, limit: usize },
}
