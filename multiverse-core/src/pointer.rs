//! Pointer token recognition for `refer@address #id .class raw` syntax.

use multiverse_types::POINTER_MARKER;

/// A content string split into its address and annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Marked pointer: `refer@` followed by an address and annotations
    Pointer {
        address: &'a str,
        annotations: Vec<&'a str>,
    },
    /// Unmarked string; the whole string is the candidate address
    Literal(&'a str),
}

impl<'a> Fragment<'a> {
    pub fn address(&self) -> &'a str {
        match self {
            Fragment::Pointer { address, .. } => *address,
            Fragment::Literal(text) => *text,
        }
    }

    pub fn annotations(&self) -> &[&'a str] {
        match self {
            Fragment::Pointer { annotations, .. } => annotations.as_slice(),
            Fragment::Literal(_) => &[],
        }
    }
}

/// Whether a list entry carries the pointer marker
pub fn is_pointer(entry: &str) -> bool {
    entry.starts_with(POINTER_MARKER)
}

/// Split a content string into address and annotation tokens
///
/// Fields are separated by single spaces, so consecutive spaces yield empty
/// annotation tokens.
pub fn parse_fragment(input: &str) -> Fragment<'_> {
    match input.strip_prefix(POINTER_MARKER) {
        Some(rest) => {
            let mut fields = rest.split(' ');
            let address = fields.next().unwrap_or_default();
            Fragment::Pointer {
                address,
                annotations: fields.collect(),
            }
        }
        None => Fragment::Literal(input),
    }
}
