//! Expansion of shorthand annotation tokens into markup attributes.
//!
//! `#intro` becomes `id="intro"`, `.lead` joins the `class` list, and any
//! other token is passed through verbatim:
//!
//! ```
//! use multiverse_core::expand_attributes;
//!
//! let attrs = expand_attributes(&["#intro", ".lead", ".wide", "hidden"]);
//! assert_eq!(attrs.as_deref(), Some(r#"id="intro" class="lead wide" hidden"#));
//! assert_eq!(expand_attributes::<&str>(&[]), None);
//! ```

/// Annotation tokens sorted into their attribute roles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes<'a> {
    /// Element id; the last `#` token wins
    pub id: Option<&'a str>,
    /// Class names in first-appearance order, without duplicates
    pub classes: Vec<&'a str>,
    /// Raw tokens in encounter order
    pub other: Vec<&'a str>,
}

impl<'a> Attributes<'a> {
    pub fn from_tokens<S: AsRef<str>>(tokens: &'a [S]) -> Self {
        let mut attributes = Attributes::default();

        for token in tokens {
            let token = token.as_ref();
            if let Some(id) = token.strip_prefix('#') {
                attributes.id = Some(id);
            } else if let Some(class) = token.strip_prefix('.') {
                if !attributes.classes.contains(&class) {
                    attributes.classes.push(class);
                }
            } else {
                attributes.other.push(token);
            }
        }

        attributes
    }

    /// Render as an attribute string, or `None` when nothing remains after
    /// trimming
    pub fn render(&self) -> Option<String> {
        let mut rendered = String::new();

        if let Some(id) = self.id {
            rendered.push_str(&format!(" id=\"{id}\""));
        }
        if !self.classes.is_empty() {
            rendered.push_str(&format!(" class=\"{}\"", self.classes.join(" ")));
        }
        if !self.other.is_empty() {
            rendered.push(' ');
            rendered.push_str(&self.other.join(" "));
        }

        let trimmed = rendered.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Expand annotation tokens straight into an attribute string
pub fn expand_attributes<S: AsRef<str>>(tokens: &[S]) -> Option<String> {
    Attributes::from_tokens(tokens).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_last_wins() {
        assert_eq!(
            expand_attributes(&["#first", "#second"]).as_deref(),
            Some(r#"id="second""#)
        );
    }

    #[test]
    fn test_classes_deduplicated_in_order() {
        assert_eq!(
            expand_attributes(&[".b", ".a", ".b", ".c", ".a"]).as_deref(),
            Some(r#"class="b a c""#)
        );
    }

    #[test]
    fn test_fixed_segment_order() {
        // Raw tokens always come last, whatever order they were written in
        assert_eq!(
            expand_attributes(&["data-x=1", ".note", "#n1", "hidden"]).as_deref(),
            Some(r#"id="n1" class="note" data-x=1 hidden"#)
        );
    }

    #[test]
    fn test_raw_tokens_not_escaped() {
        assert_eq!(
            expand_attributes(&[r#"title="a<b""#]).as_deref(),
            Some(r#"title="a<b""#)
        );
    }

    #[test]
    fn test_empty_and_blank_tokens() {
        assert_eq!(expand_attributes::<&str>(&[]), None);
        assert_eq!(expand_attributes(&[""]), None);
        assert_eq!(expand_attributes(&["", ""]), None);
    }

    #[test]
    fn test_empty_tokens_keep_spacing() {
        // Consecutive spaces in a pointer produce empty raw tokens
        assert_eq!(
            expand_attributes(&["", "hidden"]).as_deref(),
            Some("hidden")
        );
        assert_eq!(
            expand_attributes(&["#x", "", "hidden"]).as_deref(),
            Some(r#"id="x"  hidden"#)
        );
    }

    #[test]
    fn test_bare_prefixes() {
        assert_eq!(expand_attributes(&["#"]).as_deref(), Some(r#"id="""#));
        assert_eq!(expand_attributes(&["."]).as_deref(), Some(r#"class="""#));
    }
}
