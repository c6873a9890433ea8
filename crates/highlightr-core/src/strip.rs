//! Markup stripping.
//!
//! [`StripEngine`] removes every opening and closing tag of one markup family from a span of
//! text, leaving the content between the tags untouched. It is a flat, regex-based removal:
//! tags are not balanced, so nested or malformed markup is handled on a best-effort basis.

use crate::MarkupError;
use regex::Regex;

/// Opening-tag prefix of the highlight family.
pub const HIGHLIGHT_OPEN_TAG_PREFIX: &str = "<mark style";

/// Removes all tags of one markup family.
#[derive(Debug, Clone)]
pub struct StripEngine {
    open: Regex,
    close: Regex,
}

impl StripEngine {
    /// Build an engine for tags that start with `open_tag_prefix` and close with `close_tag`.
    ///
    /// An opening tag is `open_tag_prefix`, then the shortest run of characters (not crossing a
    /// line break) that ends in a non-`>` character followed by `>`.
    pub fn new(open_tag_prefix: &str, close_tag: &str) -> Result<Self, MarkupError> {
        if open_tag_prefix.is_empty() || close_tag.is_empty() {
            return Err(MarkupError::EmptyTag);
        }
        let open = Regex::new(&format!("{}.*?[^>]>", regex::escape(open_tag_prefix)))?;
        let close = Regex::new(&regex::escape(close_tag))?;
        Ok(Self { open, close })
    }

    /// Engine for inline-style highlights (`<mark style=...>` / `</mark>`).
    pub fn highlight() -> Result<Self, MarkupError> {
        Self::new(HIGHLIGHT_OPEN_TAG_PREFIX, highlightr_config::HIGHLIGHT_CLOSE_TAG)
    }

    /// Returns `true` if `text` contains an opening or closing tag.
    pub fn contains_markup(&self, text: &str) -> bool {
        self.open.is_match(text) || self.close.is_match(text)
    }

    /// Remove every opening and closing tag from `text`.
    ///
    /// Each sweep removes all non-overlapping opening tags left to right, then all closing tags.
    /// Removing a tag can splice a new one together (`<</mark>/mark>`), so sweeps repeat until
    /// nothing matches; this makes `strip` idempotent. This intentionally differs from a single
    /// pass: `<mark</mark> style="x">y` strips to `y`, not `<mark style="x">y`.
    ///
    /// ```rust
    /// use highlightr_core::StripEngine;
    ///
    /// let engine = StripEngine::highlight().unwrap();
    /// assert_eq!(
    ///     engine.strip(r#"<mark style="background: #fff;">a</mark> b"#),
    ///     "a b"
    /// );
    /// ```
    pub fn strip(&self, text: &str) -> String {
        let mut out = text.to_string();
        while self.contains_markup(&out) {
            let without_open = self.open.replace_all(&out, "").into_owned();
            out = self.close.replace_all(&without_open, "").into_owned();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tag_spanning_lines_is_kept() {
        let engine = StripEngine::highlight().unwrap();
        assert_eq!(
            engine.strip("<mark style=\"a\nb\">x</mark>"),
            "<mark style=\"a\nb\">x"
        );
    }

    #[test]
    fn test_spliced_tags_are_removed() {
        let engine = StripEngine::highlight().unwrap();
        assert_eq!(engine.strip("<</mark>/mark>x"), "x");
        assert_eq!(engine.strip("<mark</mark> style=\"x\">y"), "y");
    }

    #[test]
    fn test_empty_tags_rejected() {
        assert!(matches!(
            StripEngine::new("", "</mark>"),
            Err(MarkupError::EmptyTag)
        ));
    }
}
