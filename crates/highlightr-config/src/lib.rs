#![warn(missing_docs)]
//! `highlightr-config` - data-driven highlighter configuration for `highlightr-core`.
//!
//! This crate intentionally stays lightweight and does **not** depend on the toggle/strip
//! engine. It provides the small structs a host needs to describe what markup to toggle
//! ([`MarkupTemplate`]), which colors are on offer ([`Highlighter`]), and how the whole palette
//! is persisted ([`Settings`]).

mod settings;

pub use settings::{ConfigError, Highlighter, HighlighterMethod, HighlighterStyle, Settings};

/// Closing tag used by every highlight template.
pub const HIGHLIGHT_CLOSE_TAG: &str = "</mark>";

/// An inline wrapper (prefix/suffix pair) that can be toggled around a selection.
///
/// `suffix` falls back to `prefix` when unset, which supports symmetric markers such as `==`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkupTemplate {
    /// Opening text inserted before the selection.
    pub prefix: String,
    /// Closing text inserted after the selection (`None` => same as `prefix`).
    pub suffix: Option<String>,
    /// Number of lines the wrapper may straddle when looking for an existing wrapper.
    ///
    /// Highlights always use `0`: the wrapper must share the selection's line.
    pub line_span: usize,
}

impl MarkupTemplate {
    /// Create a single-line template with distinct prefix and suffix.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: Some(suffix.into()),
            line_span: 0,
        }
    }

    /// Create a single-line template whose suffix is the prefix itself.
    pub fn symmetric(marker: impl Into<String>) -> Self {
        Self {
            prefix: marker.into(),
            suffix: None,
            line_span: 0,
        }
    }

    /// Create the inline-style highlight template for a CSS color value.
    ///
    /// ```rust
    /// use highlightr_config::MarkupTemplate;
    ///
    /// let t = MarkupTemplate::highlight("#ffab00");
    /// assert_eq!(t.prefix, "<mark style=\"background: #ffab00;\">");
    /// assert_eq!(t.suffix(), "</mark>");
    /// ```
    pub fn highlight(color: &str) -> Self {
        Self::new(
            format!("<mark style=\"background: {color};\">"),
            HIGHLIGHT_CLOSE_TAG,
        )
    }

    /// Set the line span used when looking for an existing wrapper.
    pub fn with_line_span(mut self, line_span: usize) -> Self {
        self.line_span = line_span;
        self
    }

    /// Effective suffix (the prefix when no suffix, or an empty one, is configured).
    pub fn suffix(&self) -> &str {
        self.suffix
            .as_deref()
            .filter(|suffix| !suffix.is_empty())
            .unwrap_or(&self.prefix)
    }

    /// Prefix length in characters.
    pub fn prefix_len(&self) -> usize {
        self.prefix.chars().count()
    }

    /// Effective suffix length in characters.
    pub fn suffix_len(&self) -> usize {
        self.suffix().chars().count()
    }

    /// Returns `true` if the template can be applied (non-empty prefix).
    pub fn is_well_formed(&self) -> bool {
        !self.prefix.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_defaults_to_prefix() {
        let t = MarkupTemplate::symmetric("==");
        assert_eq!(t.suffix(), "==");
        assert_eq!(t.suffix_len(), 2);
    }

    #[test]
    fn test_empty_suffix_falls_back_to_prefix() {
        let t = MarkupTemplate::new("[", "");
        assert_eq!(t.suffix(), "[");
        assert_eq!(t.suffix_len(), 1);
    }

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        let t = MarkupTemplate::new("«", "»");
        assert_eq!(t.prefix_len(), 1);
        assert_eq!(t.suffix_len(), 1);
    }

    #[test]
    fn test_empty_prefix_is_malformed() {
        assert!(!MarkupTemplate::new("", "</mark>").is_well_formed());
        assert!(MarkupTemplate::highlight("red").is_well_formed());
    }
}
