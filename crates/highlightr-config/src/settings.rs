//! Persisted highlighter settings.
//!
//! The on-disk format is a JSON object using camelCase keys. Every field is optional: a partial
//! document is merged over [`Settings::default`], so older or hand-edited files keep working.

use crate::MarkupTemplate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while loading, saving or validating [`Settings`].
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    /// JSON (de)serialization failed.
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("highlighter at index {0} has an empty color name")]
    /// A highlighter has no name, so no command id can be derived from it.
    EmptyColorName(usize),

    #[error("highlighter '{0}' has an empty color value")]
    /// A highlighter has no CSS value to put in its template.
    EmptyColorValue(String),

    #[error("duplicate highlighter '{0}'")]
    /// Two highlighters share a name (command ids must be unique).
    DuplicateColor(String),
}

/// One entry of the highlighter palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlighter {
    /// Display name, also used as the toggle command id (e.g. `Yellow`).
    pub color: String,
    /// CSS color value written into the markup (e.g. `#FFF3A3A6`).
    pub value: String,
}

impl Highlighter {
    /// Create a palette entry.
    pub fn new(color: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            value: value.into(),
        }
    }

    /// Markup template that toggles this highlighter.
    pub fn template(&self) -> MarkupTemplate {
        MarkupTemplate::highlight(&self.value)
    }
}

/// Visual style variant applied to rendered highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlighterStyle {
    /// Plain background.
    #[default]
    None,
    /// Lower half of the line only.
    Lowlight,
    /// Offset background.
    Floating,
    /// Rounded corners.
    Rounded,
    /// Hand-drawn marker look.
    Realistic,
}

impl HighlighterStyle {
    const VARIANTS: [(HighlighterStyle, &'static str); 4] = [
        (HighlighterStyle::Lowlight, "highlightr-lowlight"),
        (HighlighterStyle::Floating, "highlightr-floating"),
        (HighlighterStyle::Rounded, "highlightr-rounded"),
        (HighlighterStyle::Realistic, "highlightr-realistic"),
    ];

    /// Body CSS classes and whether each should be enabled for this style.
    ///
    /// Exactly one class is on for every style except [`HighlighterStyle::None`].
    pub fn body_classes(self) -> [(&'static str, bool); 4] {
        Self::VARIANTS.map(|(style, class)| (class, style == self))
    }
}

/// How highlights are rendered in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlighterMethod {
    /// Markup references CSS classes.
    CssClasses,
    /// Markup carries an inline `style` attribute.
    #[default]
    InlineStyles,
}

/// Complete persisted configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Visual style variant.
    pub highlighter_style: HighlighterStyle,
    /// Rendering method.
    pub highlighter_methods: HighlighterMethod,
    /// Palette, in menu/command order.
    pub highlighters: Vec<Highlighter>,
}

impl Default for Settings {
    fn default() -> Self {
        let highlighters = [
            ("Pink", "#FFB8EBA6"),
            ("Red", "#FF5582A6"),
            ("Orange", "#FFB86CA6"),
            ("Yellow", "#FFF3A3A6"),
            ("Green", "#BBFABBA6"),
            ("Cyan", "#ABF7F7A6"),
            ("Blue", "#ADCCFFA6"),
            ("Purple", "#D2B3FFA6"),
            ("Grey", "#CACFD9A6"),
        ]
        .into_iter()
        .map(|(color, value)| Highlighter::new(color, value))
        .collect();

        Self {
            highlighter_style: HighlighterStyle::default(),
            highlighter_methods: HighlighterMethod::default(),
            highlighters,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling absent fields from the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Write settings to `path` as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Check that every highlighter can be turned into a uniquely named command.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, highlighter) in self.highlighters.iter().enumerate() {
            if highlighter.color.trim().is_empty() {
                return Err(ConfigError::EmptyColorName(index));
            }
            if highlighter.value.trim().is_empty() {
                return Err(ConfigError::EmptyColorValue(highlighter.color.clone()));
            }
            if !seen.insert(highlighter.color.as_str()) {
                return Err(ConfigError::DuplicateColor(highlighter.color.clone()));
            }
        }
        Ok(())
    }

    /// Find a highlighter by name.
    pub fn find(&self, color: &str) -> Option<&Highlighter> {
        self.highlighters.iter().find(|h| h.color == color)
    }
}
