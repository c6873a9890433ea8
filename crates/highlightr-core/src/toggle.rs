//! Toggle engine: wrap a selection in a markup template, or unwrap it if it is already wrapped.
//!
//! # Detection
//!
//! The engine only looks at two short windows of text next to the selection (the
//! *boundaries*): `prefix.len()` characters before the selection start and `suffix.len()`
//! characters after the selection end. A selection counts as already wrapped when
//!
//! 1. the text after it equals the suffix with trailing whitespace removed,
//! 2. the last character before it equals the last character of the prefix (leading whitespace
//!    trimmed), and
//! 3. it is non-empty.
//!
//! Rule 2 is deliberately a last-character check, not a full prefix comparison, so a selection
//! wrapped in a highlight of a *different* color is recognised and unwrapped too.
//!
//! # Cursor placement
//!
//! - Wrapping a non-empty selection moves the cursor past the inserted suffix and the space
//!   after it (`prefix + suffix + 1` characters further along the line).
//! - Wrapping an empty selection leaves the cursor between prefix and suffix.
//! - Unwrapping selects the restored text, so invoking the toggle again re-wraps it.
//!
//! Lengths and columns are counted in `char`s.

use crate::text::{Position, Range};
use highlightr_config::MarkupTemplate;

/// Everything the engine needs to decide and build one toggle.
#[derive(Debug, Clone, Copy)]
pub struct ToggleRequest<'a> {
    /// Exact selected text (empty for a collapsed cursor).
    pub selection_text: &'a str,
    /// Selected range.
    pub selection: Range,
    /// Text read from the `before` window of [`ToggleEngine::boundary_ranges`].
    pub boundary_before: &'a str,
    /// Text read from the `after` window of [`ToggleEngine::boundary_ranges`].
    pub boundary_after: &'a str,
    /// Markup to toggle. Must have a non-empty prefix.
    pub template: &'a MarkupTemplate,
}

/// Which way a toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Markup was inserted around the selection.
    Wrapped,
    /// Existing markup around the selection was removed.
    Unwrapped,
}

/// Replacement produced by [`ToggleEngine::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleResult {
    /// Text to write over `replaced_range`.
    pub new_text: String,
    /// Range of the buffer to replace.
    pub replaced_range: Range,
    /// Cursor position after the replacement is committed.
    pub new_cursor: Position,
    /// Selection to restore instead of a bare cursor, if any.
    pub new_selection: Option<Range>,
    /// Whether the selection was wrapped or unwrapped.
    pub action: ToggleAction,
}

/// Stateless wrap/unwrap engine.
pub struct ToggleEngine;

impl ToggleEngine {
    /// Windows the caller must read before calling [`ToggleEngine::apply`]: `(before, after)`.
    ///
    /// Coordinates saturate at line 0 / column 0; the far end of `after` may point past the end
    /// of the line and is expected to be clamped by the host when read.
    pub fn boundary_ranges(selection: Range, template: &MarkupTemplate) -> (Range, Range) {
        let span = template.line_span;
        let before = Range {
            start: Position::new(
                selection.start.line.saturating_sub(span),
                selection.start.column.saturating_sub(template.prefix_len()),
            ),
            end: selection.start,
        };
        let after = Range {
            start: selection.end,
            end: Position::new(
                selection.end.line + span,
                selection.end.column + template.suffix_len(),
            ),
        };
        (before, after)
    }

    /// Returns `true` if the request's selection is already wrapped by its template.
    pub fn is_wrapped(request: &ToggleRequest<'_>) -> bool {
        let template = request.template;
        let suffix_trimmed = template.suffix().trim_end();
        let before_last = request.boundary_before.chars().last();
        let prefix_last = template.prefix.trim_start().chars().last();

        !request.selection_text.is_empty()
            && request.boundary_after == suffix_trimmed
            && before_last == prefix_last
    }

    /// Compute the replacement for one toggle.
    pub fn apply(request: &ToggleRequest<'_>) -> ToggleResult {
        if Self::is_wrapped(request) {
            Self::unwrap(request)
        } else {
            Self::wrap(request)
        }
    }

    fn unwrap(request: &ToggleRequest<'_>) -> ToggleResult {
        let selection = request.selection;
        let (before, after) = Self::boundary_ranges(selection, request.template);
        let before_len = request.boundary_before.chars().count();

        let new_cursor = Position::new(
            selection.start.line.saturating_sub(request.template.line_span),
            selection.start.column.saturating_sub(before_len),
        );
        let selection_end = if selection.is_single_line() {
            Position::new(
                new_cursor.line,
                new_cursor.column + request.selection_text.chars().count(),
            )
        } else {
            selection.end
        };

        ToggleResult {
            new_text: request.selection_text.to_string(),
            replaced_range: Range {
                start: before.start,
                end: after.end,
            },
            new_cursor,
            new_selection: Some(Range::new(new_cursor, selection_end)),
            action: ToggleAction::Unwrapped,
        }
    }

    fn wrap(request: &ToggleRequest<'_>) -> ToggleResult {
        let template = request.template;
        let selection = request.selection;
        let prefix_len = template.prefix_len();
        let suffix_len = template.suffix_len();

        let next_is_space = request
            .boundary_after
            .chars()
            .next()
            .is_some_and(char::is_whitespace);

        let mut new_text = String::with_capacity(
            template.prefix.len() + request.selection_text.len() + template.suffix().len() + 1,
        );
        new_text.push_str(&template.prefix);
        new_text.push_str(request.selection_text);
        new_text.push_str(template.suffix());
        if !next_is_space {
            new_text.push(' ');
        }

        let advance = if request.selection_text.is_empty() {
            prefix_len
        } else if selection.is_single_line() {
            prefix_len + suffix_len + 1
        } else {
            // The prefix went onto an earlier line.
            suffix_len + 1
        };
        let new_cursor = Position::new(
            selection.end.line + template.line_span,
            selection.end.column + advance,
        );

        ToggleResult {
            new_text,
            replaced_range: selection,
            new_cursor,
            new_selection: None,
            action: ToggleAction::Wrapped,
        }
    }
}
