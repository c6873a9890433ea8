//! Host buffer capabilities.
//!
//! The engines never touch a buffer: they consume strings and positions and return a
//! replacement. The command layer talks to whatever editor hosts it through [`TextBuffer`], and
//! [`RopeBuffer`] is a self-contained implementation used for headless hosts and tests.

use crate::text::{CursorAnchor, Position, Range};
use ropey::Rope;
use std::time::Duration;

/// The editor surface a command runs against.
///
/// Any host that can report its selection, read and replace ranges, move the cursor and take
/// focus can drive the toggle and strip commands.
pub trait TextBuffer {
    /// Exact text of the current selection (empty for a collapsed cursor).
    fn selection_text(&self) -> String;

    /// One end of the current selection.
    fn cursor(&self, anchor: CursorAnchor) -> Position;

    /// Text between two positions.
    ///
    /// Positions outside the buffer are clamped (column to the end of its line, line to the
    /// last line), and an empty or inverted range yields `""`. Never fails.
    fn range_text(&self, start: Position, end: Position) -> String;

    /// Replace the text between `start` and `end` with `text`.
    fn replace_range(&mut self, text: &str, start: Position, end: Position);

    /// Replace the current selection with `text`, leaving the cursor after it.
    fn replace_selection(&mut self, text: &str);

    /// Collapse the selection to `pos`.
    fn set_cursor(&mut self, pos: Position);

    /// Give input focus back to the editor surface.
    fn focus(&mut self);

    /// Select `range`. Hosts without selection support just place the cursor at its end.
    fn set_selection(&mut self, range: Range) {
        self.set_cursor(range.end);
    }

    /// Restore focus after `delay`.
    ///
    /// Hosts with an event loop should schedule [`TextBuffer::focus`] on it (fire-and-forget);
    /// the default focuses immediately.
    fn schedule_focus(&mut self, _delay: Duration) {
        self.focus();
    }

    /// Current selection as an ordered range.
    fn selection(&self) -> Range {
        Range::new(self.cursor(CursorAnchor::From), self.cursor(CursorAnchor::To))
    }
}

/// In-memory [`TextBuffer`] backed by a rope.
///
/// Line breaks follow ropey's rules; a line's terminator (including both halves of `\r\n`) is
/// never addressable by a column.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
    rope: Rope,
    anchor: Position,
    head: Position,
    focus_count: usize,
}

impl RopeBuffer {
    /// Create a buffer with the cursor at the start of the document.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            anchor: Position::default(),
            head: Position::default(),
            focus_count: 0,
        }
    }

    /// Full document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Number of logical lines (an empty document has one line).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Length of `line` in characters, excluding its terminator.
    pub fn line_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        match (len, len.checked_sub(1).map(|i| slice.char(i))) {
            (2.., Some('\n')) if slice.char(len - 2) == '\r' => len - 2,
            (_, Some(c)) if is_line_break(c) => len - 1,
            _ => len,
        }
    }

    /// Clamp `pos` into the document.
    pub fn clamp(&self, pos: Position) -> Position {
        let last_line = self.rope.len_lines().saturating_sub(1);
        if pos.line > last_line {
            return Position::new(last_line, self.line_len(last_line));
        }
        Position::new(pos.line, pos.column.min(self.line_len(pos.line)))
    }

    /// Character offset of `pos` (after clamping).
    pub fn char_offset(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        self.rope.line_to_char(pos.line) + pos.column
    }

    /// Position of a character offset (clamped to the end of the document).
    pub fn position_of(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        Position::new(line, offset - self.rope.line_to_char(line))
    }

    /// Select from `anchor` to `head` (either order).
    pub fn select(&mut self, anchor: Position, head: Position) {
        self.anchor = self.clamp(anchor);
        self.head = self.clamp(head);
    }

    /// How many times focus has been restored.
    pub fn focus_count(&self) -> usize {
        self.focus_count
    }
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

impl Default for RopeBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl TextBuffer for RopeBuffer {
    fn selection_text(&self) -> String {
        let range = self.selection();
        self.range_text(range.start, range.end)
    }

    fn cursor(&self, anchor: CursorAnchor) -> Position {
        match anchor {
            CursorAnchor::From => self.anchor.min(self.head),
            CursorAnchor::To => self.anchor.max(self.head),
        }
    }

    fn range_text(&self, start: Position, end: Position) -> String {
        let start = self.char_offset(start);
        let end = self.char_offset(end);
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn replace_range(&mut self, text: &str, start: Position, end: Position) {
        let range = Range::new(start, end);
        let start = self.char_offset(range.start);
        let end = self.char_offset(range.end);
        self.rope.remove(start..end);
        self.rope.insert(start, text);

        let after = self.position_of(start + text.chars().count());
        self.anchor = after;
        self.head = after;
    }

    fn replace_selection(&mut self, text: &str) {
        let range = self.selection();
        self.replace_range(text, range.start, range.end);
    }

    fn set_cursor(&mut self, pos: Position) {
        let pos = self.clamp(pos);
        self.anchor = pos;
        self.head = pos;
    }

    fn focus(&mut self) {
        self.focus_count += 1;
    }

    fn set_selection(&mut self, range: Range) {
        self.select(range.start, range.end);
    }
}
