//! Single-line text editing.
//!
//! Positions are character indices, never byte offsets, so editing text with
//! multi-byte characters cannot split a code point. [`Caret`] owns the cursor
//! and selection and applies edits to a borrowed `String`.

use serde::{Deserialize, Serialize};

use crate::constants::{CHAR_WIDTH_FACTOR, CURSOR_WIDTH};
use crate::layout::Bounds;
use crate::renderer::{Color, Renderer};

// =============================================================================
// Measurement
// =============================================================================

/// Number of characters in `text`.
#[inline]
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of character index `index`, clamped to the end.
pub fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Approximate monospace character width.
#[inline]
pub fn char_width(font_size: f32) -> f32 {
    font_size * CHAR_WIDTH_FACTOR
}

/// Character index nearest to screen position `x`, clamped to `[0, len]`.
pub fn x_to_char_index(x: f32, content_x: f32, font_size: f32, len: usize) -> usize {
    let index = ((x - content_x) / char_width(font_size)).round();
    if index <= 0.0 {
        0
    } else {
        (index as usize).min(len)
    }
}

/// Screen x of the caret at character index `index`.
#[inline]
pub fn cursor_x(content_x: f32, index: usize, font_size: f32) -> f32 {
    content_x + index as f32 * char_width(font_size)
}

// =============================================================================
// Caret
// =============================================================================

/// Cursor position and optional selection `(anchor, head)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Caret {
    pub cursor: usize,
    pub selection: Option<(usize, usize)>,
}

impl Caret {
    /// Caret at `index` with nothing selected.
    pub fn at(index: usize) -> Self {
        Self {
            cursor: index,
            selection: None,
        }
    }

    /// Selection as `(start, end)` with `start <= end`, ignoring empty ranges.
    pub fn selected_range(&self) -> Option<(usize, usize)> {
        self.selection
            .map(|(a, b)| (a.min(b), a.max(b)))
            .filter(|(start, end)| start < end)
    }

    /// Keep the caret inside a text of `len` characters.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len);
        self.selection = self
            .selection
            .map(|(a, b)| (a.min(len), b.min(len)));
    }

    fn delete_selection(&mut self, text: &mut String) -> bool {
        match self.selected_range() {
            Some((start, end)) => {
                let range = byte_offset(text, start)..byte_offset(text, end);
                text.replace_range(range, "");
                *self = Caret::at(start);
                true
            }
            None => {
                self.selection = None;
                false
            }
        }
    }

    /// Insert `insert` at the caret, replacing any selection.
    pub fn insert(&mut self, text: &mut String, insert: &str) {
        self.delete_selection(text);
        let at = byte_offset(text, self.cursor);
        text.insert_str(at, insert);
        self.cursor += char_count(insert);
    }

    /// Backspace. Returns whether the text changed.
    pub fn backspace(&mut self, text: &mut String) -> bool {
        if self.delete_selection(text) {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        let at = byte_offset(text, self.cursor - 1);
        text.remove(at);
        self.cursor -= 1;
        true
    }

    /// Forward delete. Returns whether the text changed.
    pub fn delete(&mut self, text: &mut String) -> bool {
        if self.delete_selection(text) {
            return true;
        }
        if self.cursor >= char_count(text) {
            return false;
        }
        let at = byte_offset(text, self.cursor);
        text.remove(at);
        true
    }

    /// Move to `index`, extending the selection when `shift` is held.
    fn move_to(&mut self, index: usize, shift: bool) {
        if shift {
            let anchor = self.selection.map(|(a, _)| a).unwrap_or(self.cursor);
            self.selection = Some((anchor, index));
        } else {
            self.selection = None;
        }
        self.cursor = index;
    }

    pub fn left(&mut self, shift: bool) {
        match (shift, self.selected_range()) {
            (false, Some((start, _))) => *self = Caret::at(start),
            _ => self.move_to(self.cursor.saturating_sub(1), shift),
        }
    }

    pub fn right(&mut self, len: usize, shift: bool) {
        match (shift, self.selected_range()) {
            (false, Some((_, end))) => *self = Caret::at(end),
            _ => self.move_to((self.cursor + 1).min(len), shift),
        }
    }

    pub fn home(&mut self, shift: bool) {
        self.move_to(0, shift);
    }

    pub fn end(&mut self, len: usize, shift: bool) {
        self.move_to(len, shift);
    }

    pub fn select_all(&mut self, len: usize) {
        self.cursor = len;
        self.selection = Some((0, len));
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Draw the selection highlight.
pub fn draw_selection(
    renderer: &mut Renderer,
    content: Bounds,
    caret: &Caret,
    font_size: f32,
    color: Color,
) {
    if let Some((start, end)) = caret.selected_range() {
        let x = cursor_x(content.x, start, font_size);
        let width = (end - start) as f32 * char_width(font_size);
        renderer.fill_rect(Bounds::new(x, content.y, width, content.height), color);
    }
}

/// Draw the text cursor.
pub fn draw_cursor(
    renderer: &mut Renderer,
    content: Bounds,
    caret: &Caret,
    font_size: f32,
    color: Color,
) {
    let x = cursor_x(content.x, caret.cursor, font_size);
    let bounds = Bounds::new(x, content.y + 2.0, CURSOR_WIDTH, (content.height - 4.0).max(0.0));
    renderer.fill_rect(bounds, color);
}
