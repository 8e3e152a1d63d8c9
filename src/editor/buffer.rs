use std::ops::Range;

use ropey::Rope;

/// Selection range in the buffer, in zero-based character offsets.
///
/// `start == end` is a collapsed cursor. The buffer maintains the
/// invariant `0 <= start <= end <= length` across every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Selection {
    /// A collapsed cursor at `at`.
    pub const fn cursor(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// A selection spanning `start..end`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether the selection is collapsed to a cursor.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// The selection as a character range.
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::cursor(0)
    }
}

/// The post body being edited: an owned text buffer plus the current
/// selection, both tracked in character offsets.
///
/// The buffer lives only for the editing session; persistence takes a
/// final string snapshot via [`ContentBuffer::text`].
pub struct ContentBuffer {
    rope: Rope,
    selection: Selection,
}

impl ContentBuffer {
    /// Create an empty buffer with a collapsed cursor at offset 0.
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create a buffer from existing content, cursor at offset 0.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::cursor(0),
        }
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Buffer length in characters.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The current selection.
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Set the selection, clamping both offsets into the buffer.
    ///
    /// `end` is additionally clamped to be at least `start`, so the
    /// selection invariant holds for any input.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.rope.len_chars();
        let start = start.min(len);
        let end = end.clamp(start, len);
        self.selection = Selection { start, end };
    }

    /// Collapse the selection to a cursor at `at`, clamped into the buffer.
    pub fn collapse_to(&mut self, at: usize) {
        let at = at.min(self.rope.len_chars());
        self.selection = Selection::cursor(at);
    }

    /// The currently selected text (empty string for a collapsed cursor).
    pub fn selected_text(&self) -> String {
        self.rope.slice(self.selection.range()).to_string()
    }

    /// Replace the selection with `text` (the direct-typing path).
    ///
    /// With a collapsed cursor this is a plain insertion. The cursor
    /// collapses to just after the inserted text.
    pub fn replace_selection(&mut self, text: &str) {
        let sel = self.selection;
        self.splice(sel.range(), text);
        self.collapse_to(sel.start + char_len(text));
    }

    /// The character immediately before offset `at`, if any.
    pub(crate) fn char_before(&self, at: usize) -> Option<char> {
        if at == 0 || at > self.rope.len_chars() {
            return None;
        }
        Some(self.rope.char(at - 1))
    }

    /// Insert `text` at a character offset without touching the selection.
    ///
    /// Callers are responsible for repositioning the selection afterwards.
    pub(crate) fn insert_at(&mut self, char_idx: usize, text: &str) {
        let idx = char_idx.min(self.rope.len_chars());
        self.rope.insert(idx, text);
    }

    /// Replace a character range with `text` without touching the selection.
    pub(crate) fn splice(&mut self, range: Range<usize>, text: &str) {
        let len = self.rope.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        self.rope.remove(start..end);
        self.rope.insert(start, text);
    }
}

/// Length of `text` in characters (the buffer's offset unit).
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

impl Default for ContentBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContentBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentBuffer")
            .field(
                "rope",
                &format_args!("Rope({} chars)", self.rope.len_chars()),
            )
            .field("selection", &self.selection)
            .finish()
    }
}
