//! Toolbar-triggered structured insertions.
//!
//! Each operation splices markdown-lite markers into the buffer and leaves
//! the selection somewhere useful: wrapped text stays selected, the link
//! placeholder URL is selected for immediate overtyping, and image tokens
//! leave the cursor just past the inserted line.

use super::buffer::{ContentBuffer, char_len};

/// Placeholder URL inserted by [`ContentBuffer::insert_link`], selected
/// afterwards so the user can overtype it.
pub const PLACEHOLDER_URL: &str = "https://example.com";

/// Link text used when nothing is selected.
pub const PLACEHOLDER_LINK_TEXT: &str = "link text";

/// Marker prefixed to bullet list lines.
pub const BULLET: &str = "- ";

impl ContentBuffer {
    /// Insert an image token on its own line at the selection start.
    ///
    /// The token goes in between two added newlines; any selection end is
    /// ignored (the selection is not replaced). The cursor lands just past
    /// the inserted token and its trailing newline. The token itself is
    /// not validated — a malformed one simply fails to match at render
    /// time.
    pub fn insert_image_at_cursor(&mut self, markdown: &str) {
        let at = self.selection().start;
        self.insert_at(at, &format!("\n{markdown}\n"));
        self.collapse_to(at + char_len(markdown) + 2);
    }

    /// Wrap the selection in `prefix`/`suffix`, or insert a wrapped
    /// `placeholder` when the selection is empty.
    ///
    /// A non-empty selection stays selected afterwards (exclusive of the
    /// markers); with no selection the cursor collapses to just after the
    /// inserted run.
    pub fn apply_inline_formatting(&mut self, prefix: &str, suffix: &str, placeholder: &str) {
        let sel = self.selection();
        if sel.is_empty() {
            let run = format!("{prefix}{placeholder}{suffix}");
            self.insert_at(sel.start, &run);
            self.collapse_to(sel.start + char_len(&run));
        } else {
            let selected = self.selected_text();
            self.splice(sel.range(), &format!("{prefix}{selected}{suffix}"));
            let text_start = sel.start + char_len(prefix);
            self.select(text_start, text_start + char_len(&selected));
        }
    }

    /// Insert a `[text](url)` link using the selection (or a placeholder)
    /// as the link text.
    ///
    /// Afterwards the selection spans exactly the placeholder URL: it
    /// starts past `[`, the link text, and `](`, and runs for the
    /// placeholder's length.
    pub fn insert_link(&mut self) {
        let sel = self.selection();
        let link_text = if sel.is_empty() {
            PLACEHOLDER_LINK_TEXT.to_string()
        } else {
            self.selected_text()
        };
        self.splice(sel.range(), &format!("[{link_text}]({PLACEHOLDER_URL})"));
        let url_start = sel.start + char_len(&link_text) + 3;
        self.select(url_start, url_start + char_len(PLACEHOLDER_URL));
    }

    /// Turn the selection into a bullet list, or insert a single bullet
    /// marker at the cursor.
    ///
    /// With a selection: every non-blank line is trimmed and prefixed with
    /// the marker; blank lines pass through unchanged; the transformed
    /// text stays selected. With no selection: the marker is inserted at
    /// the cursor, preceded by a newline only when the cursor is not
    /// already at the start of a line.
    pub fn insert_bullet_list(&mut self) {
        let sel = self.selection();
        if sel.is_empty() {
            let at_line_start = sel.start == 0 || self.char_before(sel.start) == Some('\n');
            let run = if at_line_start {
                BULLET.to_string()
            } else {
                format!("\n{BULLET}")
            };
            self.insert_at(sel.start, &run);
            self.collapse_to(sel.start + char_len(&run));
        } else {
            let bulleted = bullet_lines(&self.selected_text());
            self.splice(sel.range(), &bulleted);
            self.select(sel.start, sel.start + char_len(&bulleted));
        }
    }
}

/// Trim and bullet-prefix every non-blank line; keep blank lines as-is.
fn bullet_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                line.to_string()
            } else {
                format!("{BULLET}{trimmed}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
