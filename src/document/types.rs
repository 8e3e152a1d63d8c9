//! Render-time block model.

/// A parsed, renderable unit derived from one line of post content.
///
/// Blocks are derived data: purely a function of the content string,
/// recomputed on every render, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A `# ` / `## ` / `### ` heading with its level (1-3) and text.
    Heading { level: u8, text: String },
    /// An inline image token `![alt](src)`; `src` may be an external URL
    /// or an embedded data-URI.
    Image { alt: String, src: String },
    /// A text line after bold/italic substitution.
    Paragraph(String),
    /// A line that is empty after trimming.
    Blank,
}

impl Block {
    /// Returns true for [`Block::Blank`].
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}
