//! Editing session state and the draft/publish lifecycle.

use thiserror::Error;

use super::buffer::ContentBuffer;
use crate::clock::Clock;
use crate::document::{Block, render_blocks};
use crate::post::{Category, Post, Status};

/// Why a save, publish, or preview was rejected.
///
/// Surfaced inline to the user; the operation aborts with no partial save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("content cannot be empty")]
    EmptyContent,
}

/// A single post-editing session.
///
/// Owns the content buffer for its lifetime; only the final string
/// snapshot ends up in the [`Post`]. A session opened from an existing
/// post keeps that post's id and creation time, so saving updates the
/// stored record in place instead of appending a duplicate.
#[derive(Debug)]
pub struct EditorSession {
    title: String,
    buffer: ContentBuffer,
    /// Raw comma-separated tags input, split naively on save.
    tags_input: String,
    /// Data-URIs of images uploaded during this session.
    images: Vec<String>,
    category: Category,
    status: Status,
    /// `(id, created_at)` of the post being edited, if any.
    editing: Option<(i64, String)>,
}

impl EditorSession {
    /// Start a fresh session for a new post.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            buffer: ContentBuffer::new(),
            tags_input: String::new(),
            images: Vec::new(),
            category: Category::default(),
            status: Status::default(),
            editing: None,
        }
    }

    /// Reopen an existing post for editing.
    pub fn from_post(post: Post) -> Self {
        Self {
            title: post.title,
            buffer: ContentBuffer::from_text(&post.content),
            tags_input: post.tags.join(", "),
            images: post.images,
            category: post.category,
            status: post.status,
            editing: Some((post.id, post.created_at)),
        }
    }

    /// The session's title field.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// The raw comma-separated tags input.
    pub fn tags_input(&self) -> &str {
        &self.tags_input
    }

    pub fn set_tags_input(&mut self, tags: impl Into<String>) {
        self.tags_input = tags.into();
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub const fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    pub const fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// The content buffer being edited.
    pub const fn buffer(&self) -> &ContentBuffer {
        &self.buffer
    }

    pub const fn buffer_mut(&mut self) -> &mut ContentBuffer {
        &mut self.buffer
    }

    /// Record an uploaded image's data-URI on the session.
    pub fn push_image(&mut self, data_uri: String) {
        self.images.push(data_uri);
    }

    /// Data-URIs uploaded so far, in insertion order.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// The id of the post being edited, if this session reopened one.
    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().map(|(id, _)| *id)
    }

    /// Tags from a naive comma split of the raw input.
    ///
    /// Entries are trimmed but empty entries from trailing or doubled
    /// commas are preserved, matching the stored shape.
    pub fn tags(&self) -> Vec<String> {
        self.tags_input
            .split(',')
            .map(|tag| tag.trim().to_string())
            .collect()
    }

    /// Check the save gate: trimmed title and content must be non-empty.
    ///
    /// # Errors
    /// [`SaveError::EmptyTitle`] or [`SaveError::EmptyContent`].
    pub fn validate(&self) -> Result<(), SaveError> {
        if self.title.trim().is_empty() {
            return Err(SaveError::EmptyTitle);
        }
        if self.buffer.text().trim().is_empty() {
            return Err(SaveError::EmptyContent);
        }
        Ok(())
    }

    /// Render the current buffer for the preview dialog.
    ///
    /// # Errors
    /// Same gate as saving: the preview refuses to open for an empty
    /// title or empty content.
    pub fn preview(&self) -> Result<Vec<Block>, SaveError> {
        self.validate()?;
        Ok(render_blocks(&self.buffer.text()))
    }

    /// Build the post record for this session using its current status.
    ///
    /// A fresh session gets a new id (creation time in milliseconds) from
    /// the clock; a session opened from an existing post keeps its id and
    /// creation time. Tags, category, and status pass through unvalidated.
    ///
    /// # Errors
    /// [`SaveError`] when the title or content is empty after trimming.
    pub fn save(&self, clock: &dyn Clock) -> Result<Post, SaveError> {
        self.validate()?;
        let (id, created_at) = match &self.editing {
            Some((id, created_at)) => (*id, created_at.clone()),
            None => (clock.now_millis(), clock.now_iso8601()),
        };
        Ok(Post {
            id,
            title: self.title.clone(),
            content: self.buffer.text(),
            tags: self.tags(),
            images: self.images.clone(),
            category: self.category,
            status: self.status,
            created_at,
        })
    }

    /// Save with status forced to [`Status::Draft`].
    ///
    /// # Errors
    /// Same as [`EditorSession::save`].
    pub fn save_draft(&mut self, clock: &dyn Clock) -> Result<Post, SaveError> {
        self.status = Status::Draft;
        self.save(clock)
    }

    /// Save with status forced to [`Status::Published`].
    ///
    /// # Errors
    /// Same as [`EditorSession::save`].
    pub fn publish(&mut self, clock: &dyn Clock) -> Result<Post, SaveError> {
        self.status = Status::Published;
        self.save(clock)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
