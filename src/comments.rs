//! Comment moderation.
//!
//! Comments live in memory for the lifetime of the moderation view; the
//! dashboard never persisted them. Everything here is plain filter/map
//! over one list.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// Moderation status of a comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    #[default]
    Pending,
    Approved,
    Spam,
}

/// A reader comment awaiting moderation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub author: String,
    pub email: String,
    pub content: String,
    #[serde(rename = "postTitle")]
    pub post_title: String,
    pub timestamp: String,
    pub status: CommentStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Comment>,
}

/// In-memory moderation queue for the comments view.
#[derive(Debug, Default)]
pub struct ModerationQueue {
    comments: Vec<Comment>,
}

impl ModerationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(comments: Vec<Comment>) -> Self {
        Self { comments }
    }

    /// All comments, in arrival order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Number of comments with the given status.
    pub fn count_with_status(&self, status: CommentStatus) -> usize {
        self.comments.iter().filter(|c| c.status == status).count()
    }

    /// Change one comment's status (approve, or mark as spam).
    ///
    /// Returns false when no comment has that id.
    pub fn set_status(&mut self, id: i64, status: CommentStatus) -> bool {
        match self.comments.iter_mut().find(|c| c.id == id) {
            Some(comment) => {
                comment.status = status;
                true
            }
            None => false,
        }
    }

    /// Remove exactly the comment with `id`, keeping the order of the
    /// rest. Returns false when no comment has that id.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.comments.len();
        self.comments.retain(|c| c.id != id);
        self.comments.len() != before
    }

    /// Attach a moderator reply to the comment with `id`.
    ///
    /// A reply that is empty after trimming is rejected, as is an unknown
    /// id. Replies are born approved.
    pub fn reply(&mut self, id: i64, author: &str, content: &str, clock: &dyn Clock) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        let Some(parent) = self.comments.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        parent.replies.push(Comment {
            id: clock.now_millis(),
            author: author.to_string(),
            email: String::new(),
            content: content.to_string(),
            post_title: parent.post_title.clone(),
            timestamp: clock.now_iso8601(),
            status: CommentStatus::Approved,
            replies: Vec::new(),
        });
        true
    }

    /// Comments matching a case-insensitive search over author, content,
    /// and post title, optionally restricted to one status.
    pub fn filter(&self, search: &str, status: Option<CommentStatus>) -> Vec<&Comment> {
        let term = search.to_lowercase();
        self.comments
            .iter()
            .filter(|c| {
                let matches_search = term.is_empty()
                    || c.author.to_lowercase().contains(&term)
                    || c.content.to_lowercase().contains(&term)
                    || c.post_title.to_lowercase().contains(&term);
                let matches_status = status.is_none_or(|s| c.status == s);
                matches_search && matches_status
            })
            .collect()
    }
}
