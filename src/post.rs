//! The persisted post record.
//!
//! Field names and enum spellings follow the stored JSON shape
//! (`createdAt`, lowercase `category`/`status`), so collections written by
//! earlier versions of the dashboard deserialize unchanged.

use serde::{Deserialize, Serialize};

/// Editorial category for a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Spirituality,
    Philosophy,
    Psychology,
    #[default]
    General,
}

impl Category {
    /// Parse the lowercase stored spelling.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "spirituality" => Some(Self::Spirituality),
            "philosophy" => Some(Self::Philosophy),
            "psychology" => Some(Self::Psychology),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    /// The lowercase stored spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spirituality => "spirituality",
            Self::Philosophy => "philosophy",
            Self::Psychology => "psychology",
            Self::General => "general",
        }
    }
}

/// Publication status of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Draft,
    Published,
    Scheduled,
}

impl Status {
    /// Parse the lowercase stored spelling.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            "scheduled" => Some(Self::Scheduled),
            _ => None,
        }
    }

    /// The lowercase stored spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Scheduled => "scheduled",
        }
    }
}

/// A persisted blog post.
///
/// `id` is the creation timestamp in milliseconds and identifies the record
/// across edits; `content` is the final snapshot of the editing buffer.
/// `tags` comes from a naive comma split of the raw input and may contain
/// empty or whitespace entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    /// Data-URIs of images uploaded during the editing session.
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Category,
    pub status: Status,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Post {
    /// Listing preview: the first `n` characters of the content.
    pub fn excerpt(&self, n: usize) -> String {
        self.content.chars().take(n).collect()
    }

    /// Whether this post is a draft.
    pub fn is_draft(&self) -> bool {
        self.status == Status::Draft
    }
}
