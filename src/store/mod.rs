//! Persistence: the opaque string-keyed storage boundary and the post
//! repository built on top of it.

mod kv;
mod posts;

pub use kv::{FileStorage, MemoryStorage, Storage};
pub use posts::{EDITING_DRAFT_KEY, POSTS_KEY, PostQuery, PostStore};
