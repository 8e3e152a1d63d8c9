//! Post repository over a [`Storage`] backend.

use anyhow::Result;

use super::kv::Storage;
use crate::post::{Post, Status};

/// Storage key holding the full ordered post collection.
pub const POSTS_KEY: &str = "blog-posts";

/// Transient key handing a single post from the listing view to the
/// editor; read once on editor entry, then cleared.
pub const EDITING_DRAFT_KEY: &str = "editing-draft";

/// Repository for the persisted post collection.
///
/// Every mutation is a whole-collection read-modify-write with no
/// concurrent-writer protection: the dashboard is single-user and
/// single-tab by design, so a second writer silently overwrites the
/// first. That boundary is documented and tested, not worked around.
#[derive(Debug)]
pub struct PostStore<S> {
    storage: S,
}

impl<S: Storage> PostStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All posts in stored order.
    ///
    /// Missing or malformed data is treated as an empty collection; the
    /// listing page never fails to load.
    pub fn list(&self) -> Vec<Post> {
        let Some(raw) = self.storage.get(POSTS_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "malformed post collection, defaulting to empty");
            Vec::new()
        })
    }

    /// Look up a single post by id.
    pub fn get(&self, id: i64) -> Option<Post> {
        self.list().into_iter().find(|post| post.id == id)
    }

    /// Insert the post, or update the record with the same id in place.
    ///
    /// # Errors
    /// Returns an error if the storage write fails.
    pub fn save(&mut self, post: Post) -> Result<Post> {
        let mut posts = self.list();
        match posts.iter_mut().find(|existing| existing.id == post.id) {
            Some(existing) => *existing = post.clone(),
            None => posts.push(post.clone()),
        }
        self.write_all(&posts)?;
        Ok(post)
    }

    /// Remove exactly the post with `id`, leaving the order of the rest
    /// unchanged.
    ///
    /// # Errors
    /// Returns an error if the storage write fails.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let mut posts = self.list();
        posts.retain(|post| post.id != id);
        self.write_all(&posts)
    }

    /// Posts matching `query`, in stored order.
    pub fn search(&self, query: &PostQuery) -> Vec<Post> {
        self.list()
            .into_iter()
            .filter(|post| query.matches(post))
            .collect()
    }

    /// Stash a post for the editor view to pick up.
    ///
    /// # Errors
    /// Returns an error if the storage write fails.
    pub fn stash_editing_draft(&mut self, post: &Post) -> Result<()> {
        let json = serde_json::to_string(post)?;
        self.storage.set(EDITING_DRAFT_KEY, &json)
    }

    /// Take the stashed post, clearing the handoff key.
    ///
    /// Read-once: a second call returns `None`. A malformed stash is
    /// discarded the same way a malformed collection is.
    ///
    /// # Errors
    /// Returns an error if clearing the key fails.
    pub fn take_editing_draft(&mut self) -> Result<Option<Post>> {
        let Some(raw) = self.storage.get(EDITING_DRAFT_KEY) else {
            return Ok(None);
        };
        self.storage.remove(EDITING_DRAFT_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(post) => Ok(Some(post)),
            Err(err) => {
                tracing::warn!(%err, "malformed editing draft, discarding");
                Ok(None)
            }
        }
    }

    fn write_all(&mut self, posts: &[Post]) -> Result<()> {
        let json = serde_json::to_string(posts)?;
        self.storage.set(POSTS_KEY, &json)
    }
}

/// Listing filter: a search term over title and content, plus an optional
/// status.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    /// Case-insensitive term matched against title or content; empty
    /// matches everything.
    pub search: String,
    /// Restrict to one status; `None` means all.
    pub status: Option<Status>,
}

impl PostQuery {
    /// Whether `post` satisfies this query.
    pub fn matches(&self, post: &Post) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = term.is_empty()
            || post.title.to_lowercase().contains(&term)
            || post.content.to_lowercase().contains(&term);
        let matches_status = self.status.is_none_or(|status| post.status == status);
        matches_search && matches_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Category;
    use crate::store::kv::MemoryStorage;

    fn post(id: i64, title: &str, status: Status) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: format!("content of {title}"),
            tags: vec!["tag".to_string()],
            images: Vec::new(),
            category: Category::General,
            status,
            created_at: "2024-01-15T10:30:00.000Z".to_string(),
        }
    }

    fn store_with(posts: &[Post]) -> PostStore<MemoryStorage> {
        let mut store = PostStore::new(MemoryStorage::new());
        for p in posts {
            store.save(p.clone()).unwrap();
        }
        store
    }

    // --- Listing ---

    #[test]
    fn test_list_empty_when_nothing_stored() {
        let store = PostStore::new(MemoryStorage::new());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_list_defaults_to_empty_on_malformed_data() {
        let mut storage = MemoryStorage::new();
        storage.set(POSTS_KEY, "{{{ not json").unwrap();
        let store = PostStore::new(storage);
        assert!(store.list().is_empty());
    }

    // --- Saving ---

    #[test]
    fn test_save_appends_exactly_one_record() {
        let mut store = store_with(&[post(1, "One", Status::Draft)]);
        store.save(post(2, "Two", Status::Draft)).unwrap();
        let posts = store.list();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].title, "Two");
    }

    #[test]
    fn test_save_same_id_updates_in_place() {
        let mut store = store_with(&[
            post(1, "One", Status::Draft),
            post(2, "Two", Status::Draft),
            post(3, "Three", Status::Draft),
        ]);
        let mut updated = post(2, "Two, Revised", Status::Published);
        updated.content = "fresh content".to_string();
        store.save(updated).unwrap();

        let posts = store.list();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[1].title, "Two, Revised");
        assert_eq!(posts[1].status, Status::Published);
        // Neighbors untouched, order unchanged.
        assert_eq!(posts[0].title, "One");
        assert_eq!(posts[2].title, "Three");
    }

    #[test]
    fn test_get_finds_by_id() {
        let store = store_with(&[post(1, "One", Status::Draft), post(2, "Two", Status::Draft)]);
        assert_eq!(store.get(2).unwrap().title, "Two");
        assert_eq!(store.get(99), None);
    }

    // --- Deleting ---

    #[test]
    fn test_delete_removes_exactly_that_record() {
        let mut store = store_with(&[
            post(1, "One", Status::Draft),
            post(2, "Two", Status::Draft),
            post(3, "Three", Status::Draft),
        ]);
        store.delete(2).unwrap();
        let titles: Vec<_> = store.list().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["One", "Three"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = store_with(&[post(1, "One", Status::Draft)]);
        store.delete(42).unwrap();
        assert_eq!(store.list().len(), 1);
    }

    // --- Draft handoff ---

    #[test]
    fn test_editing_draft_is_read_once() {
        let mut store = store_with(&[]);
        let draft = post(7, "Stashed", Status::Draft);
        store.stash_editing_draft(&draft).unwrap();
        assert_eq!(store.take_editing_draft().unwrap(), Some(draft));
        assert_eq!(store.take_editing_draft().unwrap(), None);
    }

    #[test]
    fn test_malformed_editing_draft_is_discarded() {
        let mut storage = MemoryStorage::new();
        storage.set(EDITING_DRAFT_KEY, "broken").unwrap();
        let mut store = PostStore::new(storage);
        assert_eq!(store.take_editing_draft().unwrap(), None);
        assert_eq!(store.take_editing_draft().unwrap(), None);
    }

    // --- Queries ---

    #[test]
    fn test_query_search_is_case_insensitive() {
        let store = store_with(&[
            post(1, "Mindful Living", Status::Published),
            post(2, "Other", Status::Published),
        ]);
        let query = PostQuery {
            search: "MINDFUL".to_string(),
            status: None,
        };
        let found = store.search(&query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_query_search_matches_content_too() {
        let store = store_with(&[post(1, "Title", Status::Draft)]);
        let query = PostQuery {
            search: "content of title".to_string(),
            status: None,
        };
        assert_eq!(store.search(&query).len(), 1);
    }

    #[test]
    fn test_query_filters_by_status() {
        let store = store_with(&[
            post(1, "A", Status::Draft),
            post(2, "B", Status::Published),
            post(3, "C", Status::Draft),
        ]);
        let query = PostQuery {
            search: String::new(),
            status: Some(Status::Draft),
        };
        let ids: Vec<_> = store.search(&query).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_default_query_matches_everything() {
        let store = store_with(&[post(1, "A", Status::Draft), post(2, "B", Status::Scheduled)]);
        assert_eq!(store.search(&PostQuery::default()).len(), 2);
    }
}
