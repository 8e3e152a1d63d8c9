//! End-to-end lifecycle: edit, save, reopen, update, delete — against the
//! file-backed store.

use skyscape::clock::FixedClock;
use skyscape::editor::{EditorSession, ImageFile, upload_images};
use skyscape::post::Status;
use skyscape::store::{FileStorage, PostQuery, PostStore};

fn store_at(path: &std::path::Path) -> PostStore<FileStorage> {
    PostStore::new(FileStorage::new(path))
}

#[test]
fn test_full_draft_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skyscape.json");
    let clock = FixedClock::new(1_705_314_600_000);

    // Compose a post with toolbar formatting and an uploaded image.
    let mut session = EditorSession::new();
    session.set_title("The Art of Mindful Living");
    session.set_tags_input("spirituality, psychology,");
    session
        .buffer_mut()
        .replace_selection("# Intro\n\nBe present");
    session.buffer_mut().select(9, 19);
    session.buffer_mut().apply_inline_formatting("**", "**", "bold text");
    let end = session.buffer().len_chars();
    session.buffer_mut().collapse_to(end);
    for uri in upload_images(
        session.buffer_mut(),
        &[ImageFile::new("sunrise.png", vec![1, 2, 3])],
    ) {
        session.push_image(uri);
    }

    // Save as draft.
    let mut store = store_at(&path);
    let draft = session.save_draft(&clock).unwrap();
    store.save(draft.clone()).unwrap();

    let posts = store.list();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 1_705_314_600_000);
    assert_eq!(posts[0].status, Status::Draft);
    assert_eq!(
        posts[0].tags,
        vec!["spirituality".to_string(), "psychology".to_string(), String::new()]
    );
    assert!(posts[0].content.contains("**Be present**"));
    assert!(posts[0].content.contains("![sunrise.png](data:image/png;base64,"));

    // Hand the draft to a fresh editor view, as the listing page does.
    store.stash_editing_draft(&draft).unwrap();
    let mut store = store_at(&path);
    let stashed = store.take_editing_draft().unwrap().unwrap();
    assert_eq!(store.take_editing_draft().unwrap(), None, "handoff is read-once");

    // Edit and publish: the record updates in place.
    clock.advance(60_000);
    let mut session = EditorSession::from_post(stashed);
    session.set_title("The Art of Mindful Living, Revisited");
    let published = session.publish(&clock).unwrap();
    store.save(published).unwrap();

    let posts = store.list();
    assert_eq!(posts.len(), 1, "editing must not append a duplicate");
    assert_eq!(posts[0].id, draft.id);
    assert_eq!(posts[0].created_at, draft.created_at);
    assert_eq!(posts[0].status, Status::Published);
    assert_eq!(posts[0].title, "The Art of Mindful Living, Revisited");

    // Delete.
    store.delete(draft.id).unwrap();
    assert!(store.list().is_empty());
}

#[test]
fn test_listing_search_and_status_filter() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir.path().join("skyscape.json"));
    let clock = FixedClock::new(1_000);

    for (title, publish) in [
        ("Finding Inner Peace", true),
        ("Psychology of Happiness", false),
        ("Hidden Gems of Europe", true),
    ] {
        let mut session = EditorSession::new();
        session.set_title(title);
        session.buffer_mut().replace_selection("Some body text");
        let post = if publish {
            session.publish(&clock).unwrap()
        } else {
            session.save_draft(&clock).unwrap()
        };
        store.save(post).unwrap();
        clock.advance(1);
    }

    let published = store.search(&PostQuery {
        search: String::new(),
        status: Some(Status::Published),
    });
    assert_eq!(published.len(), 2);

    let found = store.search(&PostQuery {
        search: "psychology".to_string(),
        status: None,
    });
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Psychology of Happiness");

    let none = store.search(&PostQuery {
        search: "psychology".to_string(),
        status: Some(Status::Published),
    });
    assert!(none.is_empty());
}

#[test]
fn test_stale_second_writer_silently_wins() {
    // Single-user, single-tab by design: writes replace the whole
    // collection, so a stale writer silently undoes a newer change.
    use skyscape::store::{POSTS_KEY, Storage};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skyscape.json");
    let clock = FixedClock::new(1_000);

    let mut store = store_at(&path);
    let mut last_id = 0;
    for title in ["From the first tab", "From the second tab"] {
        let mut session = EditorSession::new();
        session.set_title(title);
        session.buffer_mut().replace_selection("body");
        last_id = store.save(session.save_draft(&clock).unwrap()).unwrap().id;
        clock.advance(1);
    }
    assert_eq!(store.list().len(), 2);

    // A second tab read the collection earlier and kept its own copy.
    let stale_snapshot = serde_json::to_string(&store.list()).unwrap();

    store.delete(last_id).unwrap();
    assert_eq!(store.list().len(), 1);

    // The stale tab saves: the whole collection is written back, and the
    // deletion is gone.
    let mut raw = FileStorage::new(&path);
    raw.set(POSTS_KEY, &stale_snapshot).unwrap();
    assert_eq!(store.list().len(), 2, "last writer wins, wholesale");
}
