//! Unit tests for the bookmarks store: append-only ordering, duplicates
//! allowed, seeded defaults.

use duskbrowser::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};

#[test]
fn test_new_store_is_empty() {
    let store = BookmarkStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_add_appends_in_order() {
    let mut store = BookmarkStore::new();
    store.add("Rust", "https://rust-lang.org");
    store.add("Crates", "https://crates.io");

    let entries = store.list();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, "Rust");
    assert_eq!(entries[1].label, "Crates");
}

#[test]
fn test_duplicates_are_allowed() {
    let mut store = BookmarkStore::new();
    store.add("Rust", "https://rust-lang.org");
    store.add("Rust", "https://rust-lang.org");
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[0], store.list()[1]);
}

#[test]
fn test_add_preserves_existing_entries() {
    let mut store = BookmarkStore::new();
    store.add("A", "https://a.com");
    store.add("B", "https://b.com");
    let before: Vec<_> = store.list().to_vec();

    store.add("C", "https://c.com");
    assert_eq!(store.len(), 3);
    assert_eq!(&store.list()[..2], &before[..]);
}

#[test]
fn test_seeded_store_matches_seed_order() {
    let store = BookmarkStore::seeded(&[("Google", "https://google.com"), ("YouTube", "https://youtube.com")]);
    let entries = store.list();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].url, "https://google.com");
    assert_eq!(entries[1].url, "https://youtube.com");
}

#[test]
fn test_app_starts_with_seed_bookmarks() {
    use duskbrowser::engine::scripted::ScriptedEngine;
    let app = duskbrowser::app::App::new(Box::new(ScriptedEngine::new()));
    assert_eq!(app.bookmarks.len(), duskbrowser::config::SEED_BOOKMARKS.len());
    assert_eq!(app.bookmarks.list()[0].label, "Google");
}
