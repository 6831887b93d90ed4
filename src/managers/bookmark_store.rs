//! Bookmarks store for Duskbrowser.
//!
//! An ordered, in-memory list of `(label, url)` pairs. Append-only:
//! there is no removal, duplicates are allowed, and everything is lost on
//! exit. Activation is handled by the toolbar, which opens the URL in a
//! new tab.

use crate::types::bookmark::Bookmark;

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    /// Appends unconditionally; duplicates are permitted.
    fn add(&mut self, label: &str, url: &str);
    /// Bookmarks in insertion order, for menu rendering.
    fn list(&self) -> &[Bookmark];
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// In-memory bookmark list.
#[derive(Debug, Default)]
pub struct BookmarkStore {
    entries: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with the given entries, in order.
    pub fn seeded(seeds: &[(&str, &str)]) -> Self {
        let mut store = Self::new();
        for (label, url) in seeds {
            store.add(label, url);
        }
        store
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    fn add(&mut self, label: &str, url: &str) {
        self.entries.push(Bookmark::new(label, url));
    }

    fn list(&self) -> &[Bookmark] {
        &self.entries
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
