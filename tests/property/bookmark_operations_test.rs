//! Property-based tests for the bookmarks store.
//!
//! `add` is append-only: every addition grows the list by exactly one,
//! leaves existing entries untouched and in order, and never rejects a
//! duplicate.

use duskbrowser::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn add_is_append_only(
        entries in prop::collection::vec(("[a-zA-Z0-9 ]{0,12}", "[a-z0-9./:-]{1,24}"), 1..40)
    ) {
        let mut store = BookmarkStore::new();

        for (i, (label, url)) in entries.iter().enumerate() {
            let before: Vec<_> = store.list().to_vec();
            store.add(label, url);

            prop_assert_eq!(store.len(), i + 1);
            prop_assert_eq!(&store.list()[..i], &before[..]);
            prop_assert_eq!(&store.list()[i].label, label);
            prop_assert_eq!(&store.list()[i].url, url);
        }
    }

    #[test]
    fn duplicates_accumulate(label in "[a-zA-Z ]{1,12}", url in "[a-z.]{1,20}", times in 1..10usize) {
        let mut store = BookmarkStore::new();
        for _ in 0..times {
            store.add(&label, &url);
        }
        prop_assert_eq!(store.len(), times);
        for bm in store.list() {
            prop_assert_eq!(&bm.label, &label);
            prop_assert_eq!(&bm.url, &url);
        }
    }
}
