//! Property-based tests for the bookmark index coordinator.
//!
//! These tests verify the cross-structure invariants for arbitrary valid
//! inputs: URL uniqueness, capacity enforcement, visit-count monotonicity,
//! and agreement between the hash index, recent list, and min-heap.

use proptest::prelude::*;

use markdex::managers::bookmark_index::{BookmarkIndex, BookmarkIndexTrait};
use markdex::types::config::IndexConfig;
use markdex::types::errors::BookmarkError;

/// Strategy for generating valid URL strings.
/// Produces URLs with http/https scheme, alphanumeric host, and optional path.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Strategy for generating non-empty bookmark titles.
/// Alphanumeric with interior spaces only, so trimming never empties them.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,28}[a-zA-Z0-9]"
}

/// Strategy for generating category names.
fn arb_category() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // For any valid bookmark, adding it then searching by its full title
    // returns a result carrying that bookmark's URL and category.
    #[test]
    fn add_then_search_by_title_finds_the_bookmark(
        url in arb_url(),
        title in arb_title(),
        category in arb_category(),
    ) {
        let mut index = BookmarkIndex::new();
        index
            .add_bookmark(&title, &url, &category)
            .expect("add_bookmark should succeed for valid inputs");

        let results = index.search_by_prefix(&title);
        let found = results.iter().find(|b| b.url == url);
        prop_assert!(
            found.is_some(),
            "Searching for title '{}' should find URL '{}', got {:?}",
            title,
            url,
            results.iter().map(|b| (&b.url, &b.title)).collect::<Vec<_>>()
        );
        prop_assert_eq!(&found.unwrap().category, &category);
    }

    // At most one live record exists per URL: a second add with the same URL
    // is rejected with DuplicateUrl and leaves all structures unchanged.
    #[test]
    fn duplicate_url_is_always_rejected(
        url in arb_url(),
        title_a in arb_title(),
        title_b in arb_title(),
    ) {
        let mut index = BookmarkIndex::new();
        index.add_bookmark(&title_a, &url, "Misc").unwrap();

        let count_before = index.bookmark_count();
        let result = index.add_bookmark(&title_b, &url, "Misc");
        prop_assert!(matches!(result, Err(BookmarkError::DuplicateUrl(_))));
        prop_assert_eq!(index.bookmark_count(), count_before);
        prop_assert_eq!(
            &index.get_bookmark(&url).unwrap().title,
            &title_a.trim().to_string()
        );
    }

    // Inserting max + extra distinct bookmarks with capacity max leaves
    // exactly max records live.
    #[test]
    fn capacity_is_enforced_exactly(max in 1usize..20, extra in 1usize..6) {
        let config = IndexConfig { max_bookmarks: max, ..IndexConfig::default() };
        let mut index = BookmarkIndex::with_config(config);

        let mut accepted = 0;
        for i in 0..max + extra {
            let url = format!("https://site{}.example", i);
            match index.add_bookmark(&format!("Site {}", i), &url, "Misc") {
                Ok(()) => accepted += 1,
                Err(BookmarkError::CapacityExceeded(limit)) => {
                    prop_assert_eq!(limit, max)
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }
        prop_assert_eq!(accepted, max);
        prop_assert_eq!(index.bookmark_count(), max);
    }

    // visit_count equals the number of recorded visits, the structures agree
    // on it, and the least-visited ranking surfaces a true minimum.
    #[test]
    fn visit_counts_stay_consistent_across_structures(
        visits in proptest::collection::vec(0usize..5, 2..6),
    ) {
        let mut index = BookmarkIndex::new();
        let urls: Vec<String> = (0..visits.len())
            .map(|i| format!("https://site{}.example", i))
            .collect();
        for (i, url) in urls.iter().enumerate() {
            index.add_bookmark(&format!("Site {}", i), url, "Misc").unwrap();
        }

        for (url, count) in urls.iter().zip(&visits) {
            for _ in 0..*count {
                index.record_visit(url).unwrap();
            }
        }

        // Per-URL counts match the number of recorded visits.
        for (url, count) in urls.iter().zip(&visits) {
            prop_assert_eq!(
                index.get_bookmark(url).unwrap().visit_count,
                *count as u64
            );
        }

        // The heap view agrees with the hash index view for every record,
        // and is sorted ascending with a true minimum at the front.
        let ranking = index.least_visited(usize::MAX);
        prop_assert_eq!(ranking.len(), urls.len());
        let min_count = *visits.iter().min().unwrap() as u64;
        prop_assert_eq!(ranking[0].visit_count, min_count);
        for window in ranking.windows(2) {
            prop_assert!(window[0].visit_count <= window[1].visit_count);
        }
        for bm in &ranking {
            prop_assert_eq!(
                bm.visit_count,
                index.get_bookmark(&bm.url).unwrap().visit_count
            );
        }

        // Every recently-visited URL is a live bookmark, and the recency
        // list never exceeds its capacity.
        let recent = index.recent();
        prop_assert!(recent.len() <= index.config().recent_capacity);
        for bm in &recent {
            prop_assert!(index.contains(&bm.url));
        }
    }

    // After deleting an arbitrary subset, the survivors (and only the
    // survivors) are present in every structure.
    #[test]
    fn deletion_is_complete_across_structures(
        total in 3usize..10,
        mut doomed in proptest::collection::hash_set(0usize..10, 1..4),
    ) {
        doomed.retain(|i| *i < total);

        let mut index = BookmarkIndex::new();
        let urls: Vec<String> = (0..total)
            .map(|i| format!("https://site{}.example", i))
            .collect();
        for (i, url) in urls.iter().enumerate() {
            index.add_bookmark(&format!("Site {}", i), url, "Misc").unwrap();
            index.record_visit(url).unwrap();
        }

        for i in &doomed {
            index.remove_bookmark(&urls[*i]).unwrap();
        }

        let expected_live = total - doomed.len();
        prop_assert_eq!(index.bookmark_count(), expected_live);
        prop_assert_eq!(index.least_visited(usize::MAX).len(), expected_live);

        for (i, url) in urls.iter().enumerate() {
            let should_live = !doomed.contains(&i);
            prop_assert_eq!(index.contains(url), should_live);
            let in_search = index
                .search_by_prefix(&format!("Site {}", i))
                .iter()
                .any(|b| &b.url == url);
            prop_assert_eq!(in_search, should_live);
            let in_recent = index.recent().iter().any(|b| &b.url == url);
            prop_assert!(!in_recent || should_live);
        }
    }
}
