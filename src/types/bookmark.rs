use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// `url` is the unique key across the whole index. `title`, `url` and
/// `category` are immutable after creation; only `visit_count` and
/// `last_visited` change, and only through a recorded visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub url: String,
    pub title: String,
    pub category: String,
    pub visit_count: u64,
    pub created_at: i64,
    pub last_visited: Option<i64>,
}

/// Shared handle to a bookmark record.
///
/// The hash index holds the canonical handle; the recent list and the
/// min-heap hold clones of the same `Rc`, so a visit-count update written
/// through any of them is observable through all three. The index core is
/// single-threaded, which is what makes `Rc<RefCell<_>>` appropriate here.
pub type BookmarkRef = Rc<RefCell<Bookmark>>;

/// Wraps a bookmark record in a shared handle.
pub fn shared(bookmark: Bookmark) -> BookmarkRef {
    Rc::new(RefCell::new(bookmark))
}
