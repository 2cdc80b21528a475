//! Bookmark index coordinator.
//!
//! Implements `BookmarkIndexTrait` — add/visit/delete/search operations that
//! fan each mutation out across the hash index, title trie, recent list, and
//! min-heap, keeping the four structures mutually consistent. Validation
//! happens up front; structure mutations cannot fail once it passes, so a
//! rejected operation leaves every structure untouched.

use std::collections::HashSet;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::dsa::hash_index::HashIndex;
use crate::dsa::min_heap::MinHeap;
use crate::dsa::recent_list::RecentList;
use crate::dsa::title_trie::TitleTrie;
use crate::types::bookmark::{shared, Bookmark};
use crate::types::config::IndexConfig;
use crate::types::errors::BookmarkError;

/// Trait defining the bookmark index interface.
pub trait BookmarkIndexTrait {
    fn add_bookmark(&mut self, title: &str, url: &str, category: &str)
        -> Result<(), BookmarkError>;
    fn record_visit(&mut self, url: &str) -> Result<(), BookmarkError>;
    fn remove_bookmark(&mut self, url: &str) -> Result<(), BookmarkError>;
    fn search_by_prefix(&self, prefix: &str) -> Vec<Bookmark>;
    fn least_visited(&mut self, k: usize) -> Vec<Bookmark>;
    fn recent(&self) -> Vec<Bookmark>;
    fn get_bookmark(&self, url: &str) -> Option<Bookmark>;
    fn all_bookmarks(&self) -> Vec<Bookmark>;
    fn contains(&self, url: &str) -> bool;
    fn bookmark_count(&self) -> usize;
    fn categories(&self) -> Vec<String>;
}

/// In-memory bookmark index.
///
/// Owns the four data structures exclusively; single-threaded by
/// construction (`Rc` handles make it `!Send`), so every operation runs to
/// completion with no interleaving to reason about.
pub struct BookmarkIndex {
    config: IndexConfig,
    bookmarks: HashIndex,
    titles: TitleTrie,
    recent: RecentList,
    least_used: MinHeap,
    categories: HashSet<String>,
}

impl BookmarkIndex {
    /// Creates an index with default capacities.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Creates an index with the given capacity configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        let mut categories = HashSet::new();
        categories.insert("Uncategorized".to_string());
        Self {
            bookmarks: HashIndex::new(config.initial_table_size),
            titles: TitleTrie::new(),
            recent: RecentList::new(config.recent_capacity),
            least_used: MinHeap::new(),
            categories,
            config,
        }
    }

    /// The active capacity configuration.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl Default for BookmarkIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkIndexTrait for BookmarkIndex {
    /// Adds a new bookmark with `visit_count = 0` and registers it in the
    /// hash index, title trie, and min-heap. The category joins the known
    /// set. Fields are trimmed before validation and storage.
    fn add_bookmark(
        &mut self,
        title: &str,
        url: &str,
        category: &str,
    ) -> Result<(), BookmarkError> {
        let title = title.trim();
        let url = url.trim();
        let category = category.trim();

        if title.is_empty() {
            return Err(BookmarkError::MissingField("title".to_string()));
        }
        if url.is_empty() {
            return Err(BookmarkError::MissingField("url".to_string()));
        }
        if category.is_empty() {
            return Err(BookmarkError::MissingField("category".to_string()));
        }

        if self.bookmarks.contains(url) {
            return Err(BookmarkError::DuplicateUrl(url.to_string()));
        }
        if self.bookmarks.len() >= self.config.max_bookmarks {
            return Err(BookmarkError::CapacityExceeded(self.config.max_bookmarks));
        }

        let record = shared(Bookmark {
            url: url.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            visit_count: 0,
            created_at: Self::now(),
            last_visited: None,
        });

        self.bookmarks.put(url, Rc::clone(&record));
        self.titles.insert(title, url);
        self.least_used.insert(record);
        self.categories.insert(category.to_string());
        Ok(())
    }

    /// Records a visit: stamps `last_visited`, bumps the visit count through
    /// the min-heap (the write is visible everywhere via the shared record),
    /// and moves the URL to the front of the recent list, inserting it if it
    /// was not there.
    fn record_visit(&mut self, url: &str) -> Result<(), BookmarkError> {
        let record = self
            .bookmarks
            .get(url)
            .map(Rc::clone)
            .ok_or_else(|| BookmarkError::NotFound(url.to_string()))?;

        let new_count = record.borrow().visit_count + 1;
        record.borrow_mut().last_visited = Some(Self::now());
        self.least_used.update_key(url, new_count);

        if !self.recent.move_to_front(url) {
            self.recent.insert_at_beginning(record);
        }
        Ok(())
    }

    /// Removes a bookmark from all four structures. The trie deletion is
    /// keyed by (title, url), so a second bookmark sharing the same title
    /// stays searchable.
    fn remove_bookmark(&mut self, url: &str) -> Result<(), BookmarkError> {
        let title = self
            .bookmarks
            .get(url)
            .map(|record| record.borrow().title.clone())
            .ok_or_else(|| BookmarkError::NotFound(url.to_string()))?;

        self.bookmarks.delete(url);
        self.titles.delete(&title, url);
        self.recent.delete(url);
        self.least_used.delete(url);
        Ok(())
    }

    /// Autocomplete: trie matches for the prefix, resolved back through the
    /// hash index into record snapshots. Order is unspecified.
    fn search_by_prefix(&self, prefix: &str) -> Vec<Bookmark> {
        self.titles
            .search_by_prefix(prefix)
            .into_iter()
            .filter_map(|hit| self.bookmarks.get(&hit.url).map(|r| r.borrow().clone()))
            .collect()
    }

    /// The `k` least-visited bookmarks, ascending by visit count. Takes
    /// `&mut self` because the heap query works on a scratch copy that is
    /// restored before returning; the heap is observably undisturbed.
    fn least_visited(&mut self, k: usize) -> Vec<Bookmark> {
        self.least_used
            .get_least_visited(k)
            .into_iter()
            .map(|r| r.borrow().clone())
            .collect()
    }

    /// Recently visited bookmarks, most recent first.
    fn recent(&self) -> Vec<Bookmark> {
        self.recent
            .get_all()
            .into_iter()
            .map(|r| r.borrow().clone())
            .collect()
    }

    fn get_bookmark(&self, url: &str) -> Option<Bookmark> {
        self.bookmarks.get(url).map(|r| r.borrow().clone())
    }

    fn all_bookmarks(&self) -> Vec<Bookmark> {
        self.bookmarks
            .values()
            .into_iter()
            .map(|r| r.borrow().clone())
            .collect()
    }

    fn contains(&self, url: &str) -> bool {
        self.bookmarks.contains(url)
    }

    fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }

    /// Every category ever registered, in unspecified order. Categories are
    /// never retired when their last bookmark goes away.
    fn categories(&self) -> Vec<String> {
        self.categories.iter().cloned().collect()
    }
}
