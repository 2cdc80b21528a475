//! Bounded singly linked list of recently visited bookmarks, newest first.
//!
//! Capacity enforcement happens exactly once per insertion: when the list
//! grows past `max_size`, the tail (oldest entry) is evicted. There is no
//! tail pointer; a `Box`-owned singly linked list cannot safely alias its
//! last node, and tail eviction was already a full walk in any case.

use std::rc::Rc;

use crate::types::bookmark::BookmarkRef;

struct Node {
    record: BookmarkRef,
    next: Option<Box<Node>>,
}

/// Singly linked list recording visit order, most-recent first.
pub struct RecentList {
    head: Option<Box<Node>>,
    size: usize,
    max_size: usize,
}

impl RecentList {
    /// Creates an empty list that keeps at most `max_size` entries.
    pub fn new(max_size: usize) -> Self {
        Self {
            head: None,
            size: 0,
            max_size,
        }
    }

    /// Pushes a record to the front, evicting the tail if the list grows
    /// past capacity.
    pub fn insert_at_beginning(&mut self, record: BookmarkRef) {
        self.head = Some(Box::new(Node {
            record,
            next: self.head.take(),
        }));
        self.size += 1;

        if self.size > self.max_size {
            self.remove_from_end();
        }
    }

    /// Relocates the entry for `url` to the front. Returns `false` if the
    /// URL is not in the list; the caller falls back to insertion.
    pub fn move_to_front(&mut self, url: &str) -> bool {
        match self.remove(url) {
            Some(record) => {
                // Net size is unchanged, so this cannot trigger an eviction.
                self.insert_at_beginning(record);
                true
            }
            None => false,
        }
    }

    /// Whether an entry for `url` is in the list.
    pub fn contains(&self, url: &str) -> bool {
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            if node.record.borrow().url == url {
                return true;
            }
            cur = node.next.as_deref();
        }
        false
    }

    /// Removes the entry for `url` regardless of position. Returns whether
    /// an entry was removed.
    pub fn delete(&mut self, url: &str) -> bool {
        self.remove(url).is_some()
    }

    /// All entries from front (most recent) to back (oldest).
    pub fn get_all(&self) -> Vec<BookmarkRef> {
        let mut result = Vec::with_capacity(self.size);
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            result.push(Rc::clone(&node.record));
            cur = node.next.as_deref();
        }
        result
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Configured capacity.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.head = None;
        self.size = 0;
    }

    /// Splices out the node for `url` and returns its record.
    fn remove(&mut self, url: &str) -> Option<BookmarkRef> {
        let record = Self::splice_out(&mut self.head, url)?;
        self.size -= 1;
        Some(record)
    }

    fn splice_out(slot: &mut Option<Box<Node>>, url: &str) -> Option<BookmarkRef> {
        match slot {
            None => None,
            Some(node) => {
                if node.record.borrow().url == url {
                    let node = slot.take()?;
                    *slot = node.next;
                    Some(node.record)
                } else {
                    Self::splice_out(&mut node.next, url)
                }
            }
        }
    }

    /// Evicts the oldest entry (the tail) and returns its record.
    fn remove_from_end(&mut self) -> Option<BookmarkRef> {
        let record = Self::pop_last(&mut self.head)?;
        self.size -= 1;
        Some(record)
    }

    fn pop_last(slot: &mut Option<Box<Node>>) -> Option<BookmarkRef> {
        match slot {
            None => None,
            Some(node) if node.next.is_some() => Self::pop_last(&mut node.next),
            Some(_) => slot.take().map(|node| node.record),
        }
    }
}
