//! Binary min-heap of bookmark records keyed by visit count.
//!
//! Tracks least-visited bookmarks for the index core. `update_key` and
//! `delete` locate their target by linear scan; heap sizes are bounded by
//! the total bookmark count, so the scan is acceptable at this scale.

use std::rc::Rc;

use crate::types::bookmark::BookmarkRef;

/// Dense-array binary min-heap, root = minimum visit count.
#[derive(Default)]
pub struct MinHeap {
    heap: Vec<BookmarkRef>,
}

impl MinHeap {
    pub fn new() -> Self {
        Self::default()
    }

    fn visits(&self, index: usize) -> u64 {
        self.heap[index].borrow().visit_count
    }

    /// Inserts a record keyed by its current visit count.
    pub fn insert(&mut self, record: BookmarkRef) {
        self.heap.push(record);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the record with the minimum visit count.
    pub fn extract_min(&mut self) -> Option<BookmarkRef> {
        if self.heap.is_empty() {
            return None;
        }
        // swap_remove moves the last element into the vacated root.
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// The record with the minimum visit count, without removing it.
    pub fn peek(&self) -> Option<BookmarkRef> {
        self.heap.first().map(Rc::clone)
    }

    /// Writes `new_count` through the shared record for `url` and restores
    /// heap order, sifting up or down depending on the direction of change.
    /// Returns `false` if the URL is not in the heap.
    ///
    /// The write goes through the shared handle, so the hash index and the
    /// recent list observe the same count.
    pub fn update_key(&mut self, url: &str, new_count: u64) -> bool {
        let index = match self.position(url) {
            Some(index) => index,
            None => return false,
        };

        let old_count = self.visits(index);
        self.heap[index].borrow_mut().visit_count = new_count;

        if new_count < old_count {
            self.sift_up(index);
        } else if new_count > old_count {
            self.sift_down(index);
        }
        true
    }

    /// Removes the record for `url`: swap with the last slot, pop, and sift
    /// the swapped-in element in both directions (only one can apply, but
    /// checking both is safe and simple). Returns whether it was present.
    pub fn delete(&mut self, url: &str) -> bool {
        let index = match self.position(url) {
            Some(index) => index,
            None => return false,
        };

        self.heap.swap_remove(index);
        if index < self.heap.len() {
            self.sift_up(index);
            self.sift_down(index);
        }
        true
    }

    /// Whether a record for `url` is in the heap.
    pub fn contains(&self, url: &str) -> bool {
        self.position(url).is_some()
    }

    /// Number of records in the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// All records in unspecified (heap) order.
    pub fn get_all(&self) -> Vec<BookmarkRef> {
        self.heap.clone()
    }

    /// All records sorted by visit count, ascending. The heap is restored
    /// afterward: extraction runs on a scratch copy of the backing array
    /// (cheap `Rc` clones), so repeated calls return identical results.
    pub fn all_sorted(&mut self) -> Vec<BookmarkRef> {
        let snapshot = self.heap.clone();
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(min) = self.extract_min() {
            sorted.push(min);
        }
        self.heap = snapshot;
        sorted
    }

    /// The `k` records with the lowest visit counts, ascending.
    pub fn get_least_visited(&mut self, k: usize) -> Vec<BookmarkRef> {
        let mut sorted = self.all_sorted();
        sorted.truncate(k);
        sorted
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn position(&self, url: &str) -> Option<usize> {
        self.heap.iter().position(|r| r.borrow().url == url)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.visits(parent) > self.visits(index) {
                self.heap.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let mut smallest = index;
            let left = 2 * index + 1;
            let right = 2 * index + 2;

            if left < self.heap.len() && self.visits(left) < self.visits(smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.visits(right) < self.visits(smallest) {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}
