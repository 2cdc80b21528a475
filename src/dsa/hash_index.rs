//! Open-addressed hash table mapping URLs to bookmark records.
//!
//! Backs O(1)-average lookup, insertion, deletion, and duplicate detection
//! for the bookmark index. Collisions are resolved by linear probing;
//! deleted slots become tombstones so that probe chains built across earlier
//! insertions stay intact.

use crate::types::bookmark::BookmarkRef;

const LOAD_FACTOR_NUM: usize = 3;
const LOAD_FACTOR_DEN: usize = 4;
const MIN_GROWN_SIZE: usize = 100;

enum Slot {
    Empty,
    Tombstone,
    Occupied { key: String, value: BookmarkRef },
}

/// Hash map from URL to bookmark record, open-addressed with linear probing.
pub struct HashIndex {
    table: Vec<Slot>,
    live: usize,
    tombstones: usize,
}

impl HashIndex {
    /// Creates a table with the given initial slot count.
    pub fn new(initial_size: usize) -> Self {
        let size = initial_size.max(1);
        Self {
            table: (0..size).map(|_| Slot::Empty).collect(),
            live: 0,
            tombstones: 0,
        }
    }

    /// Rolling 32-bit string hash: `h = h*31 + char`, wrapping.
    fn hash(&self, key: &str) -> usize {
        let mut h: u32 = 0;
        for ch in key.chars() {
            h = h.wrapping_mul(31).wrapping_add(ch as u32);
        }
        h as usize % self.table.len()
    }

    /// Inserts or overwrites the record for `key`.
    pub fn put(&mut self, key: &str, value: BookmarkRef) {
        // Tombstones count toward the threshold: they lengthen probe chains
        // just like live entries until a resize clears them.
        if (self.live + self.tombstones) * LOAD_FACTOR_DEN >= self.table.len() * LOAD_FACTOR_NUM {
            self.resize();
        }

        let base = self.hash(key);
        let len = self.table.len();
        let mut first_tombstone: Option<usize> = None;
        let mut found: Option<(usize, bool)> = None;

        for i in 0..len {
            let idx = (base + i) % len;
            match &self.table[idx] {
                Slot::Empty => {
                    // Reuse the earliest tombstone on this chain if we saw one.
                    found = Some((first_tombstone.unwrap_or(idx), false));
                    break;
                }
                Slot::Tombstone => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(idx);
                    }
                }
                Slot::Occupied { key: k, .. } => {
                    if k == key {
                        found = Some((idx, true));
                        break;
                    }
                }
            }
        }

        // A full cycle without an empty slot means the key is absent and the
        // chain is saturated; fall back to the earliest tombstone.
        let (idx, is_update) = match found.or(first_tombstone.map(|t| (t, false))) {
            Some(target) => target,
            None => return,
        };

        if !is_update {
            if matches!(self.table[idx], Slot::Tombstone) {
                self.tombstones -= 1;
            }
            self.live += 1;
        }
        self.table[idx] = Slot::Occupied {
            key: key.to_string(),
            value,
        };
    }

    /// Returns the record for `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Option<&BookmarkRef> {
        let idx = self.probe(key)?;
        match &self.table[idx] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Removes the record for `key`. Returns whether something was removed.
    ///
    /// The slot becomes a tombstone, not an empty slot: a later lookup for a
    /// key inserted further along the same probe chain must not stop here.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.probe(key) {
            Some(idx) => {
                self.table[idx] = Slot::Tombstone;
                self.live -= 1;
                self.tombstones += 1;
                true
            }
            None => false,
        }
    }

    /// Whether a record exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.probe(key).is_some()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the table holds no live records.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Current slot count of the backing table.
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// All live records, in unspecified order.
    pub fn values(&self) -> Vec<BookmarkRef> {
        self.table
            .iter()
            .filter_map(|slot| match slot {
                Slot::Occupied { value, .. } => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    /// All live keys, in unspecified order.
    pub fn keys(&self) -> Vec<String> {
        self.table
            .iter()
            .filter_map(|slot| match slot {
                Slot::Occupied { key, .. } => Some(key.clone()),
                _ => None,
            })
            .collect()
    }

    /// All live `(key, record)` pairs, in unspecified order.
    pub fn entries(&self) -> Vec<(String, BookmarkRef)> {
        self.table
            .iter()
            .filter_map(|slot| match slot {
                Slot::Occupied { key, value } => Some((key.clone(), value.clone())),
                _ => None,
            })
            .collect()
    }

    /// Walks the probe chain for `key`. Returns the slot index holding it,
    /// or `None` once an empty slot (or a full cycle) proves it absent.
    fn probe(&self, key: &str) -> Option<usize> {
        let base = self.hash(key);
        let len = self.table.len();

        for i in 0..len {
            let idx = (base + i) % len;
            match &self.table[idx] {
                Slot::Empty => return None,
                Slot::Tombstone => {}
                Slot::Occupied { key: k, .. } => {
                    if k == key {
                        return Some(idx);
                    }
                }
            }
        }
        None
    }

    /// Doubles the table (minimum 100 slots) and rehashes every live entry.
    /// Probe sequences are recomputed, never migrated; tombstones are dropped.
    fn resize(&mut self) {
        let new_size = (self.table.len() * 2).max(MIN_GROWN_SIZE);
        let old_table = std::mem::replace(
            &mut self.table,
            (0..new_size).map(|_| Slot::Empty).collect(),
        );
        self.live = 0;
        self.tombstones = 0;

        for slot in old_table {
            if let Slot::Occupied { key, value } = slot {
                self.put(&key, value);
            }
        }
    }
}
