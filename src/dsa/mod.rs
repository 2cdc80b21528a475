// Markdex data structures
// Each submodule is a self-contained textbook structure; the coordinator in
// managers/ keeps them mutually consistent.

pub mod hash_index;
pub mod min_heap;
pub mod recent_list;
pub mod title_trie;
