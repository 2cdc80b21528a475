// Markdex coordinator
// The bookmark index owns one instance of each data structure and applies
// synchronized mutations across all of them.

pub mod bookmark_index;
