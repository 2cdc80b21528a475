use serde::{Deserialize, Serialize};

/// Capacity configuration for the bookmark index.
///
/// All fields have serde defaults so an embedding application can load a
/// partial override (e.g. from a JSON settings file) without spelling out
/// every knob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Maximum number of live bookmarks.
    #[serde(default = "default_max_bookmarks")]
    pub max_bookmarks: usize,
    /// Capacity of the recently-visited list.
    #[serde(default = "default_recent_capacity")]
    pub recent_capacity: usize,
    /// Initial slot count of the URL hash table.
    #[serde(default = "default_initial_table_size")]
    pub initial_table_size: usize,
}

fn default_max_bookmarks() -> usize {
    100
}

fn default_recent_capacity() -> usize {
    20
}

fn default_initial_table_size() -> usize {
    50
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_bookmarks: default_max_bookmarks(),
            recent_capacity: default_recent_capacity(),
            initial_table_size: default_initial_table_size(),
        }
    }
}
