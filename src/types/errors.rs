use std::fmt;

// === BookmarkError ===

/// Errors returned by bookmark index operations.
///
/// Every variant is a recoverable validation failure: the index never enters
/// an unrecoverable state, and a rejected operation leaves all structures
/// unchanged.
#[derive(Debug)]
pub enum BookmarkError {
    /// A required field was empty.
    MissingField(String),
    /// A bookmark with the same URL already exists.
    DuplicateUrl(String),
    /// The configured bookmark limit has been reached.
    CapacityExceeded(usize),
    /// No bookmark exists for the given URL.
    NotFound(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::MissingField(field) => write!(f, "Missing required field: {}", field),
            BookmarkError::DuplicateUrl(url) => write!(f, "Duplicate bookmark URL: {}", url),
            BookmarkError::CapacityExceeded(max) => {
                write!(f, "Bookmark limit ({}) reached", max)
            }
            BookmarkError::NotFound(url) => write!(f, "Bookmark not found: {}", url),
        }
    }
}

impl std::error::Error for BookmarkError {}
