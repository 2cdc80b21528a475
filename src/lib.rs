//! Markdex — an in-memory bookmark index built on classic data structures.
//!
//! This library crate exposes all modules for use by embedding applications
//! and integration tests.

pub mod dsa;
pub mod managers;
pub mod types;
