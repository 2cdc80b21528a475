// Markdex shared type definitions
// Each submodule defines types used across the index core.

pub mod bookmark;
pub mod config;
pub mod errors;
