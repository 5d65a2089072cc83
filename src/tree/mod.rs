//! The hierarchical metadata tree and its transforms.
//!
//! Decoded chunk values, XMP properties, and EXIF tags all land in one
//! tree of [`Node`] values. [`ops`] holds the merge and flatten rules
//! shared across extraction paths.

// Submodule declarations
pub mod node;
pub mod ops;

// Re-exports for convenience
pub use node::{Node, rows};
pub use ops::{flatten, merge, merge_map};
