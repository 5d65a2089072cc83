//! Common types and utilities shared across the extraction pipeline.
//!
//! This module provides the unified error types, bounds-checked
//! big-endian readers, and signature sniffing helpers used by the
//! chunk reader and the per-chunk decoders.

// Submodule declarations
pub mod binary;
pub mod detection;
pub mod error;

// Re-exports for convenience
pub use detection::{is_png, looks_like_png};
pub use error::{Error, Result, Warning};
