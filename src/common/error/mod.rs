//! Unified error types for the pngmeta library.
//!
//! This module provides the fatal [`Error`] type for container-level
//! failures and the non-fatal [`Warning`] type for per-chunk decode
//! diagnostics, presenting a consistent API to users.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result, Warning};
