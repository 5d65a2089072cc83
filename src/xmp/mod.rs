//! XMP (RDF/XML) metadata extraction.
//!
//! An XMP document hides inside the iTXt chunk behind the
//! `XML:com.adobe.xmp` keyword. This module parses it and folds the
//! namespace-prefixed property tree into metadata nodes.

// Submodule declarations
pub mod extract;
pub mod namespaces;

// Re-exports for convenience
pub use extract::extract_xmp;
pub use namespaces::{NAMESPACE_TAGS, NAMESPACE_URIS, STRUCTURAL_WRAPPERS};
