//! pngmeta - a Rust library for extracting metadata from PNG images
//!
//! This library reads every metadata chunk a PNG can carry — the IHDR
//! header fields, background and color-space hints, tEXt keyword pairs,
//! the XMP document embedded in iTXt, and the raw eXIf blob — and folds
//! them into one hierarchical tree with colon-path lookup and a
//! two-column textual rendering. Extraction is read-only and makes a
//! single pass over the stream; pixel data is skipped, never decoded.
//!
//! # Example - Reading a PNG file
//!
//! ```no_run
//! use pngmeta::PngMetadata;
//!
//! # fn main() -> pngmeta::Result<()> {
//! let metadata = PngMetadata::open("photo.png")?;
//!
//! // Path-based lookup
//! if let Some(width) = metadata.get("IHDR:ImageWidth") {
//!     println!("width: {width:?}");
//! }
//!
//! // Two-column display of everything found
//! println!("{metadata}");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Injecting an EXIF tag decoder
//!
//! The eXIf chunk holds a legacy camera metadata block whose tag layout
//! is outside this crate; plug in any decoder that turns the blob into
//! flat tag/value pairs:
//!
//! ```no_run
//! use indexmap::IndexMap;
//! use pngmeta::Extractor;
//!
//! # fn main() -> pngmeta::Result<()> {
//! let extractor = Extractor::new().with_exif_decoder(
//!     |blob: &[u8]| -> pngmeta::Result<IndexMap<String, String>> {
//!         let mut tags = IndexMap::new();
//!         tags.insert("TagCount".to_string(), blob.len().to_string());
//!         Ok(tags)
//!     },
//! );
//! let metadata = extractor.extract_path("photo.png")?;
//! println!("{:?}", metadata.get("exif:TagCount"));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Tolerant extraction
//!
//! ```no_run
//! use pngmeta::PngMetadata;
//!
//! // Any failure (missing file, bad signature, truncation) yields None.
//! if let Some(metadata) = PngMetadata::extract("maybe.png") {
//!     for warning in metadata.warnings() {
//!         eprintln!("note: {warning}");
//!     }
//! }
//! ```

/// Common types and utilities: errors, big-endian readers, signature
/// detection.
pub mod common;

/// The EXIF collaborator seam for decoding eXIf chunk payloads.
pub mod exif;

/// The PNG chunk scanner, per-chunk decoders, and top-level API.
pub mod png;

/// The hierarchical metadata tree and its merge/flatten transforms.
pub mod tree;

/// XMP (RDF/XML) document extraction from the iTXt chunk.
pub mod xmp;

// Re-export commonly used types for convenience
pub use common::error::{Error, Result, Warning};
pub use exif::ExifDecoder;
pub use png::{Extractor, PngMetadata};
pub use tree::Node;
