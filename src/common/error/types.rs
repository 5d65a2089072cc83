//! Unified error types for the pngmeta library.
//!
//! Container-level problems (unreadable file, bad signature, truncated
//! stream) abort extraction and surface as [`Error`]. Anything that only
//! affects a single chunk type degrades to a [`Warning`] so the rest of
//! the metadata still comes out.
use thiserror::Error;

/// Main error type for pngmeta operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stream does not start with the 8-byte PNG signature
    #[error("invalid PNG file signature")]
    BadSignature,

    /// A chunk claims more bytes than remain in the stream
    #[error("truncated PNG stream: need {expected} bytes, only {available} available")]
    Truncated { expected: usize, available: usize },

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// EXIF tag decoding error, reported by an injected decoder
    #[error("EXIF error: {0}")]
    Exif(String),
}

/// Result type for pngmeta operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Non-fatal diagnostics recorded during extraction.
///
/// Warnings are collected on the returned [`crate::PngMetadata`] and
/// mirrored through the `log` facade; they never abort extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A fixed-table lookup found no entry for an enum byte
    #[error("no {field} entry for code {value}, field omitted")]
    UnknownEnum { field: &'static str, value: u8 },

    /// XMP payload present but its root element is not `x:xmpmeta`
    #[error("XMP root element must be x:xmpmeta, got {0}")]
    UnexpectedXmpRoot(String),

    /// XMP payload present but the XML document failed to parse
    #[error("malformed XMP document: {0}")]
    MalformedXmp(String),

    /// The injected EXIF decoder rejected the eXIf payload
    #[error("EXIF decoding failed: {0}")]
    ExifDecode(String),
}
