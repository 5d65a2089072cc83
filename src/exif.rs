//! The EXIF collaborator seam.
//!
//! The eXIf chunk carries a legacy camera metadata block whose tag
//! decoding is outside this crate. An [`ExifDecoder`] implementation is
//! injected into [`crate::Extractor`]; its output merges into the tree
//! under the `exif` key. No decoder, or a failing one, simply leaves the
//! `exif` subtree out — never aborting the rest of the extraction.

use indexmap::IndexMap;

use crate::common::error::Result;

/// Decodes a raw eXIf chunk payload into flat tag/value pairs.
pub trait ExifDecoder {
    /// Decode the blob into a mapping from tag name to display value.
    fn decode_tags(&self, blob: &[u8]) -> Result<IndexMap<String, String>>;
}

impl<F> ExifDecoder for F
where
    F: Fn(&[u8]) -> Result<IndexMap<String, String>>,
{
    fn decode_tags(&self, blob: &[u8]) -> Result<IndexMap<String, String>> {
        self(blob)
    }
}
