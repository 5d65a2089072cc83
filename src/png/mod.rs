//! Top-level PNG metadata extraction API.
//!
//! One extraction call scans the chunk stream once, decodes every
//! captured chunk type, and freezes the results into a single
//! [`PngMetadata`] tree with lexicographically sorted top-level keys.
//! Container-level problems (bad signature, truncation, unreadable
//! file) abort with an error; anything confined to one chunk type
//! degrades to a [`Warning`] and leaves the rest of the tree intact.

// Submodule declarations
pub mod chunks;
pub mod consts;
pub mod decoders;

#[cfg(test)]
pub(crate) mod testutil;

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::common::error::{Result, Warning};
use crate::exif::ExifDecoder;
use crate::tree::{self, Node, merge};
use crate::xmp;

/// Extraction pipeline configuration.
///
/// The only configurable piece is the EXIF collaborator: the eXIf chunk
/// payload is handed to the injected [`ExifDecoder`], and without one
/// the blob is simply ignored.
///
/// # Examples
///
/// ```no_run
/// use pngmeta::Extractor;
///
/// # fn main() -> pngmeta::Result<()> {
/// let metadata = Extractor::new().extract_path("photo.png")?;
/// if let Some(width) = metadata.get("IHDR:ImageWidth") {
///     println!("width: {width:?}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct Extractor {
    exif_decoder: Option<Box<dyn ExifDecoder>>,
}

impl Extractor {
    /// Create an extractor with no EXIF collaborator.
    pub fn new() -> Self {
        Self { exif_decoder: None }
    }

    /// Inject the decoder for eXIf chunk payloads.
    pub fn with_exif_decoder(mut self, decoder: impl ExifDecoder + 'static) -> Self {
        self.exif_decoder = Some(Box::new(decoder));
        self
    }

    /// Extract the metadata tree from an in-memory PNG byte stream.
    pub fn extract_from_bytes(&self, data: &[u8]) -> Result<PngMetadata> {
        let raw = chunks::scan(data)?;

        let mut entries: IndexMap<String, Node> = IndexMap::new();
        let mut warnings: Vec<Warning> = Vec::new();

        // Decoding order follows dependency: XMP and tEXt may both seed
        // the `exif` group before the eXIf blob merges into it.
        if let Some(itxt) = &raw.itxt
            && let Some(node) = xmp::extract_xmp(itxt, &mut warnings)
        {
            entries.insert("xmp".to_string(), node);
        }

        decoders::apply_text(&mut entries, &raw.text);

        if let Some(blob) = &raw.exif
            && let Some(decoder) = &self.exif_decoder
        {
            match decoder.decode_tags(blob) {
                Ok(tags) => merge_exif_tags(&mut entries, tags),
                Err(err) => warnings.push(Warning::ExifDecode(err.to_string())),
            }
        }

        if let Some(payload) = &raw.bkgd {
            entries.insert("bKGD".to_string(), decoders::decode_bkgd(payload));
        }
        if let Some(payload) = &raw.srgb {
            entries.insert("sRGB".to_string(), decoders::decode_srgb(payload));
        }
        if let Some(header) = &raw.ihdr {
            entries.insert(
                "IHDR".to_string(),
                decoders::decode_ihdr(header, &mut warnings),
            );
        }

        entries.sort_unstable_keys();

        for warning in &warnings {
            log::warn!("{warning}");
        }

        Ok(PngMetadata { entries, warnings })
    }

    /// Read and extract the file at `path`.
    pub fn extract_path<P: AsRef<Path>>(&self, path: P) -> Result<PngMetadata> {
        let data = fs::read(path)?;
        self.extract_from_bytes(&data)
    }
}

/// Merge decoded EXIF tags under the top-level `exif` key.
///
/// tEXt pairs may already have seeded an `exif` group; conflicts follow
/// the tree merge rule (equal values unchanged, unequal comma-joined).
fn merge_exif_tags(entries: &mut IndexMap<String, Node>, tags: IndexMap<String, String>) {
    if tags.is_empty() {
        return;
    }
    let tag_map: IndexMap<String, Node> = tags
        .into_iter()
        .map(|(name, value)| (name, Node::Scalar(value)))
        .collect();
    match entries.entry("exif".to_string()) {
        Entry::Occupied(entry) => merge(entry.into_mut(), Node::Map(tag_map)),
        Entry::Vacant(entry) => {
            entry.insert(Node::Map(tag_map));
        },
    }
}

/// The finalized metadata tree for one PNG image.
///
/// Immutable after construction. Top-level keys are sorted
/// lexicographically; every path resolves to a scalar or a map.
#[derive(Debug)]
pub struct PngMetadata {
    entries: IndexMap<String, Node>,
    warnings: Vec<Warning>,
}

impl PngMetadata {
    /// Extract metadata from the PNG file at `path` with no EXIF
    /// collaborator.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Extractor::new().extract_path(path)
    }

    /// Extract metadata from an in-memory PNG byte stream with no EXIF
    /// collaborator.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Extractor::new().extract_from_bytes(data)
    }

    /// Convenience wrapper: any failure yields `None` instead of an
    /// error.
    pub fn extract<P: AsRef<Path>>(path: P) -> Option<Self> {
        Self::open(path).ok()
    }

    /// Look up a node by colon-separated path.
    ///
    /// ```
    /// use pngmeta::PngMetadata;
    ///
    /// let metadata = PngMetadata::from_bytes(b"\x89PNG\x0d\x0a\x1a\x0a").unwrap();
    /// assert!(metadata.get("exif:THUMBNAIL:Compression").is_none());
    /// ```
    pub fn get(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split(':');
        let mut node = self.entries.get(segments.next()?)?;
        for segment in segments {
            node = node.child(segment)?;
        }
        Some(node)
    }

    /// The full tree, top-level keys sorted.
    pub fn entries(&self) -> &IndexMap<String, Node> {
        &self.entries
    }

    /// Non-fatal diagnostics recorded during extraction.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Whether extraction found no metadata at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Two-column textual rendering.
    ///
    /// The key column is padded to the longest path plus ten spaces,
    /// below a `--Metadata--` / `--Value--` header.
    pub fn render(&self) -> String {
        let rows = tree::rows(&self.entries);
        let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(12) + 10;

        let mut out = String::new();
        out.push_str(&format!("{:<width$}--Value--\n", "--Metadata--"));
        for (key, value) in &rows {
            out.push_str(&format!("{key:<width$}{value}\n"));
        }
        out
    }

    /// The rendering wrapped in `<pre>` for non-terminal display.
    pub fn to_html(&self) -> String {
        format!("<pre>\n{}</pre>\n", self.render())
    }
}

impl fmt::Display for PngMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
