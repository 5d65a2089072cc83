//! Fixed signatures, chunk type codes, and lookup tables.
//!
//! Every table here is immutable compile-time data; nothing in the
//! pipeline mutates global state.

use phf::phf_map;

/// Magic bytes that start every PNG file
pub const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\x0d\x0a\x1a\x0a";

/// Image header chunk: width, height, bit depth and the enum fields
pub const CHUNK_IHDR: &[u8; 4] = b"IHDR";
/// Terminal marker, ends the scan
pub const CHUNK_IEND: &[u8; 4] = b"IEND";
/// Latin-1 keyword/text pairs, NUL-separated, many per image
pub const CHUNK_TEXT: &[u8; 4] = b"tEXt";
/// International (UTF-8) text, carries the embedded XMP document
pub const CHUNK_ITXT: &[u8; 4] = b"iTXt";
/// Raw EXIF blob, handed to the injected decoder
pub const CHUNK_EXIF: &[u8; 4] = b"eXIf";
/// Standard RGB rendering intent byte
pub const CHUNK_SRGB: &[u8; 4] = b"sRGB";
/// Default background color
pub const CHUNK_BKGD: &[u8; 4] = b"bKGD";

/// Keyword marking an iTXt payload as an Adobe XMP document
pub const XMP_MARKER: &[u8] = b"XML:com.adobe.xmp";

/// Expected root element of an XMP document
pub const XMP_ROOT: &str = "x:xmpmeta";

/// Output field names for the seven IHDR fields, in chunk order.
pub const IHDR_FIELD_NAMES: [&str; 7] = [
    "ImageWidth",
    "ImageHeight",
    "BitDepth",
    "ColorType",
    "Compression",
    "Filter",
    "Interlace",
];

/// IHDR color type byte to display label
pub static COLOR_TYPES: phf::Map<u8, &'static str> = phf_map! {
    0u8 => "Grayscale",
    2u8 => "RGB",
    3u8 => "Palette",
    4u8 => "Grayscale with Alpha",
    6u8 => "RGB with Alpha",
};

/// IHDR compression method byte to display label
pub static COMPRESSION_METHODS: phf::Map<u8, &'static str> = phf_map! {
    0u8 => "Deflate/Inflate",
};

/// IHDR filter method byte to display label
pub static FILTER_METHODS: phf::Map<u8, &'static str> = phf_map! {
    0u8 => "Adaptive",
};

/// IHDR interlace method byte to display label
pub static INTERLACE_METHODS: phf::Map<u8, &'static str> = phf_map! {
    0u8 => "Noninterlaced",
    1u8 => "Adam7 Interlace",
};

/// sRGB rendering intent byte to display label; anything else is "Unknown"
pub static RENDERING_INTENTS: phf::Map<u8, &'static str> = phf_map! {
    0u8 => "Perceptual",
    1u8 => "Relative Colorimetric",
    2u8 => "Saturation",
    3u8 => "Absolute Colorimetric",
};
