//! PNG signature sniffing helpers.
//!
//! The extraction pipeline itself assumes its input is a PNG and fails
//! with [`crate::Error::BadSignature`] otherwise; these helpers let
//! callers check cheaply up front without opening the full pipeline.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::png::consts::PNG_SIGNATURE;

/// Check whether a byte slice starts with the PNG signature.
///
/// # Examples
///
/// ```
/// use pngmeta::common::detection::looks_like_png;
///
/// assert!(looks_like_png(b"\x89PNG\x0d\x0a\x1a\x0a\x00\x00"));
/// assert!(!looks_like_png(b"GIF89a"));
/// ```
pub fn looks_like_png(bytes: &[u8]) -> bool {
    bytes.len() >= PNG_SIGNATURE.len() && &bytes[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}

/// Check whether the file at `path` starts with the PNG signature.
///
/// Returns `false` if the file cannot be opened or is shorter than the
/// signature.
pub fn is_png<P: AsRef<Path>>(path: P) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };
    let mut magic = [0u8; 8];
    match file.read_exact(&mut magic) {
        Ok(()) => looks_like_png(&magic),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_looks_like_png() {
        assert!(looks_like_png(b"\x89PNG\x0d\x0a\x1a\x0a"));
        assert!(!looks_like_png(b"\x89PNG"));
        assert!(!looks_like_png(b"\x89PNG\x0d\x0a\x1a\x0b"));
        assert!(!looks_like_png(b""));
    }

    #[test]
    fn test_is_png_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG\x0d\x0a\x1a\x0a\x00\x00\x00\x00")
            .unwrap();
        assert!(is_png(file.path()));

        let mut other = tempfile::NamedTempFile::new().unwrap();
        other.write_all(b"not a png at all").unwrap();
        assert!(!is_png(other.path()));

        assert!(!is_png("/definitely/does/not/exist.png"));
    }
}
