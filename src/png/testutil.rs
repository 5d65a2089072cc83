//! In-memory PNG assembly helpers for tests.

use crate::png::consts::PNG_SIGNATURE;

/// Encode one chunk: length, type, payload, and a dummy CRC trailer
/// (the scanner skips CRCs without checking them).
pub(crate) fn chunk(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 12);
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(payload);
    out.extend_from_slice(&[0u8; 4]);
    out
}

/// Assemble a PNG byte stream from pre-encoded chunks.
pub(crate) fn png_from_chunks(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = PNG_SIGNATURE.to_vec();
    for chunk in chunks {
        out.extend_from_slice(chunk);
    }
    out
}
