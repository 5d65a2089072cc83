//! Sequential PNG chunk scanner.
//!
//! One forward pass over the byte stream: verify the signature, then
//! walk length-prefixed chunks, capturing the payloads the decoders care
//! about and skipping everything else (pixel data included) without
//! reading it. CRC trailers are skipped, never verified.

use crate::common::binary::{read_array, read_slice, read_u32_be, read_u8};
use crate::common::error::{Error, Result};
use crate::png::consts::{
    CHUNK_BKGD, CHUNK_EXIF, CHUNK_IEND, CHUNK_IHDR, CHUNK_ITXT, CHUNK_SRGB, CHUNK_TEXT,
    PNG_SIGNATURE,
};

/// The seven fixed-width IHDR fields, captured raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IhdrRaw {
    pub width: [u8; 4],
    pub height: [u8; 4],
    pub bit_depth: u8,
    pub color_type: u8,
    pub compression: u8,
    pub filter: u8,
    pub interlace: u8,
}

/// Raw payloads captured by one scan pass.
///
/// Single-payload chunk types follow a last-seen-wins policy (the format
/// guarantees at most one of each per image anyway); tEXt pairs keep
/// their order of appearance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawChunks {
    pub ihdr: Option<IhdrRaw>,
    pub exif: Option<Vec<u8>>,
    pub srgb: Option<Vec<u8>>,
    pub itxt: Option<Vec<u8>>,
    pub bkgd: Option<Vec<u8>>,
    pub text: Vec<(String, String)>,
}

/// Scan a PNG byte stream and capture the metadata chunk payloads.
///
/// Fails with [`Error::BadSignature`] if the stream does not start with
/// the 8-byte PNG signature and with [`Error::Truncated`] if any chunk
/// claims more bytes than remain. A stream that simply ends cleanly on a
/// chunk boundary without an IEND marker is accepted.
pub fn scan(data: &[u8]) -> Result<RawChunks> {
    if data.len() < PNG_SIGNATURE.len() || &data[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
        return Err(Error::BadSignature);
    }

    let mut chunks = RawChunks::default();
    let mut pos = PNG_SIGNATURE.len();

    loop {
        if pos == data.len() {
            // Clean end on a chunk boundary; tolerated like the IEND marker.
            break;
        }
        if pos > data.len() {
            return Err(Error::Truncated {
                expected: pos,
                available: data.len(),
            });
        }

        let length = read_u32_be(data, pos)? as usize;
        let chunk_type: [u8; 4] = read_array(data, pos + 4)?;
        pos += 8;

        match &chunk_type {
            CHUNK_IEND => break,
            CHUNK_TEXT => {
                let payload = read_slice(data, pos, length)?;
                chunks.text.push(split_text_pair(payload));
                pos += length + 4;
            },
            CHUNK_EXIF | CHUNK_SRGB | CHUNK_ITXT | CHUNK_BKGD => {
                let payload = read_slice(data, pos, length)?.to_vec();
                match &chunk_type {
                    CHUNK_EXIF => chunks.exif = Some(payload),
                    CHUNK_SRGB => chunks.srgb = Some(payload),
                    CHUNK_ITXT => chunks.itxt = Some(payload),
                    _ => chunks.bkgd = Some(payload),
                }
                pos += length + 4;
            },
            CHUNK_IHDR => {
                chunks.ihdr = Some(read_ihdr_fields(data, pos)?);
                pos += length + 4;
            },
            other => {
                // Neither captured nor read; the skip is still bounds-checked
                // at the top of the next iteration.
                log::debug!(
                    "skipping {} chunk ({length} bytes)",
                    String::from_utf8_lossy(other)
                );
                pos += length + 4;
            },
        }
    }

    Ok(chunks)
}

/// Capture the seven IHDR fields at their fixed offsets.
fn read_ihdr_fields(data: &[u8], pos: usize) -> Result<IhdrRaw> {
    Ok(IhdrRaw {
        width: read_array(data, pos)?,
        height: read_array(data, pos + 4)?,
        bit_depth: read_u8(data, pos + 8)?,
        color_type: read_u8(data, pos + 9)?,
        compression: read_u8(data, pos + 10)?,
        filter: read_u8(data, pos + 11)?,
        interlace: read_u8(data, pos + 12)?,
    })
}

/// Split a tEXt payload at its single NUL separator.
///
/// A payload with no NUL yields the whole payload as keyword and an
/// empty value.
fn split_text_pair(payload: &[u8]) -> (String, String) {
    match memchr::memchr(0, payload) {
        Some(nul) => (
            String::from_utf8_lossy(&payload[..nul]).into_owned(),
            String::from_utf8_lossy(&payload[nul + 1..]).into_owned(),
        ),
        None => (String::from_utf8_lossy(payload).into_owned(), String::new()),
    }
}
