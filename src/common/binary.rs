//! Binary data parsing utilities for the PNG container format.
//!
//! PNG stores all multi-byte integers in network (big-endian) byte order.
//! Every reader here is bounds-checked and reports an [`Error::Truncated`]
//! instead of panicking when a chunk claims more bytes than remain.

use crate::common::error::{Error, Result};
use zerocopy::{BE, FromBytes, U16, U32};

/// Read a single byte at the given offset.
#[inline]
pub fn read_u8(data: &[u8], offset: usize) -> Result<u8> {
    data.get(offset).copied().ok_or(Error::Truncated {
        expected: offset + 1,
        available: data.len(),
    })
}

/// Read a big-endian u16 from a byte slice at the given offset.
///
/// # Examples
///
/// ```
/// use pngmeta::common::binary::read_u16_be;
/// let data = [0x12, 0x34, 0x56, 0x78];
/// assert_eq!(read_u16_be(&data, 0).unwrap(), 0x1234);
/// assert_eq!(read_u16_be(&data, 2).unwrap(), 0x5678);
/// ```
#[inline]
pub fn read_u16_be(data: &[u8], offset: usize) -> Result<u16> {
    if offset + 2 > data.len() {
        return Err(Error::Truncated {
            expected: offset + 2,
            available: data.len(),
        });
    }
    U16::<BE>::read_from_bytes(&data[offset..offset + 2])
        .map(|v| v.get())
        .map_err(|_| Error::Truncated {
            expected: offset + 2,
            available: data.len(),
        })
}

/// Read a big-endian u32 from a byte slice at the given offset.
///
/// # Examples
///
/// ```
/// use pngmeta::common::binary::read_u32_be;
/// let data = [0x12, 0x34, 0x56, 0x78];
/// assert_eq!(read_u32_be(&data, 0).unwrap(), 0x12345678);
/// ```
#[inline]
pub fn read_u32_be(data: &[u8], offset: usize) -> Result<u32> {
    if offset + 4 > data.len() {
        return Err(Error::Truncated {
            expected: offset + 4,
            available: data.len(),
        });
    }
    U32::<BE>::read_from_bytes(&data[offset..offset + 4])
        .map(|v| v.get())
        .map_err(|_| Error::Truncated {
            expected: offset + 4,
            available: data.len(),
        })
}

/// Borrow `len` bytes starting at `offset`.
#[inline]
pub fn read_slice(data: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    let end = offset.checked_add(len).ok_or(Error::Truncated {
        expected: usize::MAX,
        available: data.len(),
    })?;
    if end > data.len() {
        return Err(Error::Truncated {
            expected: end,
            available: data.len(),
        });
    }
    Ok(&data[offset..end])
}

/// Borrow a fixed-width array starting at `offset`.
#[inline]
pub fn read_array<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N]> {
    let slice = read_slice(data, offset, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(slice);
    Ok(out)
}
