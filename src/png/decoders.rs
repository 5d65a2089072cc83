//! Pure per-chunk-type decoders.
//!
//! Each function turns one captured payload into tree nodes using the
//! fixed tables in [`crate::png::consts`]. Decoders never fail: an enum
//! byte with no table entry drops that field and records a
//! [`Warning::UnknownEnum`] instead of aborting the extraction.

use indexmap::IndexMap;

use crate::common::binary::read_u16_be;
use crate::common::error::Warning;
use crate::png::chunks::IhdrRaw;
use crate::png::consts::{
    COLOR_TYPES, COMPRESSION_METHODS, FILTER_METHODS, IHDR_FIELD_NAMES, INTERLACE_METHODS,
    RENDERING_INTENTS,
};
use crate::tree::Node;

/// Decode the IHDR fields into a map keyed by the names in
/// [`IHDR_FIELD_NAMES`].
///
/// Width and height are the big-endian integers verbatim, bit depth is
/// the raw byte, and the four enum fields go through their label tables.
pub fn decode_ihdr(raw: &IhdrRaw, warnings: &mut Vec<Warning>) -> Node {
    let mut map = IndexMap::new();
    map.insert(
        IHDR_FIELD_NAMES[0].to_string(),
        Node::scalar(u32::from_be_bytes(raw.width).to_string()),
    );
    map.insert(
        IHDR_FIELD_NAMES[1].to_string(),
        Node::scalar(u32::from_be_bytes(raw.height).to_string()),
    );
    map.insert(
        IHDR_FIELD_NAMES[2].to_string(),
        Node::scalar(raw.bit_depth.to_string()),
    );

    let labelled: [(usize, u8, &phf::Map<u8, &'static str>); 4] = [
        (3, raw.color_type, &COLOR_TYPES),
        (4, raw.compression, &COMPRESSION_METHODS),
        (5, raw.filter, &FILTER_METHODS),
        (6, raw.interlace, &INTERLACE_METHODS),
    ];
    for (position, value, table) in labelled {
        let field = IHDR_FIELD_NAMES[position];
        match table.get(&value) {
            Some(label) => {
                map.insert(field.to_string(), Node::scalar(*label));
            },
            None => warnings.push(Warning::UnknownEnum { field, value }),
        }
    }

    Node::Map(map)
}

/// Decode a bKGD payload into its space-joined numeric components.
///
/// A payload shorter than two bytes is a single palette index; anything
/// longer is a run of big-endian 16-bit values (one for grayscale, three
/// for RGB), in payload order. A trailing odd byte is ignored.
pub fn decode_bkgd(payload: &[u8]) -> Node {
    if payload.len() < 2 {
        let value = payload.first().copied().unwrap_or(0);
        return Node::scalar(value.to_string());
    }

    let mut parts = Vec::with_capacity(payload.len() / 2);
    let mut offset = 0;
    while let Ok(value) = read_u16_be(payload, offset) {
        parts.push(value.to_string());
        offset += 2;
    }
    Node::scalar(parts.join(" "))
}

/// Decode an sRGB payload's rendering intent byte.
///
/// Unknown intents (and an empty payload) become the literal "Unknown".
pub fn decode_srgb(payload: &[u8]) -> Node {
    let label = payload
        .first()
        .and_then(|intent| RENDERING_INTENTS.get(intent).copied())
        .unwrap_or("Unknown");
    Node::scalar(label)
}

/// Fold captured tEXt pairs into the metadata map.
///
/// Each keyword splits on `:` into up to three parts (group, tag,
/// subtag); missing parts are simply absent. The pair lands at
/// `[group][tag]` (or `[group]` when there is no tag), with a subtag
/// wrapping the value in a one-entry map. Later pairs with the same
/// destination overwrite earlier ones.
pub fn apply_text(entries: &mut IndexMap<String, Node>, pairs: &[(String, String)]) {
    for (keyword, value) in pairs {
        let mut parts = keyword.splitn(3, ':');
        let group = parts.next().unwrap_or_default().to_string();
        let tag = parts.next().map(normalize_tag);
        let subtag = parts.next();

        let leaf = match subtag {
            Some(subtag) => {
                let mut wrapped = IndexMap::new();
                wrapped.insert(subtag.to_string(), Node::scalar(value.clone()));
                Node::Map(wrapped)
            },
            None => Node::scalar(value.clone()),
        };

        match tag {
            Some(tag) => {
                let slot = entries
                    .entry(group)
                    .or_insert_with(Node::empty_map);
                if let Node::Map(group_map) = slot {
                    group_map.insert(tag, leaf);
                } else {
                    // A scalar already claimed this group; the keyed pair
                    // replaces it with a fresh group map.
                    let mut group_map = IndexMap::new();
                    group_map.insert(tag, leaf);
                    *slot = Node::Map(group_map);
                }
            },
            None => {
                entries.insert(group, leaf);
            },
        }
    }
}

/// The original tool writes thumbnail tags in lowercase; the tree keys
/// them uppercase.
fn normalize_tag(tag: &str) -> String {
    if tag == "thumbnail" {
        tag.to_uppercase()
    } else {
        tag.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ihdr(color_type: u8, interlace: u8) -> IhdrRaw {
        IhdrRaw {
            width: [0, 0, 1, 0],
            height: [0, 0, 0, 200],
            bit_depth: 8,
            color_type,
            compression: 0,
            filter: 0,
            interlace,
        }
    }

    #[test]
    fn test_ihdr_table_lookups() {
        let mut warnings = Vec::new();
        let node = decode_ihdr(&ihdr(2, 1), &mut warnings);
        let map = node.as_map().unwrap();
        assert_eq!(map.get("ImageWidth"), Some(&Node::scalar("256")));
        assert_eq!(map.get("ImageHeight"), Some(&Node::scalar("200")));
        assert_eq!(map.get("BitDepth"), Some(&Node::scalar("8")));
        assert_eq!(map.get("ColorType"), Some(&Node::scalar("RGB")));
        assert_eq!(map.get("Compression"), Some(&Node::scalar("Deflate/Inflate")));
        assert_eq!(map.get("Filter"), Some(&Node::scalar("Adaptive")));
        assert_eq!(map.get("Interlace"), Some(&Node::scalar("Adam7 Interlace")));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_ihdr_unknown_enum_omits_field() {
        let mut warnings = Vec::new();
        let node = decode_ihdr(&ihdr(5, 0), &mut warnings);
        let map = node.as_map().unwrap();
        assert!(map.get("ColorType").is_none());
        assert_eq!(map.get("Interlace"), Some(&Node::scalar("Noninterlaced")));
        assert_eq!(
            warnings,
            vec![Warning::UnknownEnum {
                field: "ColorType",
                value: 5,
            }]
        );
    }

    #[test]
    fn test_bkgd_single_byte_is_palette_index() {
        assert_eq!(decode_bkgd(&[7]), Node::scalar("7"));
    }

    #[test]
    fn test_bkgd_six_bytes_are_three_values() {
        let payload = [0x01, 0x00, 0x00, 0xFF, 0x00, 0x10];
        assert_eq!(decode_bkgd(&payload), Node::scalar("256 255 16"));
    }

    #[test]
    fn test_bkgd_two_bytes_is_grayscale() {
        assert_eq!(decode_bkgd(&[0x00, 0x40]), Node::scalar("64"));
    }

    #[test]
    fn test_srgb_intents() {
        assert_eq!(decode_srgb(&[0]), Node::scalar("Perceptual"));
        assert_eq!(decode_srgb(&[3]), Node::scalar("Absolute Colorimetric"));
        assert_eq!(decode_srgb(&[9]), Node::scalar("Unknown"));
        assert_eq!(decode_srgb(&[]), Node::scalar("Unknown"));
    }

    #[test]
    fn test_text_group_and_tag() {
        let mut entries = IndexMap::new();
        apply_text(
            &mut entries,
            &[("exif:Make".to_string(), "Canon".to_string())],
        );
        let group = entries.get("exif").and_then(Node::as_map).unwrap();
        assert_eq!(group.get("Make"), Some(&Node::scalar("Canon")));
    }

    #[test]
    fn test_text_subtag_wraps_value() {
        let mut entries = IndexMap::new();
        apply_text(
            &mut entries,
            &[("exif:thumbnail:Compression".to_string(), "6".to_string())],
        );
        let group = entries.get("exif").and_then(Node::as_map).unwrap();
        let thumb = group.get("THUMBNAIL").and_then(Node::as_map).unwrap();
        assert_eq!(thumb.get("Compression"), Some(&Node::scalar("6")));
    }

    #[test]
    fn test_text_last_write_wins() {
        let mut entries = IndexMap::new();
        apply_text(
            &mut entries,
            &[
                ("exif:Make".to_string(), "Canon".to_string()),
                ("exif:Make".to_string(), "Nikon".to_string()),
            ],
        );
        let group = entries.get("exif").and_then(Node::as_map).unwrap();
        assert_eq!(group.get("Make"), Some(&Node::scalar("Nikon")));
    }

    #[test]
    fn test_text_bare_keyword() {
        let mut entries = IndexMap::new();
        apply_text(
            &mut entries,
            &[("Comment".to_string(), "hello".to_string())],
        );
        assert_eq!(entries.get("Comment"), Some(&Node::scalar("hello")));
    }
}
