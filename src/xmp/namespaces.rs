//! XMP namespace and structural-wrapper tables.
//!
//! Prefixes and URIs follow the exiv2 XMP schema reference
//! (<https://www.exiv2.org/tags-xmp-xmp.html>). A prefix in
//! [`NAMESPACE_URIS`] marks a subtree as a schema-owned metadata block;
//! a prefix in [`STRUCTURAL_WRAPPERS`] marks an element as RDF plumbing
//! (containers, list items, references) that contributes no key of its
//! own.

use phf::{phf_map, phf_set};

/// Recognized XMP schema prefixes and their namespace URIs.
pub static NAMESPACE_URIS: phf::Map<&'static str, &'static str> = phf_map! {
    "dc" => "http://purl.org/dc/elements/1.1/",
    "rdf" => "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
    "xmp" => "http://ns.adobe.com/xap/1.0/",
    "xmpRights" => "http://ns.adobe.com/xap/1.0/rights/",
    "xmpMM" => "http://ns.adobe.com/xap/1.0/mm/",
    "xmpBJ" => "http://ns.adobe.com/xap/1.0/bj/",
    "xmpTPg" => "http://ns.adobe.com/xap/1.0/t/pg/",
    "xmpDM" => "http://ns.adobe.com/xmp/1.0/DynamicMedia/",
    "pdf" => "http://ns.adobe.com/pdf/1.3/",
    "photoshop" => "http://ns.adobe.com/photoshop/1.0/",
    "crs" => "http://ns.adobe.com/camera-raw-settings/1.0/",
    "crss" => "http://ns.adobe.com/camera-raw-saved-settings/1.0/",
    "tiff" => "http://ns.adobe.com/tiff/1.0/",
    "exif" => "http://ns.adobe.com/exif/1.0/",
    "exifEX" => "http://cipa.jp/exif/1.0/",
    "aux" => "http://ns.adobe.com/exif/1.0/aux/",
    "Iptc4xmpCore" => "http://iptc.org/std/Iptc4xmpCore/1.0/xmlns/",
    "Iptc4xmpExt" => "http://iptc.org/std/Iptc4xmpExt/2008-02-29/",
    "plus" => "http://ns.useplus.org/ldf/xmp/1.0/",
    "mwg-rs" => "http://www.metadataworkinggroup.com/schemas/regions/",
    "mwg-kw" => "http://www.metadataworkinggroup.com/schemas/keywords/",
    "dwc" => "http://rs.tdwg.org/dwc/index.htm",
    "dcterms" => "http://purl.org/dc/terms/",
    "digiKam" => "http://www.digikam.org/ns/1.0/",
    "kipi" => "http://www.digikam.org/ns/kipi/1.0/",
    "GPano" => "http://ns.google.com/photos/1.0/panorama/",
    "lr" => "http://ns.adobe.com/lightroom/1.0/",
    "acdsee" => "http://ns.acdsee.com/iptc/1.0/",
    "mediapro" => "http://ns.iview-multimedia.com/mediapro/1.0/",
    "expressionmedia" => "http://ns.microsoft.com/expressionmedia/1.0/",
    "MicrosoftPhoto" => "http://ns.microsoft.com/photo/1.0/",
    "MP" => "http://ns.microsoft.com/photo/1.2/",
    "MPRI" => "http://ns.microsoft.com/photo/1.2/t/RegionInfo#",
    "MPReg" => "http://ns.microsoft.com/photo/1.2/t/Region#",
};

/// Schema prefixes whose subtrees fold in under their tag suffix.
///
/// Note `rdf` is a namespace URI above but deliberately not a schema
/// prefix here: RDF elements are structure, not metadata keys.
pub static NAMESPACE_TAGS: phf::Set<&'static str> = phf_set! {
    "dc", "xmp", "xmpRights", "xmpMM", "xmpBJ", "xmpTPg", "xmpDM", "pdf", "photoshop",
    "crs", "crss", "tiff", "exif", "exifEX", "aux", "Iptc4xmpCore", "Iptc4xmpExt",
    "plus", "mwg-rs", "mwg-kw", "dwc", "dcterms", "digiKam", "kipi", "GPano", "lr",
    "acdsee", "mediapro", "expressionmedia", "MicrosoftPhoto", "MP", "MPRI", "MPReg",
};

/// RDF container, reference, list and event markers.
pub static STRUCTURAL_WRAPPERS: phf::Set<&'static str> = phf_set! {
    "stRef", "rdf", "li", "Alt", "stEvt", "Bag", "Seq", "crs",
};

/// Whether a tag prefix names a recognized XMP schema.
#[inline]
pub fn is_namespace_tag(prefix: &str) -> bool {
    NAMESPACE_TAGS.contains(prefix)
}

/// Whether a tag prefix or suffix is RDF structure rather than a key.
#[inline]
pub fn is_structural_wrapper(name: &str) -> bool {
    STRUCTURAL_WRAPPERS.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_tags_match_uri_table() {
        // Every schema prefix has a URI; rdf is URI-only.
        for prefix in NAMESPACE_TAGS.iter() {
            assert!(NAMESPACE_URIS.contains_key(prefix), "missing URI for {prefix}");
        }
        assert_eq!(NAMESPACE_URIS.len(), NAMESPACE_TAGS.len() + 1);
    }

    #[test]
    fn test_classification() {
        assert!(is_namespace_tag("dc"));
        assert!(is_namespace_tag("MicrosoftPhoto"));
        assert!(!is_namespace_tag("rdf"));
        assert!(is_structural_wrapper("li"));
        assert!(is_structural_wrapper("rdf"));
        assert!(!is_structural_wrapper("dc"));
    }
}
