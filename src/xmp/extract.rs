//! XMP tree extraction from an iTXt payload.
//!
//! The payload is recognized by its 17-byte `XML:com.adobe.xmp` keyword,
//! parsed into a small owned element tree with quick-xml, and folded
//! into metadata nodes by prefix classification: schema-prefixed
//! subtrees nest under their tag suffix, RDF plumbing flattens away, and
//! unrecognized namespaces keep their full qualified name as a two-level
//! path. The result is flattened once and lands under the top-level
//! `xmp` key.

use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::common::error::{Error, Result, Warning};
use crate::png::consts::{XMP_MARKER, XMP_ROOT};
use crate::tree::{Node, flatten, merge, merge_map};
use crate::xmp::namespaces::{is_namespace_tag, is_structural_wrapper};

/// An owned XML element: qualified name, non-xmlns attributes, children.
#[derive(Debug)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

#[derive(Debug)]
enum XmlNode {
    Element(Element),
    Text(String),
}

/// Extract the XMP metadata node from an iTXt payload.
///
/// Returns `None` without a warning when the payload is not an XMP
/// document at all; payloads that carry the XMP marker but fail to parse
/// or have an unexpected root record a [`Warning`] and still return
/// `None` — XMP problems never abort the rest of the extraction.
pub fn extract_xmp(payload: &[u8], warnings: &mut Vec<Warning>) -> Option<Node> {
    if payload.len() < XMP_MARKER.len() || &payload[..XMP_MARKER.len()] != XMP_MARKER {
        return None;
    }

    // The marker is followed by the iTXt compression and language fields,
    // all zero for XMP; strip them along with any padding.
    let document = &payload[XMP_MARKER.len()..];
    let start = document.iter().position(|&b| b != 0).unwrap_or(document.len());
    let xml = String::from_utf8_lossy(&document[start..]);

    let root = match parse_document(&xml) {
        Ok(root) => root,
        Err(err) => {
            warnings.push(Warning::MalformedXmp(err.to_string()));
            return None;
        },
    };
    if root.name != XMP_ROOT {
        warnings.push(Warning::UnexpectedXmpRoot(root.name));
        return None;
    }

    let mut node = extract(&root);
    flatten(&mut node);
    if node.is_empty() {
        return None;
    }
    Some(node)
}

/// Parse an XML document into its root element.
fn parse_document(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => stack.push(element_from(e)?),
            Ok(Event::Empty(ref e)) => {
                let element = element_from(e)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(XmlNode::Element(element)),
                    None => return Ok(element),
                }
            },
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::Xml("unbalanced end tag".to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(XmlNode::Element(element)),
                    None => return Ok(element),
                }
            },
            Ok(Event::Text(ref e)) => {
                if let Some(parent) = stack.last_mut() {
                    let text = std::str::from_utf8(e.as_ref())
                        .map_err(|e| Error::Xml(format!("invalid UTF-8 in text: {e}")))?;
                    parent.children.push(XmlNode::Text(text.to_string()));
                }
            },
            Ok(Event::CData(ref e)) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    parent.children.push(XmlNode::Text(text));
                }
            },
            Ok(Event::Eof) => {
                return Err(Error::Xml("no root element".to_string()));
            },
            Err(e) => return Err(Error::Xml(format!("XML parsing error: {e}"))),
            _ => {},
        }
        buf.clear();
    }
}

fn element_from(e: &BytesStart<'_>) -> Result<Element> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|e| Error::Xml(format!("invalid UTF-8 in tag name: {e}")))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in e.attributes().with_checks(false).flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        // Namespace declarations are wiring, not metadata.
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        attributes.push((key, String::from_utf8_lossy(&attr.value).into_owned()));
    }

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// Classification accumulator for one element's children.
///
/// Keyed entries and keyless list appends can coexist in one element;
/// [`Accumulator::finish`] resolves the combination into a single node.
#[derive(Default)]
struct Accumulator {
    map: IndexMap<String, Node>,
    items: Vec<Node>,
    text: Option<String>,
}

impl Accumulator {
    /// Merge a composite child under a key, inserting it as-is when the
    /// slot is empty.
    fn merge_under(&mut self, key: &str, value: Node) {
        match self.map.get_mut(key) {
            Some(existing) => merge(existing, value),
            None => {
                self.map.insert(key.to_string(), value);
            },
        }
    }

    /// Merge a composite child into the current level, dropping its
    /// wrapping element.
    fn merge_flat(&mut self, value: Node) {
        match value {
            Node::Map(incoming) => merge_map(&mut self.map, incoming),
            Node::List(incoming) => {
                for (index, item) in incoming.into_iter().enumerate() {
                    match self.items.get_mut(index) {
                        Some(existing) => merge(existing, item),
                        None => self.items.push(item),
                    }
                }
            },
            Node::Scalar(_) => {},
        }
    }

    /// Append a keyless list item.
    fn push(&mut self, value: Node) {
        self.items.push(value);
    }

    /// Append a list item under a key.
    ///
    /// A map already in the slot gains the item under its next free
    /// positional key; a scalar gets wrapped into a two-item list.
    fn push_under(&mut self, key: &str, value: Node) {
        match self.map.get_mut(key) {
            Some(Node::List(items)) => items.push(value),
            Some(Node::Map(inner)) => append_positional(inner, value),
            Some(other) => {
                let previous = std::mem::replace(other, Node::empty_map());
                *other = Node::List(vec![previous, value]);
            },
            None => {
                self.map.insert(key.to_string(), Node::List(vec![value]));
            },
        }
    }

    /// Append a list item two levels deep, under `[prefix][suffix]`.
    fn push_under_qualified(&mut self, prefix: &str, suffix: &str, value: Node) {
        let slot = self
            .map
            .entry(prefix.to_string())
            .or_insert_with(Node::empty_map);
        if !matches!(slot, Node::Map(_)) {
            *slot = Node::empty_map();
        }
        if let Node::Map(inner) = slot {
            match inner.get_mut(suffix) {
                Some(Node::List(items)) => items.push(value),
                Some(Node::Map(nested)) => append_positional(nested, value),
                Some(other) => {
                    let previous = std::mem::replace(other, Node::empty_map());
                    *other = Node::List(vec![previous, value]);
                },
                None => {
                    inner.insert(suffix.to_string(), Node::List(vec![value]));
                },
            }
        }
    }

    fn is_composite(&self) -> bool {
        !self.map.is_empty() || !self.items.is_empty() || self.text.is_none()
    }

    fn finish(self) -> Node {
        match (self.map.is_empty(), self.items.is_empty()) {
            (false, true) => Node::Map(self.map),
            (true, false) => Node::List(self.items),
            (false, false) => {
                // Keyed entries and appends in one element; each append
                // takes the next unoccupied positional key.
                let mut map = self.map;
                for item in self.items {
                    append_positional(&mut map, item);
                }
                Node::Map(map)
            },
            (true, true) => match self.text {
                Some(text) => Node::Scalar(text),
                None => Node::empty_map(),
            },
        }
    }
}

/// Insert `value` under the first unoccupied positional key.
fn append_positional(map: &mut IndexMap<String, Node>, value: Node) {
    let mut index = 0usize;
    while map.contains_key(index.to_string().as_str()) {
        index += 1;
    }
    map.insert(index.to_string(), value);
}

/// Recursively extract an element into a metadata node.
fn extract(element: &Element) -> Node {
    let mut acc = Accumulator::default();

    for child in &element.children {
        match child {
            XmlNode::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    acc.text = Some(trimmed.to_string());
                }
            },
            XmlNode::Element(child_element) => {
                let value = extract(child_element);
                let (prefix, suffix) = split_qualified(&child_element.name);

                if value.is_composite() {
                    if is_namespace_tag(prefix) {
                        acc.merge_under(suffix, value);
                    } else {
                        acc.merge_flat(value);
                    }
                } else if is_structural_wrapper(prefix) || is_namespace_tag(prefix) {
                    if is_structural_wrapper(suffix) {
                        acc.push(value);
                    } else {
                        acc.push_under(suffix, value);
                    }
                } else {
                    // Unrecognized namespace: keep the full qualified name.
                    acc.push_under_qualified(prefix, suffix, value);
                }
            },
        }
    }

    if acc.is_composite() && !element.attributes.is_empty() {
        let attrs: IndexMap<String, Node> = element
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), Node::scalar(value.clone())))
            .collect();
        merge_map(&mut acc.map, attrs);
    }

    acc.finish()
}

/// Split a qualified tag name on its first `:`.
///
/// A name with no colon classifies by its whole text as prefix, with an
/// empty suffix that matches neither table.
fn split_qualified(name: &str) -> (&str, &str) {
    match name.split_once(':') {
        Some((prefix, suffix)) => (prefix, suffix),
        None => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap_xmp(body: &str) -> Vec<u8> {
        let mut payload = XMP_MARKER.to_vec();
        payload.extend_from_slice(&[0, 0, 0, 0, 0]);
        payload.extend_from_slice(body.as_bytes());
        payload
    }

    fn extract_ok(body: &str) -> Node {
        let mut warnings = Vec::new();
        let node = extract_xmp(&wrap_xmp(body), &mut warnings).expect("xmp node");
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        node
    }

    #[test]
    fn test_non_xmp_payload_is_ignored() {
        let mut warnings = Vec::new();
        assert!(extract_xmp(b"just some text", &mut warnings).is_none());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unexpected_root_is_recoverable() {
        let mut warnings = Vec::new();
        let payload = wrap_xmp("<wrong:root></wrong:root>");
        assert!(extract_xmp(&payload, &mut warnings).is_none());
        assert_eq!(
            warnings,
            vec![Warning::UnexpectedXmpRoot("wrong:root".to_string())]
        );
    }

    #[test]
    fn test_malformed_document_is_recoverable() {
        let mut warnings = Vec::new();
        let payload = wrap_xmp("<x:xmpmeta><unclosed");
        assert!(extract_xmp(&payload, &mut warnings).is_none());
        assert!(matches!(warnings.as_slice(), [Warning::MalformedXmp(_)]));
    }

    #[test]
    fn test_schema_property_nests_under_suffix() {
        let node = extract_ok(
            r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
                 <rdf:RDF>
                   <rdf:Description>
                     <tiff:Make>Canon</tiff:Make>
                     <tiff:Model>EOS 5D</tiff:Model>
                   </rdf:Description>
                 </rdf:RDF>
               </x:xmpmeta>"#,
        );
        let map = node.as_map().unwrap();
        assert_eq!(map.get("Make"), Some(&Node::scalar("Canon")));
        assert_eq!(map.get("Model"), Some(&Node::scalar("EOS 5D")));
    }

    #[test]
    fn test_rdf_list_items_collapse_to_scalar() {
        // A single rdf:li inside an rdf:Alt flattens to its sole value.
        let node = extract_ok(
            r#"<x:xmpmeta>
                 <rdf:RDF>
                   <rdf:Description>
                     <dc:title>
                       <rdf:Alt>
                         <rdf:li xml:lang="x-default">Sunset</rdf:li>
                       </rdf:Alt>
                     </dc:title>
                   </rdf:Description>
                 </rdf:RDF>
               </x:xmpmeta>"#,
        );
        let map = node.as_map().unwrap();
        assert_eq!(map.get("title"), Some(&Node::scalar("Sunset")));
    }

    #[test]
    fn test_multi_item_bag_survives_flatten() {
        let node = extract_ok(
            r#"<x:xmpmeta>
                 <rdf:RDF>
                   <rdf:Description>
                     <dc:subject>
                       <rdf:Bag>
                         <rdf:li>dog</rdf:li>
                         <rdf:li>park</rdf:li>
                       </rdf:Bag>
                     </dc:subject>
                   </rdf:Description>
                 </rdf:RDF>
               </x:xmpmeta>"#,
        );
        let map = node.as_map().unwrap();
        assert_eq!(
            map.get("subject"),
            Some(&Node::List(vec![Node::scalar("dog"), Node::scalar("park")]))
        );
    }

    #[test]
    fn test_attributes_merge_into_accumulator() {
        let node = extract_ok(
            r#"<x:xmpmeta>
                 <rdf:RDF>
                   <rdf:Description xmlns:tiff="http://ns.adobe.com/tiff/1.0/"
                                    tiff:Orientation="1" tiff:XResolution="300"/>
                 </rdf:RDF>
               </x:xmpmeta>"#,
        );
        let map = node.as_map().unwrap();
        assert_eq!(map.get("tiff:Orientation"), Some(&Node::scalar("1")));
        assert_eq!(map.get("tiff:XResolution"), Some(&Node::scalar("300")));
    }

    #[test]
    fn test_unrecognized_namespace_keeps_qualified_path() {
        let node = extract_ok(
            r#"<x:xmpmeta>
                 <rdf:RDF>
                   <rdf:Description>
                     <rdf:custom>
                       <weird:Thing>42</weird:Thing>
                     </rdf:custom>
                   </rdf:Description>
                 </rdf:RDF>
               </x:xmpmeta>"#,
        );
        let map = node.as_map().unwrap();
        let weird = map.get("weird").and_then(Node::as_map).unwrap();
        assert_eq!(weird.get("Thing"), Some(&Node::scalar("42")));
    }

    #[test]
    fn test_duplicate_scalar_values_comma_join() {
        let node = extract_ok(
            r#"<x:xmpmeta>
                 <rdf:RDF>
                   <rdf:Description>
                     <xmp:CreatorTool>Editor 1.0</xmp:CreatorTool>
                   </rdf:Description>
                   <rdf:Description>
                     <xmp:CreatorTool>Editor 2.0</xmp:CreatorTool>
                   </rdf:Description>
                 </rdf:RDF>
               </x:xmpmeta>"#,
        );
        let map = node.as_map().unwrap();
        assert_eq!(
            map.get("CreatorTool"),
            Some(&Node::scalar("Editor 1.0,Editor 2.0"))
        );
    }

    #[test]
    fn test_mixed_children_skip_occupied_positional_keys() {
        let mut acc = Accumulator::default();
        acc.merge_under("0", Node::scalar("claimed"));
        acc.push(Node::scalar("first"));
        acc.push(Node::scalar("second"));

        let node = acc.finish();
        let map = node.as_map().unwrap();
        assert_eq!(map.get("0"), Some(&Node::scalar("claimed")));
        assert_eq!(map.get("1"), Some(&Node::scalar("first")));
        assert_eq!(map.get("2"), Some(&Node::scalar("second")));
    }

    #[test]
    fn test_push_under_appends_into_existing_map() {
        let mut inner = IndexMap::new();
        inner.insert("Key".to_string(), Node::scalar("v"));

        let mut acc = Accumulator::default();
        acc.merge_under("Thing", Node::Map(inner));
        acc.push_under("Thing", Node::scalar("w"));

        let node = acc.finish();
        let thing = node.as_map().and_then(|m| m.get("Thing")).unwrap();
        let thing = thing.as_map().unwrap();
        assert_eq!(thing.get("Key"), Some(&Node::scalar("v")));
        assert_eq!(thing.get("0"), Some(&Node::scalar("w")));
    }

    #[test]
    fn test_scalar_after_composite_same_suffix_appends() {
        let node = extract_ok(
            r#"<x:xmpmeta>
                 <rdf:RDF>
                   <rdf:Description>
                     <tiff:Thing><tiff:a>1</tiff:a></tiff:Thing>
                     <tiff:Thing>plain</tiff:Thing>
                   </rdf:Description>
                 </rdf:RDF>
               </x:xmpmeta>"#,
        );
        let map = node.as_map().unwrap();
        let thing = map.get("Thing").and_then(Node::as_map).unwrap();
        assert_eq!(thing.get("a"), Some(&Node::scalar("1")));
        assert_eq!(thing.get("0"), Some(&Node::scalar("plain")));
    }

    #[test]
    fn test_empty_document_yields_none() {
        let mut warnings = Vec::new();
        let payload = wrap_xmp("<x:xmpmeta></x:xmpmeta>");
        assert!(extract_xmp(&payload, &mut warnings).is_none());
        assert!(warnings.is_empty());
    }
}
