//! XML loading for CodeWalker drawable exports
//!
//! Parses a full XML document string into an owned [`XmlNode`] tree that the
//! extraction stages can query. No schema validation happens here; structural
//! checks belong to the stages that know which elements they need.

use crate::error::DrawableError;
use indexmap::IndexMap;
use quick_xml::events::Event;
use quick_xml::Reader;

/// A parsed XML element with its attributes, text content and children.
#[derive(Debug, Clone)]
pub struct XmlNode {
    /// The name/tag of this element
    pub name: String,
    /// Attribute names to values, in document order
    pub attributes: IndexMap<String, String>,
    /// Accumulated text content of this node
    pub text_content: String,
    /// Child elements, in document order
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// First direct child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|n| n.name == name)
    }

    /// Trimmed text content of the first direct child with the given tag name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|n| n.text_content.trim())
    }

    /// First descendant with the given tag name, depth-first in document
    /// order. Does not match the node itself.
    pub fn descendant(&self, name: &str) -> Option<&XmlNode> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.descendant(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given tag name, depth-first in document order.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a XmlNode> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlNode>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }
}

/// Parses an XML document string and returns the root element.
///
/// Fails with [`DrawableError::MalformedXml`] if the text is not well-formed
/// XML (unbalanced tags, bad attribute syntax, no root element).
pub fn parse_xml_str(text: &str) -> Result<XmlNode, DrawableError> {
    let mut reader = Reader::from_reader(text.as_bytes());
    reader.trim_text(true);

    loop {
        let event = reader.read_event()?;
        let maybe_root = match event {
            Event::Start(start) => Some((start.into_owned(), false)),
            Event::Empty(start) => Some((start.into_owned(), true)),
            Event::Eof => {
                return Err(DrawableError::MalformedXml(
                    "document has no root element".to_string(),
                ));
            }
            _ => None,
        };

        if let Some((start, self_closing)) = maybe_root {
            return parse_node(&mut reader, start, self_closing);
        }
    }
}

fn parse_node(
    reader: &mut Reader<&[u8]>,
    start: quick_xml::events::BytesStart<'static>,
    self_closing: bool,
) -> Result<XmlNode, DrawableError> {
    let element_name_bytes = start.name().as_ref().to_vec();
    let element_name = String::from_utf8_lossy(&element_name_bytes).to_string();
    let attributes = collect_attributes(start.attributes())?;

    let mut node = XmlNode {
        name: element_name,
        attributes,
        text_content: String::new(),
        children: Vec::new(),
    };

    if self_closing {
        return Ok(node);
    }

    loop {
        let event = reader.read_event()?;
        match event {
            Event::Start(child_start) => {
                let child = parse_node(reader, child_start.into_owned(), false)?;
                node.children.push(child);
            }
            Event::Empty(child_start) => {
                let child = parse_node(reader, child_start.into_owned(), true)?;
                node.children.push(child);
            }
            Event::Text(text) => {
                let value = String::from_utf8_lossy(text.as_ref()).to_string();
                if !value.trim().is_empty() {
                    node.text_content.push_str(&value);
                }
            }
            Event::CData(text) => {
                let value = String::from_utf8_lossy(text.as_ref()).to_string();
                if !value.trim().is_empty() {
                    node.text_content.push_str(&value);
                }
            }
            Event::End(end) => {
                if end.name().as_ref() != element_name_bytes.as_slice() {
                    return Err(DrawableError::MalformedXml(format!(
                        "unexpected closing tag '</{}>' while parsing '<{}>'",
                        String::from_utf8_lossy(end.name().as_ref()),
                        node.name
                    )));
                }
                return Ok(node);
            }
            Event::Eof => {
                return Err(DrawableError::MalformedXml(format!(
                    "unexpected end of file while parsing element '{}'",
                    node.name
                )));
            }
            _ => {}
        }
    }
}

fn collect_attributes(
    attributes: quick_xml::events::attributes::Attributes<'_>,
) -> Result<IndexMap<String, String>, DrawableError> {
    let mut map = IndexMap::new();
    for attr in attributes {
        let attr = attr.map_err(|e| DrawableError::MalformedXml(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = String::from_utf8_lossy(attr.value.as_ref()).to_string();
        map.insert(key, value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_with_attributes_and_text() {
        let root = parse_xml_str(
            r#"<Drawable><Item name="first"><Name>prop_a</Name></Item></Drawable>"#,
        )
        .unwrap();

        assert_eq!(root.name, "Drawable");
        let item = root.child("Item").unwrap();
        assert_eq!(item.attributes.get("name").map(|s| s.as_str()), Some("first"));
        assert_eq!(item.child_text("Name"), Some("prop_a"));
    }

    #[test]
    fn descendant_is_depth_first_document_order() {
        let root = parse_xml_str(
            "<Root><A><Name>inner</Name></A><Name>outer</Name></Root>",
        )
        .unwrap();

        assert_eq!(root.descendant("Name").unwrap().text_content, "inner");
        assert_eq!(root.descendants("Name").len(), 2);
    }

    #[test]
    fn self_closing_elements_become_empty_nodes() {
        let root = parse_xml_str(r#"<Layout><Position /><Normal/></Layout>"#).unwrap();
        let names: Vec<_> = root.children.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["Position", "Normal"]);
    }

    #[test]
    fn multiline_text_content_is_kept() {
        let root = parse_xml_str("<Data>\n  0 0 0\n  1 1 1\n</Data>").unwrap();
        assert_eq!(root.text_content.lines().count(), 2);
    }

    #[test]
    fn unbalanced_tags_are_malformed() {
        let err = parse_xml_str("<Drawable><Item></Drawable>").unwrap_err();
        assert!(matches!(err, DrawableError::MalformedXml(_)));
    }

    #[test]
    fn empty_input_is_malformed() {
        let err = parse_xml_str("").unwrap_err();
        assert!(matches!(err, DrawableError::MalformedXml(_)));
    }
}
