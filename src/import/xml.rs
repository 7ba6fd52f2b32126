//! In-memory XML tree
//!
//! A small owned element tree built from `quick-xml` events. Element names
//! are stored as local names, so `<sb:Queue>` and `<Queue>` both match
//! `"Queue"`. Only elements and text are kept; comments, processing
//! instructions and declarations are dropped.

use super::ImportError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A node in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with its children in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Parse a complete XML document and return its root element.
    ///
    /// The document must be well-formed: exactly one root element, matching
    /// start/end tags, and no character data outside the root.
    ///
    /// # Example
    ///
    /// ```rust
    /// use servicebus_emulator_config::import::xml::XmlElement;
    ///
    /// let root = XmlElement::parse("<Queue><Path>orders</Path></Queue>").unwrap();
    /// assert_eq!(root.name, "Queue");
    /// assert_eq!(root.child("Path").unwrap().text_content(), "orders");
    /// ```
    pub fn parse(xml_content: &str) -> Result<XmlElement, ImportError> {
        let mut reader = Reader::from_str(xml_content);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                ImportError::ParseError(format!(
                    "XML parsing error at position {}: {}",
                    reader.buffer_position(),
                    e
                ))
            })?;

            match event {
                Event::Start(e) => {
                    stack.push(XmlElement::new(local_name(&e)?));
                }
                Event::Empty(e) => {
                    let element = XmlElement::new(local_name(&e)?);
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| {
                        ImportError::ParseError("Unexpected closing tag".to_string())
                    })?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(e) => {
                    let text = e.unescape().map_err(|e| {
                        ImportError::ParseError(format!("Invalid character data: {}", e))
                    })?;
                    push_text(&mut stack, &text)?;
                }
                Event::CData(e) => {
                    let text = String::from_utf8(e.into_inner().into_owned()).map_err(|e| {
                        ImportError::ParseError(format!("Invalid UTF-8 in CDATA section: {}", e))
                    })?;
                    push_text(&mut stack, &text)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(ImportError::ParseError(format!(
                "Unclosed element <{}> at end of document",
                open.name
            )));
        }

        root.ok_or_else(|| ImportError::ParseError("Document has no root element".to_string()))
    }

    /// First direct child element with the given local name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|el| el.name == name)
    }

    /// Direct child elements in document order
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            XmlNode::Text(_) => None,
        })
    }

    /// Concatenated text of this element and all of its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Every descendant element named `name` whose parent is named `container`,
    /// in document order.
    ///
    /// This element itself may act as the container, but is never a match.
    pub fn select_children_of(&self, container: &str, name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        self.collect_children_of(container, name, &mut found);
        found
    }

    fn collect_children_of<'a>(
        &'a self,
        container: &str,
        name: &str,
        found: &mut Vec<&'a XmlElement>,
    ) {
        for child in self.child_elements() {
            if self.name == container && child.name == name {
                found.push(child);
            }
            child.collect_children_of(container, name, found);
        }
    }
}

fn local_name(start: &BytesStart) -> Result<String, ImportError> {
    std::str::from_utf8(start.local_name().as_ref())
        .map(str::to_string)
        .map_err(|e| ImportError::ParseError(format!("Invalid UTF-8 in element name: {}", e)))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), ImportError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Element(element));
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(ImportError::ParseError(format!(
            "Multiple root elements: unexpected <{}>",
            element.name
        ))),
    }
}

fn push_text(stack: &mut [XmlElement], text: &str) -> Result<(), ImportError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Text(text.to_string()));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(ImportError::ParseError(format!(
            "Text outside of the root element: {:?}",
            text.trim()
        ))),
    }
}
