//! scenarist-xml: text/raw-tree bridge for the scenarist engine.
//!
//! Turns document text into the [`RawNode`] trees the engine consumes and
//! renders trees back to text. Attribute values stay raw strings here; all
//! typing and validation belongs to `scenarist-core`.
//!
//! Output is canonical: attributes in sorted order (a `RawNode` property),
//! two-space indentation, self-closing leaves.

use std::fmt::Write as _;
use std::str;

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use scenarist_core::{parse_scenario, RawNode, Scenario};

pub mod error;

pub use error::{BridgeError, XmlError};

/// Parse document text into a raw tree.
///
/// Exactly one root element is required. Text content, comments and
/// processing instructions are skipped; the format carries its data in
/// attributes only.
pub fn parse_document(text: &str) -> Result<RawNode, XmlError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<RawNode> = Vec::new();
    let mut root: Option<RawNode> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlError::TrailingContent);
                }
                stack.push(node_from(&start)?);
            }
            Event::Empty(start) => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlError::TrailingContent);
                }
                let node = node_from(&start)?;
                attach(&mut stack, &mut root, node);
            }
            Event::End(_) => {
                // the reader rejects unbalanced tags before we get here
                if let Some(node) = stack.pop() {
                    attach(&mut stack, &mut root, node);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    root.ok_or(XmlError::Empty)
}

fn node_from(start: &BytesStart<'_>) -> Result<RawNode, XmlError> {
    let name = str::from_utf8(start.name().as_ref())?.to_owned();
    let mut node = RawNode::new(name);
    for attr in start.attributes() {
        let attr = attr?;
        let key = str::from_utf8(attr.key.as_ref())?.to_owned();
        let value = attr.unescape_value()?.into_owned();
        node.attrs.insert(key, value);
    }
    Ok(node)
}

fn attach(stack: &mut Vec<RawNode>, root: &mut Option<RawNode>, node: RawNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => *root = Some(node),
    }
}

/// Render a raw tree as a standalone document.
pub fn write_document(root: &RawNode) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    render(root, 0, &mut out);
    out
}

/// Render a raw tree without the document prologue.
pub fn write_fragment(node: &RawNode) -> String {
    let mut out = String::new();
    render(node, 0, &mut out);
    out
}

fn render(node: &RawNode, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    let _ = write!(out, "{}<{}", pad, node.name);
    for (key, value) in &node.attrs {
        let _ = write!(out, " {}=\"{}\"", key, escape(value.as_str()));
    }
    if node.children.is_empty() {
        out.push_str("/>\n");
    } else {
        out.push_str(">\n");
        for child in &node.children {
            render(child, depth + 1, out);
        }
        let _ = writeln!(out, "{}</{}>", pad, node.name);
    }
}

/// Text all the way to the normalized aggregate.
pub fn load_scenario(text: &str) -> Result<Scenario, BridgeError> {
    let root = parse_document(text)?;
    Ok(parse_scenario(&root)?)
}

/// Normalized aggregate all the way back to document text.
pub fn save_scenario(scenario: &Scenario) -> String {
    write_document(&scenario.to_raw())
}
