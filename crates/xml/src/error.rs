//! Structural text errors surfaced by the bridge.

use scenarist_core::ScenarioError;

/// A failure to turn text into a raw tree. Field-level problems never show
/// up here; anything the engine can represent as a tree parses, and the
/// drop policy takes over from there.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("malformed document: {0}")]
    Syntax(#[from] quick_xml::Error),
    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),
    #[error("element or attribute name is not valid utf-8")]
    NonUtf8(#[from] std::str::Utf8Error),
    #[error("document contains no elements")]
    Empty,
    #[error("unexpected content after the root element")]
    TrailingContent,
}

/// Combined failure for the text-to-[`Scenario`] conveniences.
///
/// [`Scenario`]: scenarist_core::Scenario
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Xml(#[from] XmlError),
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}
