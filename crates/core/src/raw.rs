//! Generic raw-tree view of a scenario document.
//!
//! [`RawNode`] is the untyped attribute/element tree the text bridge hands
//! to the engine and the engine hands back to it. Attribute values are
//! always raw text; all coercion happens in the typed layers above.

use std::collections::BTreeMap;

/// One element of the raw document tree: a name, its attributes, and its
/// child elements in document order. Attributes are kept sorted so that
/// emission is canonical.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawNode {
    pub name: String,
    pub attrs: BTreeMap<String, String>,
    pub children: Vec<RawNode>,
}

impl RawNode {
    pub fn new(name: impl Into<String>) -> Self {
        RawNode {
            name: name.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder form used by emitters and test fixtures.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Inserts the attribute only when a value is present. Absent values
    /// are omitted, never defaulted.
    pub fn with_opt_attr(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        if let Some(v) = value {
            self.attrs.insert(key.into(), v);
        }
        self
    }

    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&RawNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// The returned iterator borrows only `self`, not the lookup key.
    pub fn children_named(&self, name: &str) -> impl Iterator<Item = &RawNode> {
        let name = name.to_owned();
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Repeated-entity lookup. Accepts both shapes the format allows:
    /// items wrapped in a container element (`<events><event/>…</events>`)
    /// and bare repeated children (`<event/><event/>`), normalized into
    /// one document-order list.
    pub fn list(&self, container: &str, item: &str) -> Vec<&RawNode> {
        if let Some(wrapper) = self.child(container) {
            return wrapper.children_named(item).collect();
        }
        self.children_named(item).collect()
    }

    /// Scalar-setting lookup. Accepts both `<size value="3"/>` and the
    /// nested `<size><value value="3"/></size>` leaf shape.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        let leaf = self.child(name)?;
        if let Some(v) = leaf.attr("value") {
            return Some(v);
        }
        leaf.child("value")?.attr("value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_accepts_wrapped_and_bare_children() {
        let wrapped = RawNode::new("scenario").with_child(
            RawNode::new("events")
                .with_child(RawNode::new("event").with_attr("id", "a"))
                .with_child(RawNode::new("event").with_attr("id", "b")),
        );
        let bare = RawNode::new("scenario")
            .with_child(RawNode::new("event").with_attr("id", "a"))
            .with_child(RawNode::new("event").with_attr("id", "b"));

        for node in [&wrapped, &bare] {
            let items = node.list("events", "event");
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].attr("id"), Some("a"));
            assert_eq!(items[1].attr("id"), Some("b"));
        }
    }

    #[test]
    fn scalar_accepts_flat_and_nested_leaves() {
        let flat = RawNode::new("scenario").with_child(RawNode::new("size").with_attr("value", "3"));
        let nested = RawNode::new("scenario")
            .with_child(RawNode::new("size").with_child(RawNode::new("value").with_attr("value", "3")));

        assert_eq!(flat.scalar("size"), Some("3"));
        assert_eq!(nested.scalar("size"), Some("3"));
        assert_eq!(flat.scalar("category"), None);
    }

    #[test]
    fn lookup_results_outlive_the_name_key() {
        let node = RawNode::new("scenario").with_child(
            RawNode::new("events").with_child(RawNode::new("event").with_attr("id", "a")),
        );
        let items = {
            let key = String::from("event");
            node.list("events", &key)
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].attr("id"), Some("a"));
    }

    #[test]
    fn opt_attr_omits_absent_values() {
        let node = RawNode::new("action")
            .with_attr("type", "HideUi")
            .with_opt_attr("radius", None);
        assert_eq!(node.attrs.len(), 1);
    }
}
