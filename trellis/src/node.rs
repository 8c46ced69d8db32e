//! Node payloads stored in the document arena.
//!
//! A [`Node`] is either literal text or an [`Element`]. Children and the
//! parent link are not stored here: they live in the arena owned by
//! [`Document`](crate::Document).

use compact_str::CompactString;
use indexmap::IndexMap;

use crate::attribute::{AttrValue, AttributeValueSet};
use crate::error::{Error, Result};

const CLASS: &str = "class";

/// Content of one arena slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, emitted verbatim.
    Text(CompactString),
    /// A named element with attributes.
    Element(Element),
}

impl Node {
    /// Returns true if this is an element node.
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Returns true if this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get as element reference.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Get as mutable element reference.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Get as text reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A markup element: a tag name plus attributes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: CompactString,
    attrs: IndexMap<CompactString, AttributeValueSet>,
}

impl Element {
    /// Create an element with no attributes.
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
        }
    }

    /// Create an element, materializing each `(name, value)` pair as an
    /// [`AttributeValueSet`].
    pub fn with_attributes<K, V>(
        tag: impl Into<CompactString>,
        attrs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<CompactString>,
        V: Into<AttrValue>,
    {
        let mut element = Self::new(tag);
        for (key, value) in attrs {
            element.set_attribute(key, value);
        }
        element
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(
        mut self,
        key: impl Into<CompactString>,
        val: impl Into<AttrValue>,
    ) -> Self {
        self.set_attribute(key, val);
        self
    }

    /// Builder form of [`Element::add_class`].
    pub fn with_class(mut self, class: impl Into<AttrValue>) -> Self {
        self.add_class(class);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Iterate attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttributeValueSet)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The value set behind `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValueSet> {
        self.attrs.get(key)
    }

    /// Replace (or create) the attribute at `key` with a fresh value set.
    pub fn set_attribute(&mut self, key: impl Into<CompactString>, val: impl Into<AttrValue>) {
        self.attrs.insert(key.into(), AttributeValueSet::new(val));
    }

    /// Append tokens to the attribute at `key`, creating it if needed.
    pub fn add_attribute(&mut self, key: impl Into<CompactString>, val: impl Into<AttrValue>) {
        let key = key.into();
        match self.attrs.get_mut(&key) {
            Some(set) => set.add(val),
            None => self.set_attribute(key, val),
        }
    }

    /// True if `key` exists and its rendered value is not blank.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attrs
            .get(key)
            .is_some_and(|set| !set.render().trim().is_empty())
    }

    /// The rendered value of `key`.
    pub fn get_attribute(&self, key: &str) -> Result<String> {
        self.attrs
            .get(key)
            .map(AttributeValueSet::render)
            .ok_or_else(|| Error::AttributeNotFound {
                key: key.to_string(),
            })
    }

    /// The rendered value of `key`, or `default` when absent.
    pub fn get_attribute_or(&self, key: &str, default: impl Into<String>) -> String {
        self.attrs
            .get(key)
            .map(AttributeValueSet::render)
            .unwrap_or_else(|| default.into())
    }

    /// Remove the whole attribute entry. No-op when absent.
    pub fn remove_attribute(&mut self, key: &str) {
        self.attrs.shift_remove(key);
    }

    /// Remove one token from the attribute at `key`. No-op when `key` is
    /// absent; the entry stays even if it ends up empty.
    pub fn remove_attribute_value(&mut self, key: &str, val: &str) {
        if let Some(set) = self.attrs.get_mut(key) {
            set.remove(val);
        }
    }

    pub fn add_class(&mut self, class: impl Into<AttrValue>) {
        self.add_attribute(CLASS, class);
    }

    pub fn remove_class(&mut self, class: &str) {
        self.remove_attribute_value(CLASS, class);
    }

    /// True if the `class` attribute contains the token `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attrs.get(CLASS).is_some_and(|set| set.contains(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_set_and_remove_attribute() {
        let mut e = Element::new("div");
        e.set_attribute("class", "x");
        assert!(e.has_attribute("class"));

        e.remove_attribute("class");
        assert!(!e.has_attribute("class"));
        assert!(e.attribute("class").is_none());
    }

    #[test]
    fn test_has_attribute_requires_non_empty_value() {
        let mut e = Element::new("div");
        e.set_attribute("title", "   ");
        assert!(!e.has_attribute("title"));
        assert_eq!(e.get_attribute("title").unwrap(), "");

        e.set_attribute("hidden", "");
        assert!(!e.has_attribute("hidden"));
    }

    #[test]
    fn test_add_attribute_appends_or_creates() {
        let mut e = Element::new("div");
        e.add_attribute("data-tags", "a");
        e.add_attribute("data-tags", "b c");
        assert_eq!(e.get_attribute("data-tags").unwrap(), "a b c");
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut e = Element::new("div").with_attribute("id", "one");
        e.set_attribute("id", "two");
        assert_eq!(e.get_attribute("id").unwrap(), "two");
    }

    #[test]
    fn test_get_attribute_missing() {
        let e = Element::new("div");
        assert_eq!(
            e.get_attribute("href"),
            Err(Error::AttributeNotFound {
                key: "href".to_string()
            })
        );
        assert_eq!(e.get_attribute_or("href", "#"), "#");
    }

    #[test]
    fn test_remove_attribute_value() {
        let mut e = Element::with_attributes("div", [("class", "a b c")]);
        e.remove_attribute_value("class", "b");
        assert_eq!(e.get_attribute("class").unwrap(), "a c");

        // absent key is a no-op
        e.remove_attribute_value("rel", "b");
        assert!(e.attribute("rel").is_none());
    }

    #[test]
    fn test_classes() {
        let mut e = Element::new("li").with_class("item");
        e.add_class("active");
        assert!(e.has_class("item"));
        assert!(e.has_class("active"));
        assert!(!e.has_class("selected"));

        e.remove_class("active");
        assert!(!e.has_class("active"));
        assert_eq!(e.get_attribute("class").unwrap(), "item");
    }

    #[test]
    fn test_attribute_order_is_insertion_order() {
        let mut e = Element::new("a");
        e.set_attribute("href", "/");
        e.set_attribute("class", "nav");
        e.set_attribute("id", "home");
        e.remove_attribute("class");
        e.set_attribute("class", "nav");

        let keys: Vec<&str> = e.attributes().map(|(k, _)| k).collect();
        assert_eq!(keys, ["href", "id", "class"]);
    }
}
