//! Markup serializer for document trees.
//!
//! Rendering an element produces three parts joined by the newline string:
//! the opening tag (with attributes), the children rendered one level deeper
//! and joined by the newline string, and the closing tag. In compact mode the
//! newline string and the indentation are empty.
//!
//! Attribute values and text are written verbatim; nothing is escaped.

use indextree::NodeId;
use std::fmt::Write;

use crate::arena_dom::Document;
use crate::attribute::AttributeValueSet;
use crate::error::Result;
use crate::node::{Element, Node};
use crate::trace;

/// Options for rendering markup.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Whether to insert newlines and indentation (default: false)
    pub pretty: bool,
    /// Indentation unit repeated once per level (default: a tab)
    pub indent: String,
    /// Indentation level of the node being rendered (default: 0)
    pub level: usize,
    /// Emit attributes sorted by name instead of insertion order (default: false)
    pub sort_attributes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "\t".to_string(),
            level: 0,
            sort_attributes: false,
        }
    }
}

impl RenderOptions {
    /// Create new default options (compact output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable pretty-printing.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Set a custom indentation unit (implies pretty-printing).
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self.pretty = true;
        self
    }

    /// Start rendering at the given indentation level.
    pub fn at_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// Sort attributes alphabetically.
    pub fn sort_attributes(mut self) -> Self {
        self.sort_attributes = true;
        self
    }
}

/// Render the subtree rooted at `id` to a markup string.
pub fn render_node(doc: &Document, id: NodeId, opts: &RenderOptions) -> Result<String> {
    trace!(?id, pretty = opts.pretty, level = opts.level, "rendering subtree");
    let mut out = String::new();
    let mut ser = Serializer::new(&mut out, doc, opts);
    ser.write_node(id, opts.level)?;
    Ok(out)
}

struct Serializer<'a, W: Write> {
    out: &'a mut W,
    doc: &'a Document,
    options: &'a RenderOptions,
}

impl<'a, W: Write> Serializer<'a, W> {
    fn new(out: &'a mut W, doc: &'a Document, options: &'a RenderOptions) -> Self {
        Self { out, doc, options }
    }

    fn write_indent(&mut self, level: usize) {
        if self.options.pretty {
            for _ in 0..level {
                let _ = self.out.write_str(&self.options.indent);
            }
        }
    }

    fn write_newline(&mut self) {
        if self.options.pretty {
            let _ = self.out.write_char('\n');
        }
    }

    fn write_attr(&mut self, name: &str, value: &AttributeValueSet) {
        let _ = write!(self.out, " {}=\"{}\"", name, value);
    }

    fn write_node(&mut self, id: NodeId, level: usize) -> Result<()> {
        let doc = self.doc;
        match doc.node(id)? {
            Node::Text(text) => {
                self.write_indent(level);
                let _ = self.out.write_str(text);
            }
            Node::Element(element) => self.write_element(id, element, level)?,
        }
        Ok(())
    }

    fn write_element(&mut self, id: NodeId, element: &Element, level: usize) -> Result<()> {
        let tag = element.tag();

        // Opening tag
        self.write_indent(level);
        let _ = write!(self.out, "<{}", tag);
        if self.options.sort_attributes {
            let mut attrs: Vec<_> = element.attributes().collect();
            attrs.sort_by_key(|(k, _)| *k);
            for (name, value) in attrs {
                self.write_attr(name, value);
            }
        } else {
            for (name, value) in element.attributes() {
                self.write_attr(name, value);
            }
        }
        let _ = self.out.write_char('>');
        self.write_newline();

        // Children block, empty when there are none
        let doc = self.doc;
        for (i, child) in doc.children(id)?.enumerate() {
            if i > 0 {
                self.write_newline();
            }
            self.write_node(child, level + 1)?;
        }
        self.write_newline();

        // Closing tag
        self.write_indent(level);
        let _ = write!(self.out, "</{}>", tag);
        Ok(())
    }
}

// =============================================================================
// Convenience methods on Document
// =============================================================================

impl Document {
    /// Render the subtree rooted at `id` with custom options.
    pub fn render(&self, id: NodeId, opts: &RenderOptions) -> Result<String> {
        render_node(self, id, opts)
    }

    /// Render the subtree rooted at `id` without newlines or indentation.
    pub fn to_markup(&self, id: NodeId) -> Result<String> {
        render_node(self, id, &RenderOptions::default())
    }

    /// Render the subtree rooted at `id`, one tab per level.
    pub fn to_markup_pretty(&self, id: NodeId) -> Result<String> {
        render_node(self, id, &RenderOptions::default().pretty())
    }
}

// =============================================================================
// Tests
// =============================================================================
