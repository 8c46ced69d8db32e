//! Arena-backed document tree.
//!
//! All nodes live in one [`indextree::Arena`] owned by [`Document`]. A node is
//! addressed by its [`NodeId`]; the parent link is an arena index, so there are
//! no ownership cycles. Appending a node that already has a parent moves it:
//! the node is unlinked from the old parent's children before being attached.

use compact_str::CompactString;
use indextree::{Arena, NodeError, NodeId};

use crate::error::{Error, Result};
use crate::node::{Element, Node};
use crate::{debug, trace};

/// Owner of every node in a tree (or in several detached trees).
#[derive(Debug, Clone, Default)]
pub struct Document {
    arena: Arena<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes in the arena.
    pub fn len(&self) -> usize {
        self.arena.iter().filter(|n| !n.is_removed()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a detached text node.
    pub fn text(&mut self, text: impl Into<CompactString>) -> NodeId {
        self.arena.new_node(Node::Text(text.into()))
    }

    /// Create a detached element with no attributes.
    pub fn create_element(&mut self, tag: impl Into<CompactString>) -> NodeId {
        self.insert(Element::new(tag))
    }

    /// Move an element into the arena as a detached node.
    pub fn insert(&mut self, element: Element) -> NodeId {
        self.arena.new_node(Node::Element(element))
    }

    /// Move an element into the arena and attach `children` in order.
    ///
    /// Children are attached exactly as [`Document::append`] would, so their
    /// parent link points at the new element.
    pub fn insert_with_children(
        &mut self,
        element: Element,
        children: impl IntoIterator<Item = NodeId>,
    ) -> Result<NodeId> {
        // validate up front so a bad child leaves the document untouched
        let children: Vec<NodeId> = children.into_iter().collect();
        for &child in &children {
            self.node(child)?;
        }
        let id = self.insert(element);
        for child in children {
            self.append(id, child)?;
        }
        Ok(id)
    }

    /// True if `id` is in bounds and its slot has not been freed or reused.
    ///
    /// The stamp check in `NodeId::is_removed` is what tells a stale id apart
    /// from a newer node living in the same slot.
    fn is_live(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some() && !id.is_removed(&self.arena)
    }

    /// Get the payload of a live node.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        if !self.is_live(id) {
            return Err(Error::NodeRemoved);
        }
        self.arena
            .get(id)
            .map(|n| n.get())
            .ok_or(Error::NodeRemoved)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        if !self.is_live(id) {
            return Err(Error::NodeRemoved);
        }
        self.arena
            .get_mut(id)
            .map(|n| n.get_mut())
            .ok_or(Error::NodeRemoved)
    }

    /// Get a live element.
    pub fn element(&self, id: NodeId) -> Result<&Element> {
        self.node(id)?.as_element().ok_or(Error::NotAnElement)
    }

    /// Get a live element for attribute mutation.
    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut Element> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(Error::NotAnElement)
    }

    /// Attach `node` as the last child of `parent` and return `node`.
    ///
    /// Note that the child is returned, not the parent, so chained calls
    /// descend into the tree.
    pub fn append(&mut self, parent: NodeId, node: NodeId) -> Result<NodeId> {
        self.element(parent)?;
        self.node(node)?;
        trace!(?node, ?parent, old_parent = ?self.parent(node), "appending node");
        parent
            .checked_append(node, &mut self.arena)
            .map_err(|err| match err {
                NodeError::Removed => Error::NodeRemoved,
                _ => Error::CyclicAppend,
            })?;
        Ok(node)
    }

    /// Move `element` into the arena, append it to `parent` and return it.
    pub fn append_element(&mut self, parent: NodeId, element: Element) -> Result<NodeId> {
        self.element(parent)?;
        let id = self.insert(element);
        self.append(parent, id)
    }

    /// Create a text node, append it to `parent` and return it.
    pub fn add_text(&mut self, parent: NodeId, text: impl Into<CompactString>) -> Result<NodeId> {
        self.element(parent)?;
        let id = self.text(text);
        self.append(parent, id)
    }

    /// Iterate the direct children of an element.
    pub fn children(&self, parent: NodeId) -> Result<impl Iterator<Item = NodeId> + '_> {
        self.element(parent)?;
        Ok(parent.children(&self.arena))
    }

    /// Number of direct children (descendants are not counted).
    pub fn count(&self, parent: NodeId) -> Result<usize> {
        Ok(self.children(parent)?.count())
    }

    /// The child at `index`.
    pub fn get(&self, parent: NodeId, index: usize) -> Result<NodeId> {
        match self.children(parent)?.nth(index) {
            Some(id) => Ok(id),
            None => Err(Error::IndexOutOfRange {
                index,
                count: self.count(parent)?,
            }),
        }
    }

    pub fn first(&self, parent: NodeId) -> Result<NodeId> {
        self.get(parent, 0)
    }

    pub fn last(&self, parent: NodeId) -> Result<NodeId> {
        let count = self.count(parent)?;
        match count.checked_sub(1) {
            Some(index) => self.get(parent, index),
            None => Err(Error::IndexOutOfRange { index: 0, count }),
        }
    }

    /// The element this node is attached to, or `None` for roots and
    /// detached nodes.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        if !self.is_live(node) {
            return None;
        }
        self.arena.get(node).and_then(|n| n.parent())
    }

    /// Direct element children whose `class` attribute contains `class`.
    pub fn with_class(&self, parent: NodeId, class: &str) -> Result<Vec<NodeId>> {
        Ok(self
            .children(parent)?
            .filter(|&id| {
                self.node(id)
                    .ok()
                    .and_then(Node::as_element)
                    .is_some_and(|e| e.has_class(class))
            })
            .collect())
    }

    /// Unlink `node` from its parent. The subtree stays in the document.
    pub fn detach(&mut self, node: NodeId) -> Result<()> {
        self.node(node)?;
        trace!(?node, "detaching node");
        node.detach(&mut self.arena);
        Ok(())
    }

    /// Remove `node` and all of its descendants from the document.
    ///
    /// The parent is left in place; ids of removed nodes become invalid.
    pub fn remove_subtree(&mut self, node: NodeId) -> Result<()> {
        self.node(node)?;
        debug!(?node, "removing subtree");
        node.remove_subtree(&mut self.arena);
        Ok(())
    }
}
