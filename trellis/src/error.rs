//! Errors returned by tree and attribute operations.

use facet::Facet;

/// Errors that can occur while building or querying a document tree.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum Error {
    /// invalid attribute value of type {found}: expected a string or a sequence of strings
    InvalidValue { found: String },

    /// attribute {key} does not exist
    AttributeNotFound { key: String },

    /// child index {index} out of range (element has {count} children)
    IndexOutOfRange { index: usize, count: usize },

    /// node is not an element
    NotAnElement,

    /// node has been removed from the document
    NodeRemoved,

    /// cannot append a node to itself or to one of its descendants
    CyclicAppend,
}

/// Result type for trellis operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
