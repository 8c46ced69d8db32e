//! In-memory markup tree builder.
//!
//! trellis provides:
//! - **Multi-value attributes**: space-separated tokens with add/set/remove
//! - **Arena tree**: text and element nodes owned by a [`Document`], with
//!   parent links stored as indices
//! - **Serialization**: compact or pretty-printed markup, written verbatim
//!
//! trellis only builds and renders: it never parses markup and never escapes
//! content.
//!
//! # Example
//!
//! ```rust
//! use trellis::{Document, RenderOptions};
//! use trellis::tags::{div, p};
//!
//! let mut doc = Document::new();
//! let root = doc.insert(div().with_class("card"));
//! let para = doc.insert(p());
//! doc.append(root, para).unwrap();
//! doc.add_text(para, "Hello!").unwrap();
//!
//! doc.element_mut(root).unwrap().add_class("wide");
//! assert!(doc.element(root).unwrap().has_class("wide"));
//!
//! assert_eq!(
//!     doc.to_markup(root).unwrap(),
//!     r#"<div class="card wide"><p>Hello!</p></div>"#
//! );
//! assert_eq!(
//!     doc.render(root, &RenderOptions::new().pretty()).unwrap(),
//!     "<div class=\"card wide\">\n\t<p>\n\t\tHello!\n\t</p>\n</div>"
//! );
//! ```

pub use indextree;
pub use indextree::NodeId;

mod tracing_macros;

pub mod arena_dom;
pub mod attribute;
pub mod error;
pub mod node;
pub mod serialize;
pub mod tags;

pub use arena_dom::Document;
pub use attribute::{AttrValue, AttributeValueSet};
pub use error::{Error, Result};
pub use node::{Element, Node};
pub use serialize::{RenderOptions, render_node};
