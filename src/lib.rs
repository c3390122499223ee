//! # domset
//!
//! Chainable, jQuery-style traversal and filtering over an arena-based
//! markup tree.
//!
//! A [`NodeSet`] holds an ordered list of nodes from a [`Document`].
//! Navigation methods (`parent`, `parents`, `closest`, `next`, `siblings`,
//! `children`, `find`, ...) and filters (`filter`, `eq`, `slice`, ...) each
//! return a new set that remembers where it came from, so [`NodeSet::end`]
//! undoes the last step of a chain.
//!
//! Selector strings are never interpreted here. They are handed to a
//! [`Matcher`](select::Matcher), the pluggable selector engine supplied when
//! the first set is created.
//!
//! ## Quick Start
//!
//! ```
//! use domset::{Document, NodeId, NodeSet, SelectError};
//!
//! let mut doc = Document::new();
//! let ul = doc.create_element("ul", vec![]);
//! doc.append_child(doc.root(), ul);
//! let mut items = Vec::new();
//! for _ in 0..3 {
//!     let li = doc.create_element("li", vec![]);
//!     doc.append_child(ul, li);
//!     items.push(li);
//! }
//!
//! // A selector engine that only understands tag names.
//! let by_tag = |doc: &Document, selector: &str, candidates: &[NodeId]| {
//!     Ok::<Vec<NodeId>, SelectError>(
//!         candidates
//!             .iter()
//!             .copied()
//!             .filter(|&id| doc.node_name(id) == Some(selector))
//!             .collect(),
//!     )
//! };
//!
//! let first = NodeSet::new(&doc, &by_tag, vec![items[0]]);
//! assert_eq!(first.next_all().len(), 2);
//! assert_eq!(first.closest("ul").unwrap().nodes(), &[ul]);
//! assert_eq!(first.siblings().end(), first);
//! ```

pub mod error;
pub mod select;
pub mod traversal;
pub mod tree;
pub mod util;

#[cfg(test)]
mod test_utils;

// Re-export primary types at the crate root for convenience.
pub use error::SelectError;
pub use select::Matcher;
pub use traversal::{EachControl, Match, Membership, NodeSet};
pub use tree::{Attribute, Document, NodeId, NodeKind, NodeType};
