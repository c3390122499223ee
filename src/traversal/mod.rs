//! Chainable node sets.
//!
//! A [`NodeSet`] is an ordered list of nodes from one [`Document`], paired
//! with the [`Matcher`] that answers its selector queries. Every navigation
//! or filter method returns a new set and leaves the receiver untouched. The
//! new set remembers the set it was derived from, so [`NodeSet::end`] steps
//! back one link in the chain:
//!
//! ```
//! use domset::{Document, NodeId, NodeSet, SelectError};
//!
//! let mut doc = Document::new();
//! let ul = doc.create_element("ul", vec![]);
//! let li = doc.create_element("li", vec![]);
//! doc.append_child(doc.root(), ul);
//! doc.append_child(ul, li);
//!
//! let matcher = |_: &Document, _: &str, c: &[NodeId]| Ok::<Vec<NodeId>, SelectError>(c.to_vec());
//! let list = NodeSet::new(&doc, &matcher, vec![ul]);
//! let items = list.children();
//! assert_eq!(items.nodes(), &[li]);
//! assert_eq!(items.end(), list);
//! ```
//!
//! The operations are grouped by family:
//!
//! - [`ancestors`]: `parent`, `parents`, `closest`
//! - [`siblings`]: `next`, `next_all`, `prev`, `prev_all`, `siblings`
//! - [`children`]: `children`, `contents`, `find`
//! - [`iteration`]: `each`, `map`, `filter`, `is`
//! - [`position`]: `first`, `last`, `eq`, `slice`

pub mod ancestors;
pub mod children;
pub mod iteration;
pub mod position;
pub mod siblings;

pub use iteration::{EachControl, Match, Membership};

use crate::select::Matcher;
use crate::tree::{Document, NodeId};
use std::fmt;
use std::ops::Index;
use std::ptr;
use std::rc::Rc;

/// An immutable, ordered set of nodes with a link to the set it came from.
#[derive(Clone)]
pub struct NodeSet<'a> {
    doc: &'a Document,
    matcher: &'a dyn Matcher,
    nodes: Rc<[NodeId]>,
    previous: Option<Rc<NodeSet<'a>>>,
}

impl<'a> NodeSet<'a> {
    /// Creates a root set over `nodes`, with no previous set.
    pub fn new(doc: &'a Document, matcher: &'a dyn Matcher, nodes: Vec<NodeId>) -> Self {
        Self {
            doc,
            matcher,
            nodes: nodes.into(),
            previous: None,
        }
    }

    /// Creates a root set holding the document root.
    pub fn root(doc: &'a Document, matcher: &'a dyn Matcher) -> Self {
        Self::new(doc, matcher, vec![doc.root()])
    }

    /// Wraps `nodes` into a new set whose previous set is `self`.
    pub(crate) fn make(&self, nodes: Vec<NodeId>) -> Self {
        Self {
            doc: self.doc,
            matcher: self.matcher,
            nodes: nodes.into(),
            previous: Some(Rc::new(self.clone())),
        }
    }

    /// Ends the most recent operation in the chain, returning the set it was
    /// applied to. A set without history yields an empty set.
    #[must_use]
    pub fn end(&self) -> Self {
        match &self.previous {
            Some(previous) => NodeSet::clone(previous),
            None => self.make(Vec::new()),
        }
    }

    /// Returns the set this one was derived from, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&NodeSet<'a>> {
        self.previous.as_deref()
    }

    /// Returns the document the nodes belong to.
    #[must_use]
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Returns the selector engine used by this chain.
    #[must_use]
    pub fn matcher(&self) -> &'a dyn Matcher {
        self.matcher
    }

    /// Returns the number of nodes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the set holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    /// Returns the nodes as a slice.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Copies the nodes into a new vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<NodeId> {
        self.nodes.to_vec()
    }

    /// Returns an iterator over the nodes.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, NodeId>> {
        self.nodes.iter().copied()
    }

    /// Returns `true` if `node` is in the set (by identity).
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }
}

/// Unlinks the history one set at a time. Letting `Rc` free a long chain
/// would recurse once per link.
impl Drop for NodeSet<'_> {
    fn drop(&mut self) {
        let mut link = self.previous.take();
        while let Some(shared) = link {
            match Rc::try_unwrap(shared) {
                Ok(mut older) => link = older.previous.take(),
                // Still referenced from another chain; it owns the rest.
                Err(_) => break,
            }
        }
    }
}

impl Index<usize> for NodeSet<'_> {
    type Output = NodeId;

    fn index(&self, index: usize) -> &NodeId {
        &self.nodes[index]
    }
}

impl<'s> IntoIterator for &'s NodeSet<'_> {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'s, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two sets are equal when they hold the same nodes, in the same order, from
/// the same document. History is not compared.
impl PartialEq for NodeSet<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.doc, other.doc) && self.nodes == other.nodes
    }
}

impl Eq for NodeSet<'_> {}

impl fmt::Debug for NodeSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeSet")
            .field("nodes", &self.nodes)
            .field("previous", &self.previous.as_deref().map(NodeSet::len))
            .finish_non_exhaustive()
    }
}
