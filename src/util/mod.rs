//! Small helpers shared by the traversal operations.

use crate::tree::{Document, NodeId, NodeType};
use rustc_hash::FxHashSet;

/// Returns `true` if `id` is an element (tag) node.
#[must_use]
pub fn is_tag(doc: &Document, id: NodeId) -> bool {
    doc.node_type(id) == NodeType::Tag
}

/// Returns `true` if `id` is the document root.
#[must_use]
pub fn is_root(doc: &Document, id: NodeId) -> bool {
    doc.node_type(id) == NodeType::Root
}

/// Order-preserving identity dedup: keeps the first occurrence of each node.
pub fn unique_nodes<I>(nodes: I) -> Vec<NodeId>
where
    I: IntoIterator<Item = NodeId>,
{
    let mut seen = FxHashSet::default();
    nodes.into_iter().filter(|&id| seen.insert(id)).collect()
}

/// Accumulates nodes in first-seen order, ignoring repeats.
#[derive(Debug, Default)]
pub struct UniqueNodes {
    seen: FxHashSet<NodeId>,
    nodes: Vec<NodeId>,
}

impl UniqueNodes {
    /// Adds `id` unless it was added before. Returns whether it was new.
    pub fn push(&mut self, id: NodeId) -> bool {
        let fresh = self.seen.insert(id);
        if fresh {
            self.nodes.push(id);
        }
        fresh
    }

    /// Consumes the accumulator, returning nodes in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<NodeId> {
        self.nodes
    }
}
