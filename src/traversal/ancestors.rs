//! Upward navigation: `parent`, `parents`, `closest`.
//!
//! Ancestor walks stop below the root node; the root itself is never part
//! of a result.

use super::NodeSet;
use crate::error::SelectError;
use crate::tree::NodeId;
use crate::util::{is_root, UniqueNodes};

impl<'a> NodeSet<'a> {
    /// Returns the parent of every node in the set, deduplicated in the order
    /// parents are first reached. The root is excluded.
    #[must_use]
    pub fn parent(&self) -> NodeSet<'a> {
        let parents = self.parent_nodes();
        log::trace!(target: "domset::traversal", "parent: {} -> {}", self.len(), parents.len());
        self.make(parents)
    }

    /// Like [`parent`](NodeSet::parent), keeping only parents that match
    /// `selector`.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the matcher.
    pub fn parent_filtered(&self, selector: &str) -> Result<NodeSet<'a>, SelectError> {
        let mut kept = Vec::new();
        for parent in self.parent_nodes() {
            if self.matcher.matches(self.doc, selector, parent)? {
                kept.push(parent);
            }
        }
        Ok(self.make(kept))
    }

    /// Returns every ancestor of every node, excluding the root.
    ///
    /// Nodes are visited from the last to the first, and each ancestor is
    /// recorded the first time one of those walks reaches it. The result is
    /// therefore *not* in document order.
    #[must_use]
    pub fn parents(&self) -> NodeSet<'a> {
        let mut found = UniqueNodes::default();
        for &node in self.nodes.iter().rev() {
            for ancestor in self.walk_up(self.doc.parent(node)) {
                found.push(ancestor);
            }
        }
        let found = found.into_vec();
        log::trace!(target: "domset::traversal", "parents: {} -> {}", self.len(), found.len());
        self.make(found)
    }

    /// Like [`parents`](NodeSet::parents), but only ancestors matching
    /// `selector` are collected. The test happens at every step of the walk.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the matcher.
    pub fn parents_filtered(&self, selector: &str) -> Result<NodeSet<'a>, SelectError> {
        let mut found = UniqueNodes::default();
        for &node in self.nodes.iter().rev() {
            let start = self.doc.parent(node);
            for ancestor in self.traverse_parents(start, selector, usize::MAX)? {
                found.push(ancestor);
            }
        }
        Ok(self.make(found.into_vec()))
    }

    /// For each node, returns the first of the node itself and its ancestors
    /// that matches `selector`. Duplicates are dropped.
    ///
    /// An empty selector yields an empty set without walking the tree.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the matcher.
    pub fn closest(&self, selector: &str) -> Result<NodeSet<'a>, SelectError> {
        if selector.is_empty() {
            return Ok(self.make(Vec::new()));
        }
        let mut found = UniqueNodes::default();
        for &node in self.nodes.iter() {
            if let Some(&hit) = self.traverse_parents(Some(node), selector, 1)?.first() {
                found.push(hit);
            }
        }
        Ok(self.make(found.into_vec()))
    }

    /// Distinct, non-root parents in set order.
    pub(crate) fn parent_nodes(&self) -> Vec<NodeId> {
        let mut found = UniqueNodes::default();
        for &node in self.nodes.iter() {
            if let Some(parent) = self.doc.parent(node).filter(|&id| !is_root(self.doc, id)) {
                found.push(parent);
            }
        }
        found.into_vec()
    }

    /// `start` and its ancestors, stopping below the root.
    fn walk_up(&self, start: Option<NodeId>) -> impl Iterator<Item = NodeId> + 'a {
        let doc = self.doc;
        start
            .into_iter()
            .flat_map(move |id| doc.ancestors(id))
            .take_while(move |&id| !is_root(doc, id))
    }

    /// Walks upward from `start` (inclusive) and returns at most `limit`
    /// nodes the matcher accepts on their own, stopping at the root.
    fn traverse_parents(
        &self,
        start: Option<NodeId>,
        selector: &str,
        limit: usize,
    ) -> Result<Vec<NodeId>, SelectError> {
        let mut found = Vec::new();
        for node in self.walk_up(start) {
            if found.len() >= limit {
                break;
            }
            if self.matcher.matches(self.doc, selector, node)? {
                found.push(node);
            }
        }
        Ok(found)
    }
}
