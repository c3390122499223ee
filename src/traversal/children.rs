//! Downward navigation: `children`, `contents`, `find`.

use super::position::normalize_index;
use super::NodeSet;
use crate::error::SelectError;
use crate::tree::NodeId;
use crate::util::{is_tag, unique_nodes};

impl<'a> NodeSet<'a> {
    /// Returns the element children of every node, in set order.
    #[must_use]
    pub fn children(&self) -> NodeSet<'a> {
        self.make(self.child_elements())
    }

    /// Returns the child at `index` of the flattened element children, with
    /// the same index rules as [`eq`](NodeSet::eq).
    #[must_use]
    pub fn children_at(&self, index: isize) -> NodeSet<'a> {
        let elems = self.child_elements();
        let picked = normalize_index(index, elems.len()).map(|i| elems[i]);
        self.make(picked.into_iter().collect())
    }

    /// Returns the element children that match `selector`, each tested on
    /// its own.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the matcher.
    pub fn children_filtered(&self, selector: &str) -> Result<NodeSet<'a>, SelectError> {
        let mut kept = Vec::new();
        for child in self.child_elements() {
            if self.matcher.matches(self.doc, selector, child)? {
                kept.push(child);
            }
        }
        Ok(self.make(kept))
    }

    /// Returns all children of every node (text and comments included), in
    /// set order and then document order. Nothing is filtered or deduplicated.
    #[must_use]
    pub fn contents(&self) -> NodeSet<'a> {
        let all = self
            .iter()
            .flat_map(|node| self.doc.children(node))
            .collect();
        self.make(all)
    }

    /// Runs `selector` over the element children of the set.
    ///
    /// The matcher receives the children as one candidate list; how far below
    /// them it searches is up to the matcher. Duplicates in its answer are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the matcher.
    pub fn find(&self, selector: &str) -> Result<NodeSet<'a>, SelectError> {
        let pool = self.child_elements();
        let matched = self.matcher.select(self.doc, selector, &pool)?;
        let total = matched.len();
        let unique = unique_nodes(matched);
        if unique.len() != total {
            log::debug!(
                target: "domset::traversal",
                "find({selector}): dropped {} duplicate nodes from matcher",
                total - unique.len()
            );
        }
        Ok(self.make(unique))
    }

    fn child_elements(&self) -> Vec<NodeId> {
        self.iter()
            .flat_map(|node| self.doc.children(node))
            .filter(|&child| is_tag(self.doc, child))
            .collect()
    }
}
