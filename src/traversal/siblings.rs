//! Sideways navigation: `next`, `next_all`, `prev`, `prev_all`, `siblings`.
//!
//! The directional walks only look at the *first* node of the set; later
//! nodes are ignored rather than unioned. Called on an empty set they return
//! that same set.

use super::NodeSet;
use crate::error::SelectError;
use crate::tree::{Document, NodeId};
use crate::util::{is_tag, UniqueNodes};
use rustc_hash::FxHashSet;

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self, doc: &Document, id: NodeId) -> Option<NodeId> {
        match self {
            Self::Forward => doc.next_sibling(id),
            Self::Backward => doc.prev_sibling(id),
        }
    }
}

impl<'a> NodeSet<'a> {
    /// Returns the first element following the first node of the set.
    #[must_use]
    pub fn next(&self) -> NodeSet<'a> {
        self.adjacent(Direction::Forward)
    }

    /// Returns the first element preceding the first node of the set.
    #[must_use]
    pub fn prev(&self) -> NodeSet<'a> {
        self.adjacent(Direction::Backward)
    }

    /// Returns every element after the first node of the set, nearest first.
    #[must_use]
    pub fn next_all(&self) -> NodeSet<'a> {
        match self.sibling_walk(Direction::Forward) {
            Some(found) => self.make(found),
            None => self.clone(),
        }
    }

    /// Like [`next_all`](NodeSet::next_all), with the collected list passed
    /// through the matcher in one call.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the matcher.
    pub fn next_all_filtered(&self, selector: &str) -> Result<NodeSet<'a>, SelectError> {
        self.sibling_walk_filtered(Direction::Forward, selector)
    }

    /// Returns every element before the first node of the set, nearest first.
    #[must_use]
    pub fn prev_all(&self) -> NodeSet<'a> {
        match self.sibling_walk(Direction::Backward) {
            Some(found) => self.make(found),
            None => self.clone(),
        }
    }

    /// Like [`prev_all`](NodeSet::prev_all), with the collected list passed
    /// through the matcher in one call.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the matcher.
    pub fn prev_all_filtered(&self, selector: &str) -> Result<NodeSet<'a>, SelectError> {
        self.sibling_walk_filtered(Direction::Backward, selector)
    }

    /// Returns the element siblings of the set's nodes, excluding the nodes
    /// already in the set.
    ///
    /// Siblings are gathered as the element children of the set's parents.
    /// When none of the nodes has a non-root parent, each node's own peer
    /// group (everything reachable through its sibling links) is used.
    #[must_use]
    pub fn siblings(&self) -> NodeSet<'a> {
        self.make(self.sibling_elements())
    }

    /// Like [`siblings`](NodeSet::siblings), with the collected list passed
    /// through the matcher in one call.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the matcher.
    pub fn siblings_filtered(&self, selector: &str) -> Result<NodeSet<'a>, SelectError> {
        let elems = self.sibling_elements();
        let matched = self.matcher.select(self.doc, selector, &elems)?;
        Ok(self.make(matched))
    }

    fn adjacent(&self, direction: Direction) -> NodeSet<'a> {
        let Some(first) = self.get(0) else {
            return self.clone();
        };
        let mut current = direction.step(self.doc, first);
        while let Some(id) = current {
            if is_tag(self.doc, id) {
                return self.make(vec![id]);
            }
            current = direction.step(self.doc, id);
        }
        self.make(Vec::new())
    }

    /// Element siblings of the first node in `direction`, or `None` for an
    /// empty set.
    fn sibling_walk(&self, direction: Direction) -> Option<Vec<NodeId>> {
        let first = self.get(0)?;
        let mut found = Vec::new();
        let mut current = direction.step(self.doc, first);
        while let Some(id) = current {
            if is_tag(self.doc, id) {
                found.push(id);
            }
            current = direction.step(self.doc, id);
        }
        Some(found)
    }

    fn sibling_walk_filtered(
        &self,
        direction: Direction,
        selector: &str,
    ) -> Result<NodeSet<'a>, SelectError> {
        let Some(found) = self.sibling_walk(direction) else {
            return Ok(self.clone());
        };
        let matched = self.matcher.select(self.doc, selector, &found)?;
        Ok(self.make(matched))
    }

    fn sibling_elements(&self) -> Vec<NodeId> {
        let parents = self.parent_nodes();
        let pool: Vec<NodeId> = if parents.is_empty() {
            self.siblings_and_me()
        } else {
            parents
                .iter()
                .flat_map(|&parent| self.doc.children(parent))
                .collect()
        };
        let members: FxHashSet<NodeId> = self.iter().collect();
        let elems: Vec<NodeId> = pool
            .into_iter()
            .filter(|&id| is_tag(self.doc, id) && !members.contains(&id))
            .collect();
        log::trace!(target: "domset::traversal", "siblings: {} -> {}", self.len(), elems.len());
        elems
    }

    /// Every node sharing a sibling chain with a node of the set, the nodes
    /// themselves included, in chain order.
    pub(crate) fn siblings_and_me(&self) -> Vec<NodeId> {
        let mut found = UniqueNodes::default();
        for node in self.iter() {
            let mut head = node;
            while let Some(prev) = self.doc.prev_sibling(head) {
                head = prev;
            }
            let mut current = Some(head);
            while let Some(id) = current {
                if !found.push(id) {
                    // Chain already collected from an earlier node.
                    break;
                }
                current = self.doc.next_sibling(id);
            }
        }
        found.into_vec()
    }
}
