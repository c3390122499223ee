//! Positional access: `first`, `last`, `eq`, `slice`.
//!
//! Negative indices count from the end of the set.

use super::NodeSet;

/// Resolves a possibly negative index against `len`.
pub(crate) fn normalize_index(index: isize, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };
    (resolved < len).then_some(resolved)
}

/// Resolves a slice bound: negative values count from the end, and the
/// result is clamped to `0..=len`.
fn clamp_bound(bound: isize, len: usize) -> usize {
    if bound < 0 {
        len.saturating_sub(bound.unsigned_abs())
    } else {
        bound.unsigned_abs().min(len)
    }
}

impl<'a> NodeSet<'a> {
    /// Returns a set holding only the first node. An empty set is returned
    /// as is.
    #[must_use]
    pub fn first(&self) -> NodeSet<'a> {
        match self.get(0) {
            Some(node) => self.make(vec![node]),
            None => self.clone(),
        }
    }

    /// Returns a set holding only the last node. An empty set is returned
    /// as is.
    #[must_use]
    pub fn last(&self) -> NodeSet<'a> {
        match self.nodes.last() {
            Some(&node) => self.make(vec![node]),
            None => self.clone(),
        }
    }

    /// Returns a set holding the node at `index`, or an empty set when the
    /// index is out of range.
    #[must_use]
    pub fn eq(&self, index: isize) -> NodeSet<'a> {
        let picked = normalize_index(index, self.len()).map(|i| self.nodes[i]);
        self.make(picked.into_iter().collect())
    }

    /// Returns the nodes from `start` up to, but not including, `end` (or to
    /// the end of the set when `end` is `None`).
    ///
    /// Negative bounds count from the end and out-of-range bounds are
    /// clamped; a start at or past the end gives an empty set.
    #[must_use]
    pub fn slice(&self, start: isize, end: Option<isize>) -> NodeSet<'a> {
        let len = self.len();
        let from = clamp_bound(start, len);
        let to = end.map_or(len, |end| clamp_bound(end, len));
        let nodes = if from < to {
            self.nodes[from..to].to_vec()
        } else {
            Vec::new()
        };
        self.make(nodes)
    }
}
