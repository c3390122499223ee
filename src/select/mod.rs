//! The selector engine seam.
//!
//! `domset` does not interpret selector strings. Every selector-based
//! operation hands a selector and a list of candidate nodes to a
//! [`Matcher`], which returns the candidates that match, in input order.
//!
//! Any `Fn(&Document, &str, &[NodeId]) -> Result<Vec<NodeId>, SelectError>`
//! is a `Matcher`, so small engines can be plain closures:
//!
//! ```
//! use domset::select::Matcher;
//! use domset::{Document, NodeId, SelectError};
//!
//! let by_name = |doc: &Document, selector: &str, candidates: &[NodeId]| {
//!     Ok::<Vec<NodeId>, SelectError>(
//!         candidates
//!             .iter()
//!             .copied()
//!             .filter(|&id| doc.node_name(id) == Some(selector))
//!             .collect(),
//!     )
//! };
//!
//! let mut doc = Document::new();
//! let p = doc.create_element("p", vec![]);
//! assert!(by_name.matches(&doc, "p", p).unwrap());
//! ```

use crate::error::SelectError;
use crate::tree::{Document, NodeId};

/// A selector engine.
pub trait Matcher {
    /// Returns the subsequence of `candidates` that match `selector`.
    ///
    /// Implementations must preserve the relative order of `candidates`.
    /// They may search below the candidates as well, in which case the
    /// returned nodes are not limited to the candidate list.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError`] if the selector is malformed or the engine
    /// fails.
    fn select(
        &self,
        doc: &Document,
        selector: &str,
        candidates: &[NodeId],
    ) -> Result<Vec<NodeId>, SelectError>;

    /// Tests a single node: the engine, given only `node`, must return `node`
    /// first.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`select`](Matcher::select).
    fn matches(&self, doc: &Document, selector: &str, node: NodeId) -> Result<bool, SelectError> {
        Ok(self.select(doc, selector, &[node])?.first() == Some(&node))
    }
}

impl<F> Matcher for F
where
    F: Fn(&Document, &str, &[NodeId]) -> Result<Vec<NodeId>, SelectError>,
{
    fn select(
        &self,
        doc: &Document,
        selector: &str,
        candidates: &[NodeId],
    ) -> Result<Vec<NodeId>, SelectError> {
        self(doc, selector, candidates)
    }
}
