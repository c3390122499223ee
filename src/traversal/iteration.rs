//! Iteration and transformation: `each`, `map`, `filter`, `is`.

use super::NodeSet;
use crate::error::SelectError;
use crate::tree::NodeId;
use std::fmt;
use std::ops::ControlFlow;

/// What an [`each`](NodeSet::each) callback may return.
///
/// `()` always continues, `bool` stops on `false`, and
/// [`ControlFlow`] stops on `Break`.
pub trait EachControl {
    /// Returns `true` to visit the next node.
    fn should_continue(self) -> bool;
}

impl EachControl for () {
    fn should_continue(self) -> bool {
        true
    }
}

impl EachControl for bool {
    fn should_continue(self) -> bool {
        self
    }
}

impl<B> EachControl for ControlFlow<B> {
    fn should_continue(self) -> bool {
        self.is_continue()
    }
}

/// A set-like value that can say whether it holds a node.
pub trait Membership {
    /// Returns `true` if `node` belongs to `self`.
    fn is(&self, node: NodeId) -> bool;
}

impl Membership for NodeSet<'_> {
    fn is(&self, node: NodeId) -> bool {
        self.contains(node)
    }
}

impl Membership for Vec<NodeId> {
    fn is(&self, node: NodeId) -> bool {
        self.contains(&node)
    }
}

type Predicate<'m> = Box<dyn for<'s> FnMut(&NodeSet<'s>, usize, NodeId) -> bool + 'm>;

/// The criterion of [`filter`](NodeSet::filter) and [`is`](NodeSet::is).
pub enum Match<'m> {
    /// Keep nodes the matcher accepts when given only that node.
    Selector(&'m str),
    /// Keep nodes for which the predicate returns `true`. It receives a set
    /// wrapping just the node, the node's index and the node.
    Predicate(Predicate<'m>),
    /// Keep nodes that belong to another set.
    Set(&'m dyn Membership),
    /// Keep nodes identical to this one.
    Node(NodeId),
}

impl<'m> Match<'m> {
    /// Wraps a closure as a [`Match::Predicate`].
    pub fn predicate<F>(f: F) -> Self
    where
        F: for<'s> FnMut(&NodeSet<'s>, usize, NodeId) -> bool + 'm,
    {
        Self::Predicate(Box::new(f))
    }
}

impl<'m> From<&'m str> for Match<'m> {
    fn from(selector: &'m str) -> Self {
        Self::Selector(selector)
    }
}

impl From<NodeId> for Match<'_> {
    fn from(node: NodeId) -> Self {
        Self::Node(node)
    }
}

impl<'m> From<&'m NodeSet<'_>> for Match<'m> {
    fn from(set: &'m NodeSet<'_>) -> Self {
        Self::Set(set)
    }
}

impl<'m> From<&'m Vec<NodeId>> for Match<'m> {
    fn from(nodes: &'m Vec<NodeId>) -> Self {
        Self::Set(nodes)
    }
}

impl fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(selector) => f.debug_tuple("Selector").field(selector).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Set(_) => f.write_str("Set(..)"),
            Self::Node(node) => f.debug_tuple("Node").field(node).finish(),
        }
    }
}

impl<'a> NodeSet<'a> {
    /// Calls `f` for each node in order with a set wrapping the node, its
    /// index and the node. Stops early when `f` asks to (see
    /// [`EachControl`]). Returns `self` for chaining.
    pub fn each<F, R>(&self, mut f: F) -> &Self
    where
        F: FnMut(&NodeSet<'a>, usize, NodeId) -> R,
        R: EachControl,
    {
        for (index, node) in self.iter().enumerate() {
            let single = self.make(vec![node]);
            if !f(&single, index, node).should_continue() {
                break;
            }
        }
        self
    }

    /// Builds a new set from what `f` returns for each node.
    ///
    /// `f` may return anything iterable over nodes: `None` contributes
    /// nothing, a `Vec` is spliced in. No deduplication happens.
    #[must_use]
    pub fn map<F, R>(&self, mut f: F) -> NodeSet<'a>
    where
        F: FnMut(usize, NodeId) -> R,
        R: IntoIterator<Item = NodeId>,
    {
        let mut out = Vec::new();
        for (index, node) in self.iter().enumerate() {
            out.extend(f(index, node));
        }
        self.make(out)
    }

    /// Keeps the nodes accepted by `criterion`, in their original order.
    ///
    /// ```
    /// use domset::{Document, Match, NodeId, NodeSet, SelectError};
    ///
    /// let mut doc = Document::new();
    /// let a = doc.create_element("a", vec![]);
    /// let b = doc.create_element("b", vec![]);
    /// let matcher = |_: &Document, _: &str, c: &[NodeId]| Ok::<Vec<NodeId>, SelectError>(c.to_vec());
    /// let set = NodeSet::new(&doc, &matcher, vec![a, b]);
    ///
    /// assert_eq!(set.filter(b).unwrap().nodes(), &[b]);
    /// let odd = set.filter(Match::predicate(|_, i, _| i % 2 == 1)).unwrap();
    /// assert_eq!(odd.nodes(), &[b]);
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the matcher for
    /// [`Match::Selector`].
    pub fn filter<'m>(&self, criterion: impl Into<Match<'m>>) -> Result<NodeSet<'a>, SelectError> {
        let kept = self.filter_nodes(criterion.into())?;
        Ok(self.make(kept))
    }

    /// Returns `true` if `criterion` accepts at least one node.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the matcher for
    /// [`Match::Selector`].
    pub fn is<'m>(&self, criterion: impl Into<Match<'m>>) -> Result<bool, SelectError> {
        Ok(!self.filter_nodes(criterion.into())?.is_empty())
    }

    fn filter_nodes(&self, criterion: Match<'_>) -> Result<Vec<NodeId>, SelectError> {
        let mut kept = Vec::new();
        match criterion {
            Match::Selector(selector) => {
                for node in self.iter() {
                    if self.matcher.matches(self.doc, selector, node)? {
                        kept.push(node);
                    }
                }
            }
            Match::Predicate(mut predicate) => {
                for (index, node) in self.iter().enumerate() {
                    let single = self.make(vec![node]);
                    if predicate(&single, index, node) {
                        kept.push(node);
                    }
                }
            }
            Match::Set(other) => kept.extend(self.iter().filter(|&node| other.is(node))),
            Match::Node(target) => kept.extend(self.iter().filter(|&node| node == target)),
        }
        Ok(kept)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::{fixture, NAMES};
    use std::ops::ControlFlow;

    #[test]
    fn test_each_visits_in_order() {
        let f = fixture();
        let set = NodeSet::new(&f.doc, NAMES, vec![f.apple, f.orange, f.pear]);
        let mut seen = Vec::new();

        set.each(|single, index, node| {
            assert_eq!(single.nodes(), &[node]);
            assert_eq!(single.previous(), Some(&set));
            seen.push((index, node));
        });

        assert_eq!(seen, vec![(0, f.apple), (1, f.orange), (2, f.pear)]);
    }

    #[test]
    fn test_each_stops_on_false() {
        let f = fixture();
        let set = NodeSet::new(
            &f.doc,
            NAMES,
            vec![f.apple, f.orange, f.pear, f.carrot, f.sweetcorn],
        );
        let mut visited = Vec::new();

        let returned = set.each(|_, index, _| {
            visited.push(index);
            index != 2
        });

        assert_eq!(visited, vec![0, 1, 2]);
        assert!(std::ptr::eq(returned, &set));
        assert_eq!(returned.len(), 5);
    }

    #[test]
    fn test_each_true_continues() {
        let f = fixture();
        let set = NodeSet::new(&f.doc, NAMES, vec![f.apple, f.orange]);
        let mut count = 0;
        set.each(|_, _, _| {
            count += 1;
            true
        });
        assert_eq!(count, 2);
    }

    #[test]
    fn test_each_control_flow() {
        let f = fixture();
        let set = NodeSet::new(&f.doc, NAMES, vec![f.apple, f.orange, f.pear]);
        let mut last = None;
        set.each(|_, _, node| {
            last = Some(node);
            if node == f.orange {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(last, Some(f.orange));
    }

    #[test]
    fn test_map_drops_none() {
        let f = fixture();
        let set = NodeSet::new(&f.doc, NAMES, vec![f.apple, f.orange, f.pear, f.carrot]);
        let evens = set.map(|index, node| (index % 2 == 0).then_some(node));

        assert_eq!(evens.nodes(), &[f.apple, f.pear]);
        assert_eq!(evens.end(), set);
    }

    #[test]
    fn test_map_splices_sequences() {
        let f = fixture();
        let set = NodeSet::new(&f.doc, NAMES, vec![f.fruits, f.vegetables]);
        let kids = set.map(|_, node| f.doc.children(node).collect::<Vec<_>>());

        assert_eq!(
            kids.nodes(),
            &[f.apple, f.newline, f.orange, f.ripe, f.pear, f.carrot, f.sweetcorn]
        );
    }

    #[test]
    fn test_map_keeps_duplicates() {
        let f = fixture();
        let set = NodeSet::new(&f.doc, NAMES, vec![f.apple, f.orange]);
        let parents = set.map(|_, node| f.doc.parent(node));
        assert_eq!(parents.nodes(), &[f.fruits, f.fruits]);
    }

    #[test]
    fn test_filter_by_selector() {
        let f = fixture();
        let set = NodeSet::new(&f.doc, NAMES, vec![f.apple, f.newline, f.orange, f.pear]);

        assert_eq!(set.filter(".orange").unwrap().nodes(), &[f.orange]);
        assert_eq!(set.filter("li").unwrap().len(), 3);
        assert!(set.filter("").is_err());
    }

    #[test]
    fn test_filter_by_predicate_receives_single_set() {
        let f = fixture();
        let set = NodeSet::new(&f.doc, NAMES, vec![f.apple, f.orange, f.pear]);
        let doc = &f.doc;

        let kept = set
            .filter(Match::predicate(|single, index, node| {
                assert_eq!(single.nodes(), &[node]);
                index == 0 || doc.attribute(node, "class") == Some("pear")
            }))
            .unwrap();
        assert_eq!(kept.nodes(), &[f.apple, f.pear]);
    }

    #[test]
    fn test_filter_by_other_set() {
        let f = fixture();
        let set = NodeSet::new(&f.doc, NAMES, vec![f.apple, f.orange, f.pear]);
        let other = NodeSet::new(&f.doc, NAMES, vec![f.pear, f.carrot, f.apple]);

        assert_eq!(set.filter(&other).unwrap().nodes(), &[f.apple, f.pear]);
        let list = vec![f.orange];
        assert_eq!(set.filter(&list).unwrap().nodes(), &[f.orange]);
        let list = vec![f.carrot];
        assert!(set.filter(Match::Set(&list)).unwrap().is_empty());
    }

    #[test]
    fn test_filter_by_node_reference() {
        let f = fixture();
        let set = NodeSet::new(&f.doc, NAMES, vec![f.apple, f.orange, f.pear]);

        let only = set.filter(f.orange).unwrap();
        assert_eq!(only.nodes(), &[f.orange]);
        assert_eq!(only.end(), set);
        assert!(set.filter(f.carrot).unwrap().is_empty());
    }

    #[test]
    fn test_is() {
        let f = fixture();
        let set = NodeSet::new(&f.doc, NAMES, vec![f.apple, f.orange]);

        assert!(set.is(".orange").unwrap());
        assert!(!set.is("ul").unwrap());
        assert!(set.is(f.apple).unwrap());
        assert!(!set.is(f.pear).unwrap());
        assert!(set.is(Match::predicate(|_, index, _| index == 1)).unwrap());
    }

    #[test]
    fn test_match_debug() {
        assert_eq!(format!("{:?}", Match::Selector("li")), "Selector(\"li\")");
        assert_eq!(
            format!("{:?}", Match::predicate(|_, _, _| true)),
            "Predicate(..)"
        );
    }
}
