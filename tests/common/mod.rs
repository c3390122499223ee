//! Shared helpers for the integration tests.

#![allow(dead_code)]

use domset::{Attribute, Document, NodeId, SelectError};

/// Appends a new element under `parent`.
pub fn el(doc: &mut Document, parent: NodeId, name: &str, attrs: &[(&str, &str)]) -> NodeId {
    let attributes = attrs
        .iter()
        .map(|&(name, value)| Attribute::new(name, value))
        .collect();
    let id = doc.create_element(name, attributes);
    doc.append_child(parent, id);
    id
}

/// Appends a new text node under `parent`.
pub fn txt(doc: &mut Document, parent: NodeId, content: &str) -> NodeId {
    let id = doc.create_text(content);
    doc.append_child(parent, id);
    id
}

/// Tag-name selector engine. `!` is treated as a syntax error so tests can
/// check error propagation.
pub fn tag_matcher(
    doc: &Document,
    selector: &str,
    candidates: &[NodeId],
) -> Result<Vec<NodeId>, SelectError> {
    if selector.contains('!') {
        return Err(SelectError::invalid(selector, "unexpected `!`"));
    }
    Ok(candidates
        .iter()
        .copied()
        .filter(|&id| doc.node_name(id) == Some(selector))
        .collect())
}
