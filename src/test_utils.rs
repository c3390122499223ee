//! Tree builders and a toy selector engine for unit tests.

use crate::error::SelectError;
use crate::select::Matcher;
use crate::tree::{Attribute, Document, NodeId};

/// [`name_matcher`] as a `'static` trait object.
pub(crate) const NAMES: &dyn Matcher = &name_matcher;

pub(crate) fn element(doc: &mut Document, parent: NodeId, name: &str) -> NodeId {
    element_with(doc, parent, name, &[])
}

pub(crate) fn element_with(
    doc: &mut Document,
    parent: NodeId,
    name: &str,
    attrs: &[(&str, &str)],
) -> NodeId {
    let attributes = attrs
        .iter()
        .map(|&(name, value)| Attribute::new(name, value))
        .collect();
    let id = doc.create_element(name, attributes);
    doc.append_child(parent, id);
    id
}

pub(crate) fn text(doc: &mut Document, parent: NodeId, content: &str) -> NodeId {
    let id = doc.create_text(content);
    doc.append_child(parent, id);
    id
}

pub(crate) fn comment(doc: &mut Document, parent: NodeId, content: &str) -> NodeId {
    let id = doc.create_comment(content);
    doc.append_child(parent, id);
    id
}

/// Matches comma-separated lists of `*`, `name`, `.class` and `#id`.
///
/// Only the candidates themselves are tested, never their descendants.
pub(crate) fn name_matcher(
    doc: &Document,
    selector: &str,
    candidates: &[NodeId],
) -> Result<Vec<NodeId>, SelectError> {
    let parts = selector
        .split(',')
        .map(str::trim)
        .map(|part| parse_part(selector, part))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(candidates
        .iter()
        .copied()
        .filter(|&id| doc.is_element(id) && parts.iter().any(|part| part.test(doc, id)))
        .collect())
}

enum Part<'s> {
    Any,
    Name(&'s str),
    Class(&'s str),
    Id(&'s str),
}

impl Part<'_> {
    fn test(&self, doc: &Document, id: NodeId) -> bool {
        match *self {
            Part::Any => true,
            Part::Name(name) => doc
                .node_name(id)
                .is_some_and(|n| n.eq_ignore_ascii_case(name)),
            Part::Class(class) => doc
                .attribute(id, "class")
                .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class)),
            Part::Id(value) => doc.attribute(id, "id") == Some(value),
        }
    }
}

fn parse_part<'s>(selector: &str, part: &'s str) -> Result<Part<'s>, SelectError> {
    if part == "*" {
        return Ok(Part::Any);
    }
    let (ident, parsed) = if let Some(rest) = part.strip_prefix('.') {
        (rest, Part::Class(rest))
    } else if let Some(rest) = part.strip_prefix('#') {
        (rest, Part::Id(rest))
    } else {
        (part, Part::Name(part))
    };
    let valid = !ident.is_empty()
        && ident
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(parsed)
    } else {
        Err(SelectError::invalid(
            selector,
            format!("unsupported token `{part}`"),
        ))
    }
}

/// A small document used across the traversal tests:
///
/// ```text
/// root
/// └── html
///     └── body
///         ├── ul#fruits
///         │   ├── li.apple      "Apple"
///         │   ├── "\n"
///         │   ├── li.orange     "Orange"
///         │   ├── <!-- ripe -->
///         │   └── li.pear       "Pear"
///         └── ul#vegetables
///             ├── li.carrot
///             └── li.sweetcorn
/// ```
pub(crate) struct Fixture {
    pub doc: Document,
    pub html: NodeId,
    pub body: NodeId,
    pub fruits: NodeId,
    pub apple: NodeId,
    pub newline: NodeId,
    pub orange: NodeId,
    pub ripe: NodeId,
    pub pear: NodeId,
    pub vegetables: NodeId,
    pub carrot: NodeId,
    pub sweetcorn: NodeId,
}

pub(crate) fn fixture() -> Fixture {
    let mut doc = Document::new();
    let root = doc.root();
    let html = element(&mut doc, root, "html");
    let body = element(&mut doc, html, "body");

    let fruits = element_with(&mut doc, body, "ul", &[("id", "fruits")]);
    let apple = element_with(&mut doc, fruits, "li", &[("class", "apple")]);
    text(&mut doc, apple, "Apple");
    let newline = text(&mut doc, fruits, "\n");
    let orange = element_with(&mut doc, fruits, "li", &[("class", "orange")]);
    text(&mut doc, orange, "Orange");
    let ripe = comment(&mut doc, fruits, " ripe ");
    let pear = element_with(&mut doc, fruits, "li", &[("class", "pear")]);
    text(&mut doc, pear, "Pear");

    let vegetables = element_with(&mut doc, body, "ul", &[("id", "vegetables")]);
    let carrot = element_with(&mut doc, vegetables, "li", &[("class", "carrot")]);
    let sweetcorn = element_with(&mut doc, vegetables, "li", &[("class", "sweetcorn")]);

    Fixture {
        doc,
        html,
        body,
        fruits,
        apple,
        newline,
        orange,
        ripe,
        pear,
        vegetables,
        carrot,
        sweetcorn,
    }
}
