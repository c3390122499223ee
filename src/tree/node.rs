//! Node type definitions.
//!
//! The `NodeKind` enum carries the payload of every node in a markup tree.
//! `NodeType` is the payload-free tag derived from it, which is what
//! traversal code switches on (root boundary, element checks).

use super::Attribute;

/// The kind of a markup node and its associated data.
///
/// Navigation links (parent, children, siblings) are stored in `NodeData`,
/// not here.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The document root. There is exactly one per `Document`, and it never
    /// has a parent.
    Root,

    /// An element node, e.g., `<div class="x">`.
    Element {
        /// The tag name as it appeared in the source.
        name: String,
        /// Attributes in source order.
        attributes: Vec<Attribute>,
    },

    /// A text node containing character data.
    Text {
        /// The decoded text content.
        content: String,
    },

    /// A comment node, e.g., `<!-- ... -->`.
    Comment {
        /// The comment text without the delimiters.
        content: String,
    },

    /// A CDATA section, e.g., `<![CDATA[...]]>`.
    CData {
        /// The raw section content.
        content: String,
    },

    /// A directive such as `<!DOCTYPE html>` or a processing instruction.
    Directive {
        /// The directive name (`!doctype`, `?xml-stylesheet`, ...).
        name: String,
        /// Everything after the name, if any.
        data: Option<String>,
    },
}

/// The type tag of a node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// The document root.
    Root,
    /// An element (tag) node.
    Tag,
    /// Character data.
    Text,
    /// A comment.
    Comment,
    /// A CDATA section.
    CData,
    /// A doctype or processing instruction.
    Directive,
}

impl NodeKind {
    /// Returns the type tag for this payload.
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Root => NodeType::Root,
            Self::Element { .. } => NodeType::Tag,
            Self::Text { .. } => NodeType::Text,
            Self::Comment { .. } => NodeType::Comment,
            Self::CData { .. } => NodeType::CData,
            Self::Directive { .. } => NodeType::Directive,
        }
    }
}
