//! Read-only syntax tree nodes supplied by the external parser.

use crate::kind::NodeKind;

/// One node of a parsed syntax tree.
///
/// Nodes are produced by an external parser and are read-only to rules.
/// Identifier tokens carry their source text; structural nodes usually do
/// not. Positions are 1-indexed line and column of the node's first token.
///
/// Because the parser itself is an external collaborator, trees for tests
/// and embedders are assembled with the `with_*` builder methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: NodeKind,
    line: usize,
    column: usize,
    text: Option<String>,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a new node with no text and no children.
    #[must_use]
    pub fn new(kind: NodeKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            text: None,
            children: Vec::new(),
        }
    }

    /// Creates an identifier token node carrying its source text.
    #[must_use]
    pub fn identifier(text: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(NodeKind::Identifier, line, column).with_text(text)
    }

    /// Sets the token text of this node.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends one child node.
    #[must_use]
    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several child nodes.
    #[must_use]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = SyntaxNode>,
    {
        self.children.extend(children);
        self
    }

    /// Returns this node's kind tag.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the 1-indexed source line.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-indexed source column.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the token text, if this node carries one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns this node's direct children.
    #[must_use]
    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// Returns the first direct child of the given kind, if any.
    ///
    /// Only direct children are searched; the declared name token of a
    /// definition node is always a direct child in the grammars this crate
    /// targets.
    #[must_use]
    pub fn first_child_of_kind(&self, kind: NodeKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_child_of_kind_finds_direct_child() {
        let node = SyntaxNode::new(NodeKind::ClassDefinition, 1, 1)
            .with_child(SyntaxNode::identifier("Foo", 1, 7));

        let name = node
            .first_child_of_kind(NodeKind::Identifier)
            .expect("identifier child");
        assert_eq!(name.text(), Some("Foo"));
        assert_eq!(name.column(), 7);
    }

    #[test]
    fn first_child_of_kind_does_not_recurse() {
        // Identifier is nested one level down, not a direct child.
        let node = SyntaxNode::new(NodeKind::ForEachHeader, 3, 5).with_child(
            SyntaxNode::new(NodeKind::LocalVariableDefinition, 3, 10)
                .with_child(SyntaxNode::identifier("x", 3, 14)),
        );

        assert!(node.first_child_of_kind(NodeKind::Identifier).is_none());
    }

    #[test]
    fn structural_nodes_have_no_text() {
        let node = SyntaxNode::new(NodeKind::Block, 2, 1);
        assert!(node.text().is_none());
        assert!(node.children().is_empty());
    }
}
