//! Optional human-readable traversal trace.

use crate::node::SyntaxNode;
use tracing::trace;

const INDENT_STEP: usize = 2;

/// Nesting state for the traversal trace.
///
/// Owned by the per-file [`RuleContext`](crate::RuleContext), never by a
/// rule instance, so one rule can serve concurrent per-file traversals.
/// The indent grows by two spaces for every delivered node on enter and
/// shrinks by two on leave; after a balanced traversal it is empty again.
///
/// Tracing is observational only: it writes to the `tracing` TRACE stream
/// and never influences findings.
#[derive(Debug, Default)]
pub struct TraceState {
    enabled: bool,
    indent: String,
}

impl TraceState {
    /// Creates trace state, active only when `enabled` is true.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            indent: String::new(),
        }
    }

    /// Whether tracing is active.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Current indentation string (two spaces per open node).
    #[must_use]
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// True when every entered node has been left again.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.indent.is_empty()
    }

    /// Records entry into a node: grows the indent, then prints the node's
    /// kind label and resolved name (if any).
    pub fn enter(&mut self, node: &SyntaxNode, name: Option<&SyntaxNode>) {
        if !self.enabled {
            return;
        }
        self.indent.push_str("  ");
        self.emit('+', node, name);
    }

    /// Records exit from a node: shrinks the indent, then prints.
    ///
    /// Underflow is clamped rather than faulted on; an unbalanced
    /// enter/leave sequence is a driver bug that must not break tracing.
    pub fn leave(&mut self, node: &SyntaxNode, name: Option<&SyntaxNode>) {
        if !self.enabled {
            return;
        }
        let len = self.indent.len().saturating_sub(INDENT_STEP);
        self.indent.truncate(len);
        self.emit('-', node, name);
    }

    /// Clears the indent back to its initial empty state.
    pub fn reset(&mut self) {
        self.indent.clear();
    }

    fn emit(&self, marker: char, node: &SyntaxNode, name: Option<&SyntaxNode>) {
        match name.and_then(SyntaxNode::text) {
            Some(text) => trace!(
                target: "ident_lint::walk",
                "{}{} {} {}",
                self.indent,
                marker,
                node.kind().label(),
                text
            ),
            None => trace!(
                target: "ident_lint::walk",
                "{}{} {}",
                self.indent,
                marker,
                node.kind().label()
            ),
        }
    }
}
