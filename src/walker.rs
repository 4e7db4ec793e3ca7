//! Tree walker driving rules over one file's syntax tree.

use crate::config::Config;
use crate::context::RuleContext;
use crate::node::SyntaxNode;
use crate::rule::{TreeRule, TreeRuleBox};
use crate::sink::DiagnosticSink;
use tracing::{debug, error, warn};

/// Builder for configuring a [`Walker`].
#[derive(Default)]
pub struct WalkerBuilder {
    rules: Vec<TreeRuleBox>,
    trace: bool,
}

impl WalkerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule with the walker.
    #[must_use]
    pub fn rule<R: TreeRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers a boxed rule with the walker.
    #[must_use]
    pub fn rule_box(mut self, rule: TreeRuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Enables or disables the traversal trace (default: disabled).
    #[must_use]
    pub fn trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Applies global settings from a configuration.
    #[must_use]
    pub fn config(mut self, config: &Config) -> Self {
        self.trace = config.trace;
        self
    }

    /// Builds the walker.
    #[must_use]
    pub fn build(self) -> Walker {
        Walker {
            rules: self.rules,
            trace: self.trace,
        }
    }
}

/// Synchronous depth-first traversal driver.
///
/// Walks one tree per call, delivering each node pre-order to
/// [`TreeRule::on_enter`] and post-order to [`TreeRule::on_leave`] for every
/// rule whose interest set contains the node's kind. Rules never see kinds
/// they did not register for.
///
/// The walker is the fault-recovery boundary: a hook error is logged with
/// the current file and the node's position, and the traversal continues.
/// One malformed node never aborts a file's analysis.
pub struct Walker {
    rules: Vec<TreeRuleBox>,
    trace: bool,
}

impl Walker {
    /// Creates a new builder for configuring a walker.
    #[must_use]
    pub fn builder() -> WalkerBuilder {
        WalkerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Traverses one file's tree, reporting findings into `sink`.
    ///
    /// A fresh context (and with it fresh trace state) is created per call,
    /// so the same walker may be reused across files.
    pub fn walk_file(&self, file: &str, root: &SyntaxNode, sink: &mut dyn DiagnosticSink) {
        debug!(file, rules = self.rules.len(), "starting traversal");

        let mut ctx = RuleContext::new(file, sink).with_trace(self.trace);
        self.visit(root, &mut ctx);

        // A balanced traversal always ends at depth zero; anything else is
        // a driver bug. Clamp so a reused walker starts the next file clean.
        if !ctx.trace.is_balanced() {
            warn!(file, "trace indent unbalanced at end of file; resetting");
            ctx.trace.reset();
        }

        debug!(file, "traversal complete");
    }

    fn visit(&self, node: &SyntaxNode, ctx: &mut RuleContext<'_>) {
        for rule in &self.rules {
            if rule.interest_kinds().contains(&node.kind()) {
                if let Err(e) = rule.on_enter(node, ctx) {
                    error!(
                        file = ctx.file,
                        line = node.line(),
                        column = node.column(),
                        rule = rule.name(),
                        error = %e,
                        "enter hook failed; continuing traversal"
                    );
                }
            }
        }

        for child in node.children() {
            self.visit(child, ctx);
        }

        for rule in self.rules.iter().rev() {
            if rule.interest_kinds().contains(&node.kind()) {
                if let Err(e) = rule.on_leave(node, ctx) {
                    error!(
                        file = ctx.file,
                        line = node.line(),
                        column = node.column(),
                        rule = rule.name(),
                        error = %e,
                        "leave hook failed; continuing traversal"
                    );
                }
            }
        }
    }
}
