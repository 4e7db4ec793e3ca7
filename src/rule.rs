//! Rule trait for visitor-driven lint rules.

use crate::context::RuleContext;
use crate::kind::NodeKind;
use crate::node::SyntaxNode;
use thiserror::Error;

/// Fault raised by a rule hook while inspecting a node.
///
/// These are recovered at the walker boundary: logged with the current
/// file and position, never propagated, so one malformed node cannot abort
/// a whole run.
#[derive(Debug, Error)]
pub enum RuleError {
    /// An identifier token was present in the tree but carried no text.
    #[error("identifier token at {line}:{column} has no text")]
    MissingTokenText {
        /// Line of the malformed token.
        line: usize,
        /// Column of the malformed token.
        column: usize,
    },
}

/// A lint rule driven by an external tree walker.
///
/// The rule never walks the tree itself. It declares the node kinds it wants
/// via [`interest_kinds`](TreeRule::interest_kinds), and the walker calls
/// [`on_enter`](TreeRule::on_enter) pre-order and
/// [`on_leave`](TreeRule::on_leave) post-order for exactly those kinds.
/// Findings go to the sink reachable through the context.
///
/// Hooks must tolerate kinds outside the interest set (ignore them, never
/// fail): a misrouting driver is a bug, not a crash.
///
/// # Example
///
/// ```
/// use ident_lint::{NodeKind, RuleContext, RuleError, SyntaxNode, TreeRule};
///
/// struct FlagEveryClass;
///
/// impl TreeRule for FlagEveryClass {
///     fn name(&self) -> &'static str { "flag-every-class" }
///     fn code(&self) -> &'static str { "XX001" }
///     fn interest_kinds(&self) -> &'static [NodeKind] {
///         &[NodeKind::ClassDefinition]
///     }
///     fn on_enter(
///         &self,
///         node: &SyntaxNode,
///         ctx: &mut RuleContext<'_>,
///     ) -> Result<(), RuleError> {
///         ctx.report(node.line(), node.column(), self.name(), &[]);
///         Ok(())
///     }
/// }
/// ```
pub trait TreeRule: Send + Sync {
    /// Returns the kebab-case name of this rule, used as its rule id in
    /// findings (e.g., "single-char-identifier").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "IL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// The node kinds the walker must route to this rule.
    fn interest_kinds(&self) -> &'static [NodeKind];

    /// The kinds a caller may legally configure this rule for.
    ///
    /// Returns a defensive copy so a misconfigured caller cannot request
    /// kinds the rule was not designed for. Defaults to the interest set.
    fn acceptable_kinds(&self) -> Vec<NodeKind> {
        self.interest_kinds().to_vec()
    }

    /// The kinds this rule cannot function without.
    ///
    /// Empty by default: rules opt in purely through the interest set.
    fn required_kinds(&self) -> &'static [NodeKind] {
        &[]
    }

    /// Called once per routed node, pre-order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] on a malformed node; the walker logs it and
    /// continues the traversal.
    fn on_enter(&self, node: &SyntaxNode, ctx: &mut RuleContext<'_>) -> Result<(), RuleError>;

    /// Called once per routed node when the walker backs out, post-order.
    ///
    /// # Errors
    ///
    /// Same recovery contract as [`on_enter`](TreeRule::on_enter).
    fn on_leave(&self, _node: &SyntaxNode, _ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        Ok(())
    }
}

/// Type alias for boxed rule trait objects.
pub type TreeRuleBox = Box<dyn TreeRule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CollectingSink;

    struct TestRule;

    impl TreeRule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn interest_kinds(&self) -> &'static [NodeKind] {
            &[NodeKind::MethodDefinition, NodeKind::Parameter]
        }
        fn on_enter(&self, node: &SyntaxNode, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
            ctx.report(node.line(), node.column(), self.name(), &[]);
            Ok(())
        }
    }

    #[test]
    fn acceptable_kinds_is_a_copy_of_interest_kinds() {
        let rule = TestRule;
        let mut acceptable = rule.acceptable_kinds();
        assert_eq!(acceptable, rule.interest_kinds().to_vec());

        // Mutating the copy must not affect the rule's own set.
        acceptable.clear();
        assert_eq!(rule.interest_kinds().len(), 2);
    }

    #[test]
    fn required_kinds_default_is_empty() {
        assert!(TestRule.required_kinds().is_empty());
    }

    #[test]
    fn default_on_leave_is_a_no_op() {
        let rule = TestRule;
        let mut sink = CollectingSink::new();
        let mut ctx = RuleContext::new("Main.java", &mut sink);
        let node = SyntaxNode::new(NodeKind::MethodDefinition, 1, 1);

        rule.on_leave(&node, &mut ctx).expect("on_leave");
        assert!(sink.findings().is_empty());
    }
}
