//! Rule flagging single-character declaration names.
//!
//! # Rationale
//!
//! One-letter names carry no meaning outside the tightest scopes. This rule
//! flags every declaration whose identifier is exactly one character long,
//! except names on a caller-supplied allow-list (conventionally loop
//! counters like `i` or `j`).
//!
//! # Configuration
//!
//! - `allow-list`: comma-separated names exempt from flagging. Tokens are
//!   taken verbatim between commas; matching is case-sensitive exact
//!   equality. Unset means nothing is exempt.

use crate::config::RuleOptions;
use crate::context::RuleContext;
use crate::kind::NodeKind;
use crate::node::SyntaxNode;
use crate::rule::{RuleError, TreeRule};

/// Rule code for single-char-identifier.
pub const CODE: &str = "IL001";

/// Rule name for single-char-identifier, also its rule id in findings.
pub const NAME: &str = "single-char-identifier";

/// Configuration key for the allow-list option.
pub const ALLOW_LIST_KEY: &str = "allow-list";

const INTEREST: &[NodeKind] = &[
    NodeKind::ClassDefinition,
    NodeKind::EnumConstant,
    NodeKind::EnumDefinition,
    NodeKind::ForEachHeader,
    NodeKind::ForInitHeader,
    NodeKind::InterfaceDefinition,
    NodeKind::MethodDefinition,
    NodeKind::Parameter,
    NodeKind::LocalVariableDefinition,
];

/// Names exempt from single-character flagging.
///
/// Built once from a comma-delimited string and immutable afterwards, so it
/// can be shared read-only across per-file traversals. Membership is
/// case-sensitive exact string equality; tokens are not trimmed or
/// normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: Vec<String>,
}

impl AllowList {
    /// Creates an empty allow-list: no name is exempt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an allow-list by splitting `list` on commas.
    ///
    /// Tokens are taken verbatim between commas. Splitting the empty string
    /// yields one empty-string entry, which matches no real identifier.
    #[must_use]
    pub fn from_delimited(list: &str) -> Self {
        Self {
            entries: list.split(',').map(String::from).collect(),
        }
    }

    /// Exact-match membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e == name)
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flags identifiers whose name is exactly one character long.
///
/// Covers class, interface, enum, enum constant, method, parameter, local
/// variable, and for-loop-header declarations. The rule holds no traversal
/// state; a single instance may serve concurrent per-file traversals.
#[derive(Debug, Clone, Default)]
pub struct IdentifierLengthRule {
    allow: AllowList,
}

impl IdentifierLengthRule {
    /// Creates the rule with an empty allow-list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allow-list from a comma-delimited string.
    #[must_use]
    pub fn allow_list(mut self, list: &str) -> Self {
        self.allow = AllowList::from_delimited(list);
        self
    }

    /// Builds the rule from its per-rule configuration table.
    #[must_use]
    pub fn from_options(options: &RuleOptions) -> Self {
        match options.get_str(ALLOW_LIST_KEY) {
            Some(list) => Self::new().allow_list(list),
            None => Self::new(),
        }
    }

    /// Checks one resolved name token and reports a finding for a
    /// one-character name not on the allow-list.
    ///
    /// A missing token is tolerated: comparison needs a text value, so no
    /// finding is possible and none is reported.
    fn check_name(
        &self,
        token: Option<&SyntaxNode>,
        ctx: &mut RuleContext<'_>,
    ) -> Result<(), RuleError> {
        let Some(token) = token else {
            return Ok(());
        };
        let Some(text) = token.text() else {
            return Err(RuleError::MissingTokenText {
                line: token.line(),
                column: token.column(),
            });
        };
        if text.chars().count() == 1 && !self.allow.contains(text) {
            ctx.report(token.line(), token.column(), NAME, &[text]);
        }
        Ok(())
    }
}

impl TreeRule for IdentifierLengthRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Flags single-character declaration names not on the allow-list"
    }

    fn interest_kinds(&self) -> &'static [NodeKind] {
        INTEREST
    }

    fn on_enter(&self, node: &SyntaxNode, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let name = node.first_child_of_kind(NodeKind::Identifier);
        ctx.trace.enter(node, name);

        match node.kind() {
            NodeKind::ClassDefinition
            | NodeKind::EnumConstant
            | NodeKind::EnumDefinition
            | NodeKind::ForEachHeader
            | NodeKind::ForInitHeader
            | NodeKind::InterfaceDefinition
            | NodeKind::MethodDefinition
            | NodeKind::Parameter => {
                // A foreach header with a destructuring pattern has no name
                // token; that is legitimate, skip silently.
                if name.is_some() {
                    self.check_name(name, ctx)?;
                }
            }
            NodeKind::LocalVariableDefinition => {
                self.check_name(name, ctx)?;
            }
            // Kinds outside the interest set are ignored, not failed on.
            _ => {}
        }
        Ok(())
    }

    fn on_leave(&self, node: &SyntaxNode, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let name = node.first_child_of_kind(NodeKind::Identifier);
        ctx.trace.leave(node, name);

        match node.kind() {
            // Reserved for exit-time loop-header handling; currently none.
            NodeKind::ForEachHeader | NodeKind::ForInitHeader => {}
            _ => {}
        }
        Ok(())
    }
}
