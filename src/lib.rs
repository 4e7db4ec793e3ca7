//! # ident-lint
//!
//! A visitor-driven lint rule that flags single-character declaration names.
//!
//! The core of the crate is [`IdentifierLengthRule`]: it declares the
//! declaration node kinds it wants to see, an external walker delivers
//! those nodes pre-order ([`TreeRule::on_enter`]) and post-order
//! ([`TreeRule::on_leave`]), and the rule reports one [`Finding`] per
//! one-character name not on its configured allow-list. Everything around
//! the rule — parsing source into [`SyntaxNode`] trees, aggregating and
//! formatting diagnostics — belongs to the embedding framework; this crate
//! only defines the seams ([`TreeRule`], [`DiagnosticSink`]) and a minimal
//! synchronous [`Walker`] to drive them.
//!
//! ## Example
//!
//! ```
//! use ident_lint::{
//!     CollectingSink, IdentifierLengthRule, NodeKind, SyntaxNode, Walker,
//! };
//!
//! let tree = SyntaxNode::new(NodeKind::CompilationUnit, 1, 1).with_child(
//!     SyntaxNode::new(NodeKind::ClassDefinition, 1, 1)
//!         .with_child(SyntaxNode::identifier("A", 1, 7)),
//! );
//!
//! let walker = Walker::builder()
//!     .rule(IdentifierLengthRule::new().allow_list("i,j"))
//!     .build();
//!
//! let mut sink = CollectingSink::new();
//! walker.walk_file("A.java", &tree, &mut sink);
//! assert_eq!(sink.findings().len(), 1);
//! assert_eq!(sink.findings()[0].args, vec!["A"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod kind;
mod node;
mod rule;
mod sink;
mod trace;
mod walker;

/// Built-in rule implementations.
pub mod rules;

pub use config::{Config, ConfigError, RuleOptions, RuleSettings};
pub use context::RuleContext;
pub use kind::NodeKind;
pub use node::SyntaxNode;
pub use rule::{RuleError, TreeRule, TreeRuleBox};
pub use rules::{AllowList, IdentifierLengthRule};
pub use sink::{CollectingSink, DiagnosticSink, Finding};
pub use trace::TraceState;
pub use walker::{Walker, WalkerBuilder};
